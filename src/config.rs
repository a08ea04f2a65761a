//! Colormap configuration.
//!
//! A small serde-backed parameter set for building colormaps from JSON
//! config files or embedded settings. Missing fields fall back to the
//! historical defaults: 256 table entries, a neutral brightness of 1/3,
//! and an interpolation variant chosen per branch (linear for dark
//! neutrals, Bézier for light ones).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::colormap::Colormap;
use crate::error::{ColormapError, Result};
use crate::interpolation::common::check_unit_range;
use crate::interpolation::Variant;
use crate::table::{build_table, DEFAULT_LUTSIZE};
use crate::{Bipolar, HotCold, Rgb};

/// Colormap parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColormapConfig {
    /// Number of lookup-table entries
    #[serde(default = "default_lutsize")]
    pub lutsize: usize,

    /// Brightness of the neutral midpoint, in [0, 1]
    #[serde(default = "default_neutral")]
    pub neutral: f64,

    /// Interpolation variant (None = choose per branch)
    #[serde(default)]
    pub interp: Option<Variant>,
}

fn default_lutsize() -> usize {
    DEFAULT_LUTSIZE
}

fn default_neutral() -> f64 {
    1.0 / 3.0
}

impl Default for ColormapConfig {
    fn default() -> Self {
        Self {
            lutsize: default_lutsize(),
            neutral: default_neutral(),
            interp: None,
        }
    }
}

impl ColormapConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        check_unit_range("neutral", self.neutral)?;
        if self.lutsize < 2 {
            return Err(ColormapError::Config {
                message: format!("lutsize must be at least 2, got {}", self.lutsize),
            });
        }
        Ok(())
    }

    /// The effective interpolation variant.
    pub fn variant(&self) -> Variant {
        self.interp
            .unwrap_or_else(|| Variant::default_for(self.neutral))
    }

    /// Build the configured colormap sampler.
    pub fn build(&self) -> Result<Box<dyn Colormap>> {
        match self.variant() {
            Variant::Linear => Ok(Box::new(Bipolar::new(self.neutral)?)),
            Variant::Bezier => Ok(Box::new(HotCold::new(self.neutral)?)),
        }
    }

    /// Build the configured lookup table.
    pub fn build_table(&self) -> Result<Vec<Rgb>> {
        build_table(self.lutsize, self.neutral, self.variant())
    }
}
