//! Interpolation curves through the anchor colors.
//!
//! Two variants are provided: piecewise-linear segments (the classic
//! "bipolar" look) and a pair of quadratic Bézier halves ("hotcold") that
//! pass through the cube-face contact points tangentially, removing the
//! Mach-band halos the linear path produces there.

pub mod bezier;
pub mod common;
pub mod linear;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::anchors::ANCHOR_COUNT;
use crate::color::Rgb;
use crate::error::ColormapError;

/// Which interpolation curve to run through the anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Piecewise-linear segments between consecutive anchors
    #[serde(alias = "bipolar")]
    Linear,
    /// Quadratic Bézier halves using the inner anchors as control points
    #[serde(alias = "cubic", alias = "hotcold")]
    Bezier,
}

impl Variant {
    /// Get the name of this interpolation variant
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Bezier => "bezier",
        }
    }

    /// The variant used when none is requested.
    ///
    /// Linear works well with dark neutral colors; light neutrals need the
    /// smoothed curve, which otherwise produces bright yellow or cyan rings.
    pub fn default_for(neutral: f64) -> Self {
        if neutral < 0.5 {
            Self::Linear
        } else {
            Self::Bezier
        }
    }

    /// Evaluate this curve over the anchor table at position `t` in [0, 1].
    pub fn evaluate(&self, anchors: &[Rgb; ANCHOR_COUNT], t: f64) -> Rgb {
        match self {
            Self::Linear => linear::evaluate(anchors, t),
            Self::Bezier => bezier::evaluate(anchors, t),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ColormapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "bipolar" => Ok(Self::Linear),
            "bezier" | "cubic" | "hotcold" => Ok(Self::Bezier),
            _ => Err(ColormapError::InvalidParameter {
                param: "interp".to_string(),
                message: format!("Unknown interpolation variant: {}", s),
            }),
        }
    }
}
