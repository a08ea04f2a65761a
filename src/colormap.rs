//! The bipolar / hotcold colormap samplers.
//!
//! A colormap is a pure function of the sample position `t`, the neutral
//! midpoint brightness, and the interpolation variant. The dark-neutral
//! branch (cyan - blue - gray - red - yellow) is evaluated directly; the
//! light-neutral branch is its reflection, `complement(dark(1 - t, 1 - n))`,
//! so `sample(t, n)` and `sample(1 - t, 1 - n)` are always per-channel
//! complements of each other.

use crate::anchors::{dark_anchors, Branch};
use crate::color::Rgb;
use crate::error::{ColormapError, Result};
use crate::interpolation::common::check_unit_range;
use crate::interpolation::Variant;

/// Evaluate the colormap with already-validated arguments.
pub(crate) fn eval(t: f64, neutral: f64, variant: Variant) -> Rgb {
    match Branch::for_neutral(neutral) {
        Branch::Dark => variant.evaluate(&dark_anchors(neutral), t),
        Branch::Light => variant
            .evaluate(&dark_anchors(1.0 - neutral), 1.0 - t)
            .complement(),
    }
}

/// Sample the diverging colormap at position `t`.
///
/// `t` runs over [0, 1] from the cold extreme through the neutral midpoint
/// at 0.5 to the hot extreme. `neutral` in [0, 1] sets the brightness of the
/// midpoint gray and selects the branch: below 0.5 the map runs
/// cyan-blue-gray-red-yellow, from 0.5 up it runs blue-cyan-gray-yellow-red.
/// Arguments outside [0, 1] are rejected with an error naming the argument.
pub fn sample(t: f64, neutral: f64, variant: Variant) -> Result<Rgb> {
    check_unit_range("t", t)?;
    check_unit_range("neutral", neutral)?;
    Ok(eval(t, neutral, variant))
}

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Sample the colormap at position `t` in [0, 1]
    fn sample(&self, t: f64) -> Result<Rgb>;

    /// Map a data value to a color given the data range.
    ///
    /// The normalized position is clamped into [0, 1], so out-of-range data
    /// pins to the extremes; a degenerate range maps to the midpoint. This
    /// is the one place the crate clamps an input, and only because the
    /// value being normalized is data, not a colormap parameter.
    fn map(&self, value: f64, min: f64, max: f64) -> Result<Rgb> {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.sample(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// The piecewise-linear diverging colormap.
#[derive(Debug, Clone, Copy)]
pub struct Bipolar {
    neutral: f64,
}

impl Bipolar {
    /// Create a linear bipolar colormap with the given neutral brightness.
    pub fn new(neutral: f64) -> Result<Self> {
        check_unit_range("neutral", neutral)?;
        Ok(Self { neutral })
    }

    /// The neutral midpoint brightness.
    pub fn neutral(&self) -> f64 {
        self.neutral
    }
}

impl Colormap for Bipolar {
    fn sample(&self, t: f64) -> Result<Rgb> {
        check_unit_range("t", t)?;
        Ok(eval(t, self.neutral, Variant::Linear))
    }

    fn name(&self) -> &str {
        "bipolar"
    }
}

/// The Bézier-smoothed diverging colormap.
#[derive(Debug, Clone, Copy)]
pub struct HotCold {
    neutral: f64,
}

impl HotCold {
    /// Create a smoothed hotcold colormap with the given neutral brightness.
    pub fn new(neutral: f64) -> Result<Self> {
        check_unit_range("neutral", neutral)?;
        Ok(Self { neutral })
    }

    /// The neutral midpoint brightness.
    pub fn neutral(&self) -> f64 {
        self.neutral
    }
}

impl Colormap for HotCold {
    fn sample(&self, t: f64) -> Result<Rgb> {
        check_unit_range("t", t)?;
        Ok(eval(t, self.neutral, Variant::Bezier))
    }

    fn name(&self) -> &str {
        "hotcold"
    }
}

/// Get a colormap by name
pub fn get_colormap(name: &str, neutral: f64) -> Result<Box<dyn Colormap>> {
    match name.to_lowercase().as_str() {
        "bipolar" => Ok(Box::new(Bipolar::new(neutral)?)),
        "hotcold" => Ok(Box::new(HotCold::new(neutral)?)),
        _ => Err(ColormapError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        }),
    }
}
