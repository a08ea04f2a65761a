//! Bulk lookup-table generation.
//!
//! Plotting and image collaborators register a colormap as a table of
//! evenly spaced samples rather than calling the sampler per pixel. This
//! module builds that table and wraps it in a small LUT type with nearest
//! lookup and RGBA8 export.

use tracing::debug;

use crate::color::Rgb;
use crate::colormap::{eval, Colormap};
use crate::error::{ColormapError, Result};
use crate::interpolation::common::check_unit_range;
use crate::interpolation::Variant;

/// Default number of lookup-table entries.
pub const DEFAULT_LUTSIZE: usize = 256;

/// Build a table of `lutsize` evenly spaced samples over [0, 1].
///
/// The first entry is the cold extreme, the last the hot extreme, and for
/// odd sizes the middle entry is exactly the neutral gray. `lutsize` must
/// be at least 2.
pub fn build_table(lutsize: usize, neutral: f64, variant: Variant) -> Result<Vec<Rgb>> {
    if lutsize < 2 {
        return Err(ColormapError::InvalidParameter {
            param: "lutsize".to_string(),
            message: format!("lookup table needs at least 2 entries, got {}", lutsize),
        });
    }
    check_unit_range("neutral", neutral)?;

    debug!(
        lutsize = lutsize,
        neutral = neutral,
        variant = variant.name(),
        "Building colormap lookup table"
    );

    let last = (lutsize - 1) as f64;
    Ok((0..lutsize)
        .map(|i| eval(i as f64 / last, neutral, variant))
        .collect())
}

/// A prebuilt colormap lookup table.
#[derive(Debug, Clone)]
pub struct Lut {
    samples: Vec<Rgb>,
}

impl Lut {
    /// Sample a colormap into a table of `lutsize` entries.
    pub fn build(colormap: &dyn Colormap, lutsize: usize) -> Result<Self> {
        if lutsize < 2 {
            return Err(ColormapError::InvalidParameter {
                param: "lutsize".to_string(),
                message: format!("lookup table needs at least 2 entries, got {}", lutsize),
            });
        }

        debug!(
            lutsize = lutsize,
            colormap = colormap.name(),
            "Building colormap lookup table"
        );

        let last = (lutsize - 1) as f64;
        let samples = (0..lutsize)
            .map(|i| colormap.sample(i as f64 / last))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { samples })
    }

    /// Number of table entries.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Nearest-entry lookup; `t` is clamped into [0, 1].
    pub fn at(&self, t: f64) -> Rgb {
        let index = (t.clamp(0.0, 1.0) * (self.samples.len() - 1) as f64).round() as usize;
        self.samples[index]
    }

    /// The raw sample sequence, cold to hot.
    pub fn samples(&self) -> &[Rgb] {
        &self.samples
    }

    /// Export as 8-bit RGBA pixels for image collaborators.
    pub fn to_rgba8(&self) -> Vec<[u8; 4]> {
        self.samples.iter().map(|c| c.to_rgba8()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::HotCold;

    #[test]
    fn test_build_table_endpoints() {
        let table = build_table(256, 0.0, Variant::Linear).unwrap();
        assert_eq!(table.len(), 256);
        assert_eq!(table[0], Rgb::CYAN);
        assert_eq!(table[255], Rgb::YELLOW);
    }

    #[test]
    fn test_build_table_odd_size_hits_neutral() {
        let table = build_table(257, 0.25, Variant::Bezier).unwrap();
        let mid = table[128];
        assert!((mid.r - 0.25).abs() < 1e-12);
        assert!((mid.g - 0.25).abs() < 1e-12);
        assert!((mid.b - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_build_table_rejects_degenerate_size() {
        assert!(build_table(0, 0.3, Variant::Linear).is_err());
        assert!(build_table(1, 0.3, Variant::Linear).is_err());
        assert!(build_table(2, 0.3, Variant::Linear).is_ok());
    }

    #[test]
    fn test_lut_lookup() {
        let cmap = HotCold::new(0.9).unwrap();
        let lut = Lut::build(&cmap, 256).unwrap();
        assert_eq!(lut.len(), 256);
        assert_eq!(lut.at(0.0), Rgb::BLUE);
        assert_eq!(lut.at(1.0), Rgb::RED);
        // Lookup clamps instead of indexing out of bounds
        assert_eq!(lut.at(-3.0), lut.at(0.0));
        assert_eq!(lut.at(42.0), lut.at(1.0));
    }

    #[test]
    fn test_lut_rgba8_export() {
        let cmap = HotCold::new(1.0).unwrap();
        let lut = Lut::build(&cmap, 3).unwrap();
        let pixels = lut.to_rgba8();
        assert_eq!(pixels, vec![
            [0, 0, 255, 255],
            [255, 255, 255, 255],
            [255, 0, 0, 255],
        ]);
    }
}
