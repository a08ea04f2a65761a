//! Common utilities shared by the interpolation curves.

use crate::error::{ColormapError, Result};

/// Check that an argument lies in the unit interval.
///
/// Inputs are rejected rather than clamped; see `ColormapError::OutOfRange`.
pub fn check_unit_range(param: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ColormapError::OutOfRange { param, value })
    }
}

/// Locate the anchor segment containing position `t`.
///
/// Returns the index of the segment's left anchor and the fractional
/// position within the segment. `t = 1.0` lands at the end of the last
/// segment rather than past it.
pub fn segment(t: f64, anchor_count: usize) -> (usize, f64) {
    let position = t * (anchor_count - 1) as f64;
    let index = (position.floor() as usize).min(anchor_count - 2);
    (index, position - index as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_unit_range() {
        assert!(check_unit_range("t", 0.0).is_ok());
        assert!(check_unit_range("t", 1.0).is_ok());
        assert!(check_unit_range("t", -0.001).is_err());
        assert!(check_unit_range("t", 1.001).is_err());
        assert!(check_unit_range("t", f64::NAN).is_err());
    }

    #[test]
    fn test_segment_lookup() {
        // Five anchors, four segments
        assert_eq!(segment(0.0, 5), (0, 0.0));
        let (i, f) = segment(0.125, 5);
        assert_eq!(i, 0);
        assert!((f - 0.5).abs() < 1e-12);
        assert_eq!(segment(0.25, 5), (1, 0.0));
        assert_eq!(segment(0.5, 5), (2, 0.0));
        // t = 1.0 stays inside the last segment
        let (i, f) = segment(1.0, 5);
        assert_eq!(i, 3);
        assert!((f - 1.0).abs() < 1e-12);
    }
}
