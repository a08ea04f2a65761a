//! Piecewise-linear interpolation between consecutive anchors.
//!
//! This is the classic bipolar look. The path visits every anchor exactly,
//! at the cost of sharp direction changes where it touches a face of the
//! RGB cube, which show up as visible band edges in rendered output.

use super::common::segment;
use crate::anchors::ANCHOR_COUNT;
use crate::color::Rgb;

/// Evaluate the piecewise-linear curve at position `t` in [0, 1].
pub fn evaluate(anchors: &[Rgb; ANCHOR_COUNT], t: f64) -> Rgb {
    let (index, frac) = segment(t, ANCHOR_COUNT);
    anchors[index].lerp(anchors[index + 1], frac)
}
