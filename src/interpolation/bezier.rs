//! Bézier-smoothed interpolation through the anchors.
//!
//! The curve is built from two quadratic Bézier halves that share the
//! neutral midpoint as an endpoint. Each half uses the inner anchor (blue
//! or red on the dark branch) as its control point, so the path approaches
//! and leaves the cube faces tangentially instead of kinking there. The
//! halves agree with the linear variant at `t = 0`, `t = 0.5` and `t = 1`;
//! only the intermediate path differs.

use crate::anchors::ANCHOR_COUNT;
use crate::color::Rgb;

/// One quadratic Bézier arc, per channel.
fn quadratic(p0: Rgb, control: Rgb, p2: Rgb, u: f64) -> Rgb {
    let w0 = (1.0 - u) * (1.0 - u);
    let wc = 2.0 * (1.0 - u) * u;
    let w2 = u * u;
    Rgb::new(
        w0 * p0.r + wc * control.r + w2 * p2.r,
        w0 * p0.g + wc * control.g + w2 * p2.g,
        w0 * p0.b + wc * control.b + w2 * p2.b,
    )
}

/// Evaluate the smoothed curve at position `t` in [0, 1].
pub fn evaluate(anchors: &[Rgb; ANCHOR_COUNT], t: f64) -> Rgb {
    let [cold, cold_control, mid, hot_control, hot] = *anchors;
    let c = if t < 0.5 {
        quadratic(cold, cold_control, mid, 2.0 * t)
    } else {
        quadratic(mid, hot_control, hot, 2.0 * t - 1.0)
    };
    // The curve stays inside the convex hull of its control points, but
    // guard against float drift at the cube faces anyway.
    c.clamp_unit()
}
