//! Assertion utilities for testing.
//!
//! Helper functions for floating-point and color comparisons.

use hotcold::Rgb;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is
/// greater than `epsilon` (default: 1e-9).
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two colors are approximately equal per channel.
pub fn assert_rgb_approx_eq(actual: Rgb, expected: Rgb, epsilon: Option<f64>) {
    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (channel, (a, e)) in [
        ("r", (actual.r, expected.r)),
        ("g", (actual.g, expected.g)),
        ("b", (actual.b, expected.b)),
    ] {
        let diff = (a - e).abs();
        assert!(
            diff <= eps,
            "Colors differ in channel {}: actual = {:?}, expected = {:?}, diff = {}, epsilon = {}",
            channel,
            actual,
            expected,
            diff,
            eps
        );
    }
}
