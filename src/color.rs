//! RGB color value type.
//!
//! Colors are plain value types with `f64` channels nominally in [0, 1].
//! Everything here is a pure function of its inputs; conversion to 8-bit
//! RGBA happens only at the boundary to image/plotting collaborators.

use serde::{Deserialize, Serialize};

/// An RGB color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Cyan, the cold extreme of the dark-neutral branch.
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0);
    /// Blue, the cold intermediate anchor.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Red, the hot intermediate anchor.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Yellow, the hot extreme of the dark-neutral branch.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// A neutral gray with the given brightness.
    pub const fn gray(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Linear interpolation towards `other`, per channel.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: self.r * (1.0 - t) + other.r * t,
            g: self.g * (1.0 - t) + other.g * t,
            b: self.b * (1.0 - t) + other.b * t,
        }
    }

    /// Per-channel complement `1 - c`.
    ///
    /// Complementing the dark-neutral branch yields the light-neutral one,
    /// which is how the two branches stay mirror-symmetric.
    pub fn complement(self) -> Self {
        Self {
            r: 1.0 - self.r,
            g: 1.0 - self.g,
            b: 1.0 - self.b,
        }
    }

    /// Clamp every channel to [0, 1].
    pub fn clamp_unit(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Relative luminance with Rec. 709 weights.
    pub fn luminance(self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Convert to an 8-bit RGBA pixel with full alpha.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }
}
