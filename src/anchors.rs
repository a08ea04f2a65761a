//! Anchor color tables for the two colormap branches.
//!
//! The colormap runs through five anchor colors. Only the dark-neutral
//! table is stored; the light-neutral branch is derived from it by
//! reflection (reverse the anchors of `1 - neutral` and complement each
//! channel), so the mirror symmetry between the branches holds by
//! construction instead of by keeping two tables in sync.

use crate::color::Rgb;

/// Number of anchor colors along a branch.
pub const ANCHOR_COUNT: usize = 5;

/// Which half of the neutral parameter range a colormap sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Cyan - blue - dark gray - red - yellow (`neutral < 0.5`)
    Dark,
    /// Blue - cyan - light gray - yellow - red (`neutral >= 0.5`)
    Light,
}

impl Branch {
    /// Select the branch for a neutral brightness.
    ///
    /// Exactly 0.5 belongs to the light branch.
    pub fn for_neutral(neutral: f64) -> Self {
        if neutral < 0.5 {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Anchor table for the dark-neutral branch.
pub fn dark_anchors(neutral: f64) -> [Rgb; ANCHOR_COUNT] {
    [
        Rgb::CYAN,
        Rgb::BLUE,
        Rgb::gray(neutral),
        Rgb::RED,
        Rgb::YELLOW,
    ]
}

/// Anchor table for the branch that `neutral` selects.
///
/// The light branch is the reflection of the dark one, never a second
/// hand-written table.
pub fn branch_anchors(neutral: f64) -> [Rgb; ANCHOR_COUNT] {
    match Branch::for_neutral(neutral) {
        Branch::Dark => dark_anchors(neutral),
        Branch::Light => {
            let mut anchors = dark_anchors(1.0 - neutral).map(Rgb::complement);
            anchors.reverse();
            anchors
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_selection() {
        assert_eq!(Branch::for_neutral(0.0), Branch::Dark);
        assert_eq!(Branch::for_neutral(0.49), Branch::Dark);
        assert_eq!(Branch::for_neutral(0.5), Branch::Light);
        assert_eq!(Branch::for_neutral(1.0), Branch::Light);
    }

    #[test]
    fn test_dark_anchor_order() {
        let anchors = dark_anchors(0.1);
        assert_eq!(anchors[0], Rgb::CYAN);
        assert_eq!(anchors[1], Rgb::BLUE);
        assert_eq!(anchors[2], Rgb::gray(0.1));
        assert_eq!(anchors[3], Rgb::RED);
        assert_eq!(anchors[4], Rgb::YELLOW);
    }

    #[test]
    fn test_light_anchors_derived_by_reflection() {
        // blue - cyan - light gray - yellow - red
        let anchors = branch_anchors(0.9);
        assert_eq!(anchors[0], Rgb::BLUE);
        assert_eq!(anchors[1], Rgb::CYAN);
        assert!((anchors[2].r - 0.9).abs() < 1e-12);
        assert!((anchors[2].g - 0.9).abs() < 1e-12);
        assert!((anchors[2].b - 0.9).abs() < 1e-12);
        assert_eq!(anchors[3], Rgb::YELLOW);
        assert_eq!(anchors[4], Rgb::RED);
    }
}
