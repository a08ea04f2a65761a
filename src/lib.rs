//! # hotcold
//!
//! Diverging bipolar/hot-cold colormaps with a configurable neutral midpoint.
//!
//! These colormaps visualize diverging data: positive and negative
//! deviations from a central value. The hot half resembles a blackbody
//! colormap, mirrored by a complementary cold half, meeting at a neutral
//! gray whose brightness is the `neutral` parameter. A neutral near 0.5
//! suits shaded 3D surfaces (it minimizes luminance change that would
//! obscure shading cues); a neutral near 0 or 1 suits 2D heat maps (it
//! maximizes luminance contrast).
//!
//! ## Key features
//!
//! - **Two interpolation variants**: piecewise-linear ("bipolar") and
//!   Bézier-smoothed ("hotcold"), agreeing at the extremes and midpoint.
//!   The smoothed variant removes the Mach-band halos the linear path
//!   shows where it grazes a face of the RGB cube.
//! - **Symmetric branches by construction**: the light-neutral branch is
//!   derived from the dark one by reflection, never duplicated.
//! - **Lookup-table export**: evenly sampled tables and RGBA8 conversion
//!   for plotting and image collaborators.
//!
//! ## Example
//!
//! ```
//! use hotcold::{sample, Variant};
//!
//! let cold = sample(0.0, 1.0 / 3.0, Variant::Linear).unwrap();
//! assert_eq!((cold.r, cold.g, cold.b), (0.0, 1.0, 1.0)); // cyan
//! ```

pub mod anchors;
pub mod color;
pub mod colormap;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod table;

pub use color::Rgb;
pub use colormap::{get_colormap, sample, Bipolar, Colormap, HotCold};
pub use config::ColormapConfig;
pub use error::{ColormapError, Result};
pub use interpolation::Variant;
pub use table::{build_table, Lut, DEFAULT_LUTSIZE};
