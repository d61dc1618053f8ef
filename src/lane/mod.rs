//! Lane-line extraction from per-class probability channels.
//!
//! Overview
//! - [`coords`] thresholds a channel at an 8-bit intensity and applies the
//!   mean-distance gate on the column coordinates.
//! - [`centerline`] averages the surviving columns per row into a thin
//!   centerline and records the row extent of the raw activation.
//! - [`fit`] fits `x = slope · y + intercept` by least squares and prunes
//!   centerline points by perpendicular distance.
//! - [`render`] draws the cleaned polyline into a black mask.
//! - `pipeline` runs the stages per channel and collects one
//!   [`LaneLine`](crate::LaneLine) per selected channel.
//!
//! Degenerate inputs are not errors: an empty activation yields a black
//! mask and a short centerline is drawn without fitting.

pub mod centerline;
pub mod coords;
pub mod fit;
pub mod params;
mod pipeline;
pub mod render;

pub use fit::{FitOutcome, LineModel};
pub use params::LaneParams;
pub use pipeline::LaneMaskPipeline;
