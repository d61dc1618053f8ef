#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod lane;
pub mod types;

// Building blocks used by the pipeline; public for tools and tests.
pub mod config;
pub mod scaling;
pub mod softmax;
pub mod tensor;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::LaneError;
pub use crate::lane::{LaneMaskPipeline, LaneParams, LineModel};
pub use crate::types::LaneLine;

pub use crate::diagnostics::{LaneReport, PipelineTrace};
pub use crate::tensor::ProbabilityTensor;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_mask::prelude::*;
///
/// # fn main() -> Result<(), LaneError> {
/// let (w, h) = (448usize, 208usize);
/// let left = ImageF32::new(w, h);
/// let right = ImageF32::new(w, h);
///
/// let pipeline = LaneMaskPipeline::new(LaneParams::default());
/// let masks = pipeline.masks(&[left, right])?;
/// println!("masks={} size={:?}", masks.len(), masks[0].dimensions());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageF32;
    pub use crate::{LaneError, LaneLine, LaneMaskPipeline, LaneParams};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::lane::centerline::{aggregate_rows, RowExtent};
    pub use crate::lane::coords::{extract_coordinates, filter_by_mean_distance};
    pub use crate::lane::fit::{fit_and_prune, fit_line, polyfit, FitOutcome};
    pub use crate::lane::render::{draw_polyline, render_polyline, to_pixels};
    pub use crate::scaling::{resize_bilinear, WorkingSize};
    pub use crate::softmax::{softmax, softmax_scaled};
}
