//! Diagnostics returned alongside the lane masks.
//!
//! `LaneReport` bundles the per-channel [`LaneLine`](crate::LaneLine)s with a
//! serializable `PipelineTrace`: input shape, stage timings and one
//! `LaneStage` of point counts and fit parameters per output lane.

pub mod lanes;
pub mod pipeline;
pub mod timing;

pub use lanes::LaneStage;
pub use pipeline::{InputDescriptor, LaneReport, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
