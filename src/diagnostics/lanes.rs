use crate::lane::centerline::RowExtent;
use crate::lane::fit::LineModel;
use serde::Serialize;

/// Point counts and fit result for one processed channel.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneStage {
    /// Position in the output sequence.
    pub index: usize,
    /// Source tensor channel, when the run started from logits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tensor_channel: Option<usize>,
    pub width: usize,
    pub height: usize,
    /// Pixels at or above the intensity threshold.
    pub extracted: usize,
    /// Pixels surviving the mean-distance gate.
    pub kept_after_outliers: usize,
    /// Distinct rows in the centerline.
    pub centerline_points: usize,
    /// Centerline points removed by the distance gate.
    pub pruned: usize,
    /// Points in the drawn polyline.
    pub polyline_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<LineModel>,
    pub extent: RowExtent,
    pub elapsed_ms: f64,
}

impl LaneStage {
    pub fn fitted(&self) -> bool {
        self.model.is_some()
    }
}
