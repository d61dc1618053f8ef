//! Parameter types configuring the lane post-processing stages.
//!
//! Defaults reproduce the reference behaviour for a five-class lane
//! segmentation head: classes 2 and 3 are the selected lines, channels are
//! resampled to 448×208 and every threshold below is expressed in pixels of
//! that working resolution.

use crate::scaling::WorkingSize;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Minimum 8-bit intensity (`probability · 255`, truncated) of a lane pixel.
    pub intensity_threshold: u8,
    /// Centerline points farther than this from the fitted line are dropped.
    pub prune_distance_px: f32,
    /// Stroke width of the rendered polyline.
    pub line_thickness: u32,
    /// Minimum centerline length before a line fit is attempted.
    pub min_fit_points: usize,
    /// Tensor channels treated as lane lines, in output order.
    pub selected_channels: Vec<usize>,
    /// Resolution the selected channels are resampled to. `None` keeps the
    /// tensor resolution.
    pub working_size: Option<WorkingSize>,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            intensity_threshold: 60,
            prune_distance_px: 5.0,
            line_thickness: 5,
            min_fit_points: 6,
            selected_channels: vec![2, 3],
            working_size: Some(WorkingSize::default()),
        }
    }
}

impl LaneParams {
    /// Number of lane lines the pipeline emits for a logits tensor.
    pub fn selected_lines(&self) -> usize {
        self.selected_channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params: LaneParams =
            serde_json::from_str(r#"{ "intensity_threshold": 90, "working_size": null }"#).unwrap();
        assert_eq!(params.intensity_threshold, 90);
        assert_eq!(params.working_size, None);
        assert_eq!(params.selected_lines(), 2);
        assert_eq!(params.prune_distance_px, 5.0);
    }
}
