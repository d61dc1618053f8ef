use crate::diagnostics::{LaneStage, TimingBreakdown};
use crate::types::LaneLine;
use serde::Serialize;

/// Result produced by
/// [`LaneMaskPipeline::process_with_diagnostics`](crate::LaneMaskPipeline::process_with_diagnostics).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneReport {
    #[serde(skip)]
    pub lines: Vec<LaneLine>,
    pub trace: PipelineTrace,
}

/// Trace of one pipeline run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputDescriptor>,
    pub timings: TimingBreakdown,
    pub lanes: Vec<LaneStage>,
}

/// Shape of the logits tensor a run started from.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub channels: usize,
    pub height: usize,
    pub width: usize,
    pub selected_channels: Vec<usize>,
}

fn format_model(stage: &LaneStage) -> String {
    stage
        .model
        .map(|m| format!("x = {:.4}·y + {:.2}", m.slope, m.intercept))
        .unwrap_or_else(|| "-".to_string())
}

impl LaneReport {
    pub fn print_text_summary(&self) {
        let trace = &self.trace;
        println!("Lane summary");
        if let Some(input) = &trace.input {
            println!(
                "  input: {} channels, {}x{}, selected {:?}",
                input.channels, input.width, input.height, input.selected_channels
            );
        }
        println!("  total_ms: {:.3}", trace.timings.total_ms);
        for stage in &trace.lanes {
            println!(
                "  lane {}: extracted={} kept={} rows={} pruned={} drawn={} fit: {}",
                stage.index,
                stage.extracted,
                stage.kept_after_outliers,
                stage.centerline_points,
                stage.pruned,
                stage.polyline_points,
                format_model(stage)
            );
        }
    }
}
