use crate::lane::LaneParams;
use crate::scaling::WorkingSize;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LaneDemoConfig {
    pub input: DemoInput,
    #[serde(default)]
    pub lane: LaneConfig,
    pub output: LaneDemoOutputConfig,
}

/// Where the demo reads its probabilities from.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoInput {
    /// JSON logits tensor `{"shape": [c, h, w], "data": [...]}`.
    Logits(PathBuf),
    /// One grayscale image per lane channel, already at working resolution.
    Channels(Vec<PathBuf>),
}

/// Optional overrides on top of [`LaneParams::default`].
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LaneConfig {
    pub intensity_threshold: Option<u8>,
    pub prune_distance_px: Option<f32>,
    pub line_thickness: Option<u32>,
    pub min_fit_points: Option<usize>,
    pub selected_channels: Option<Vec<usize>>,
    pub working_size: Option<WorkingSize>,
    /// Skip resampling and keep the tensor resolution.
    pub native_resolution: bool,
}

impl LaneConfig {
    pub fn resolve(&self) -> LaneParams {
        let mut p = LaneParams::default();
        if let Some(v) = self.intensity_threshold {
            p.intensity_threshold = v;
        }
        if let Some(v) = self.prune_distance_px {
            p.prune_distance_px = v;
        }
        if let Some(v) = self.line_thickness {
            p.line_thickness = v;
        }
        if let Some(v) = self.min_fit_points {
            p.min_fit_points = v;
        }
        if let Some(v) = &self.selected_channels {
            p.selected_channels = v.clone();
        }
        if let Some(v) = self.working_size {
            p.working_size = Some(v);
        }
        if self.native_resolution {
            p.working_size = None;
        }
        p
    }
}

#[derive(Debug, Deserialize)]
pub struct LaneDemoOutputConfig {
    #[serde(rename = "dir")]
    pub dir: PathBuf,
    /// Also write the fitted line (one sample per row) as a separate mask.
    #[serde(default)]
    pub save_fitted: bool,
}

impl LaneDemoOutputConfig {
    pub fn mask_path(&self, lane: usize) -> PathBuf {
        self.dir.join(format!("lane_{lane}_mask.png"))
    }

    pub fn fitted_path(&self, lane: usize) -> PathBuf {
        self.dir.join(format!("lane_{lane}_fitted.png"))
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.join("report.json")
    }
}

pub fn load_config(path: &Path) -> Result<LaneDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<LaneDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}
