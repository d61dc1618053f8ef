//! Lane mask pipeline driving the per-channel stages end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use lane_mask::{LaneMaskPipeline, LaneParams};
//! use ndarray::Array3;
//!
//! # fn example(logits: Array3<f32>) -> Result<(), lane_mask::LaneError> {
//! let pipeline = LaneMaskPipeline::new(LaneParams::default());
//! let lines = pipeline.process_logits(logits.view())?;
//! for (i, line) in lines.iter().enumerate() {
//!     println!("lane {i}: {} points", line.polyline.len());
//! }
//! # Ok(())
//! # }
//! ```
use super::centerline::{aggregate_rows, RowExtent};
use super::coords::{extract_coordinates, filter_by_mean_distance};
use super::fit::fit_and_prune;
use super::params::LaneParams;
use super::render::{render_for_channel, to_pixels};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, LaneReport, LaneStage, PipelineTrace, TimingBreakdown};
use crate::error::LaneError;
use crate::image::ImageF32;
use crate::scaling::resize_bilinear;
use crate::tensor::ProbabilityTensor;
use crate::types::LaneLine;
use image::GrayImage;
use log::debug;
use ndarray::ArrayView3;
use rayon::prelude::*;
use std::time::Instant;

/// Turns lane probability channels into fitted polylines and masks.
///
/// Holds only its parameters; every call is independent of the previous one.
#[derive(Clone, Debug, Default)]
pub struct LaneMaskPipeline {
    params: LaneParams,
}

impl LaneMaskPipeline {
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Run every stage on a single probability channel.
    pub fn process_channel(&self, channel: &ImageF32) -> Result<LaneLine, LaneError> {
        self.run_channel(0, None, channel).map(|(line, _)| line)
    }

    /// One [`LaneLine`] per channel, in input order.
    pub fn process_channels(&self, channels: &[ImageF32]) -> Result<Vec<LaneLine>, LaneError> {
        Ok(self
            .run_all(channels, None)?
            .into_iter()
            .map(|(line, _)| line)
            .collect())
    }

    /// Masks only, in input order.
    pub fn masks(&self, channels: &[ImageF32]) -> Result<Vec<GrayImage>, LaneError> {
        Ok(self
            .process_channels(channels)?
            .into_iter()
            .map(|line| line.mask)
            .collect())
    }

    /// Softmax the logits, pick the selected channels and bring them to the
    /// working resolution.
    pub fn prepare_channels(&self, logits: ArrayView3<'_, f32>) -> Result<Vec<ImageF32>, LaneError> {
        let tensor = ProbabilityTensor::from_logits(logits)?;
        let selected = tensor.select(&self.params.selected_channels)?;
        Ok(match self.params.working_size {
            Some(size) => selected.iter().map(|c| resize_bilinear(c, size)).collect(),
            None => selected,
        })
    }

    /// Full frame: logits `(classes, height, width)` to one line per selected channel.
    pub fn process_logits(&self, logits: ArrayView3<'_, f32>) -> Result<Vec<LaneLine>, LaneError> {
        let channels = self.prepare_channels(logits)?;
        self.process_channels(&channels)
    }

    /// Like [`process_channels`](Self::process_channels), with a trace.
    pub fn process_with_diagnostics(&self, channels: &[ImageF32]) -> Result<LaneReport, LaneError> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let lanes_start = Instant::now();
        let results = self.run_all(channels, None)?;
        timings.record("lanes", lanes_start);
        timings.finish(total_start);
        Ok(Self::assemble(results, None, timings))
    }

    /// Like [`process_logits`](Self::process_logits), with a trace.
    pub fn process_logits_with_diagnostics(
        &self,
        logits: ArrayView3<'_, f32>,
    ) -> Result<LaneReport, LaneError> {
        let total_start = Instant::now();
        let (channels_in, height, width) = logits.dim();
        debug!(
            "LaneMaskPipeline::process_logits start c={} h={} w={} selected={:?}",
            channels_in, height, width, self.params.selected_channels
        );
        let mut timings = TimingBreakdown::default();

        let prep_start = Instant::now();
        let channels = self.prepare_channels(logits)?;
        timings.record("softmax+resize", prep_start);

        let lanes_start = Instant::now();
        let results = self.run_all(&channels, Some(&self.params.selected_channels))?;
        timings.record("lanes", lanes_start);
        timings.finish(total_start);

        let input = InputDescriptor {
            channels: channels_in,
            height,
            width,
            selected_channels: self.params.selected_channels.clone(),
        };
        Ok(Self::assemble(results, Some(input), timings))
    }

    fn assemble(
        results: Vec<(LaneLine, LaneStage)>,
        input: Option<InputDescriptor>,
        timings: TimingBreakdown,
    ) -> LaneReport {
        let (lines, lanes): (Vec<_>, Vec<_>) = results.into_iter().unzip();
        LaneReport {
            lines,
            trace: PipelineTrace {
                input,
                timings,
                lanes,
            },
        }
    }

    fn run_all(
        &self,
        channels: &[ImageF32],
        tensor_channels: Option<&[usize]>,
    ) -> Result<Vec<(LaneLine, LaneStage)>, LaneError> {
        channels
            .par_iter()
            .enumerate()
            .map(|(i, channel)| {
                let source = tensor_channels.and_then(|t| t.get(i).copied());
                self.run_channel(i, source, channel)
            })
            .collect()
    }

    fn run_channel(
        &self,
        index: usize,
        tensor_channel: Option<usize>,
        channel: &ImageF32,
    ) -> Result<(LaneLine, LaneStage), LaneError> {
        if channel.is_empty() || !channel.is_consistent() {
            return Err(LaneError::ShapeMismatch {
                expected: (channel.w, channel.h),
                actual: channel.data.len(),
            });
        }
        let start = Instant::now();
        let params = &self.params;

        let coords = extract_coordinates(channel, params.intensity_threshold);
        let extent = RowExtent::from_coordinates(&coords, channel.w, channel.h);
        let kept = filter_by_mean_distance(&coords);
        let centerline = aggregate_rows(&kept);
        let fit = fit_and_prune(&centerline, &extent, params);
        let polyline = to_pixels(&fit.points);
        let mask = render_for_channel(channel, &polyline, params.line_thickness)?;

        debug!(
            "lane {}: extracted={} kept={} rows={} pruned={} fitted={}",
            index,
            coords.len(),
            kept.len(),
            centerline.len(),
            fit.pruned,
            fit.model.is_some()
        );

        let stage = LaneStage {
            index,
            tensor_channel,
            width: channel.w,
            height: channel.h,
            extracted: coords.len(),
            kept_after_outliers: kept.len(),
            centerline_points: centerline.len(),
            pruned: fit.pruned,
            polyline_points: polyline.len(),
            model: fit.model,
            extent,
            elapsed_ms: elapsed_ms(start),
        };
        let line = LaneLine {
            mask,
            polyline,
            model: fit.model,
            fitted: fit.fitted,
        };
        Ok((line, stage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn blank_channel(w: usize, h: usize) -> ImageF32 {
        ImageF32::new(w, h)
    }

    #[test]
    fn blank_channel_yields_black_mask() {
        let pipeline = LaneMaskPipeline::default();
        let line = pipeline.process_channel(&blank_channel(30, 20)).unwrap();
        assert!(line.is_blank());
        assert!(line.model.is_none());
        assert_eq!(line.mask.dimensions(), (30, 20));
        assert!(line.mask.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn output_length_matches_channel_count() {
        let pipeline = LaneMaskPipeline::default();
        let channels = vec![blank_channel(8, 8), blank_channel(8, 8), blank_channel(8, 8)];
        let masks = pipeline.masks(&channels).unwrap();
        assert_eq!(masks.len(), 3);
    }

    #[test]
    fn logits_select_and_resize() {
        let pipeline = LaneMaskPipeline::default();
        let logits = Array3::<f32>::zeros((5, 208, 976));
        let report = pipeline
            .process_logits_with_diagnostics(logits.view())
            .unwrap();
        assert_eq!(report.lines.len(), 2);
        for line in &report.lines {
            assert_eq!(line.mask.dimensions(), (448, 208));
        }
        assert_eq!(report.trace.lanes[0].tensor_channel, Some(2));
        assert_eq!(report.trace.lanes[1].tensor_channel, Some(3));
        // Uniform logits give probability 0.2 everywhere, below the threshold.
        assert!(report.lines.iter().all(LaneLine::is_blank));
    }

    #[test]
    fn missing_selected_channel_fails() {
        let pipeline = LaneMaskPipeline::default();
        let logits = Array3::<f32>::zeros((3, 4, 4));
        assert_eq!(
            pipeline.process_logits(logits.view()).unwrap_err(),
            LaneError::ChannelOutOfRange {
                index: 3,
                channels: 3
            }
        );
    }

    #[test]
    fn inconsistent_channel_is_rejected() {
        let pipeline = LaneMaskPipeline::default();
        let mut channel = blank_channel(5, 5);
        channel.data.truncate(7);
        assert!(matches!(
            pipeline.process_channel(&channel),
            Err(LaneError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn zero_area_channel_is_rejected() {
        let pipeline = LaneMaskPipeline::default();
        assert!(matches!(
            pipeline.process_channel(&blank_channel(10, 0)),
            Err(LaneError::ShapeMismatch { .. })
        ));
        assert!(pipeline.masks(&[blank_channel(0, 0)]).is_err());
    }
}
