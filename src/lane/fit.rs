//! First-order line fitting over a centerline with perpendicular-distance
//! pruning.
//!
//! The line is parameterised as `x = slope · y + intercept` since lane lines
//! are closer to vertical than horizontal in the image.
use super::centerline::RowExtent;
use super::params::LaneParams;
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};
use serde::Serialize;

const SVD_EPS: f64 = 1e-12;

/// Fitted `x = slope · y + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineModel {
    pub slope: f32,
    pub intercept: f32,
}

impl LineModel {
    #[inline]
    pub fn x_at(&self, y: f32) -> f32 {
        self.slope * y + self.intercept
    }

    /// Perpendicular distance of `[x, y]` to the line.
    #[inline]
    pub fn distance(&self, p: [f32; 2]) -> f32 {
        (self.slope * p[1] - p[0] + self.intercept).abs() / (self.slope * self.slope + 1.0).sqrt()
    }

    /// The line evaluated at `min_y, min_y + 1, …` while below `max_y`,
    /// truncated to integer pixels.
    pub fn sample_rows(&self, min_y: f32, max_y: f32) -> Vec<[i32; 2]> {
        let n = (max_y - min_y).ceil().max(0.0) as usize;
        (0..n)
            .map(|i| {
                let y = min_y + i as f32;
                [self.x_at(y) as i32, y as i32]
            })
            .collect()
    }
}

/// Least-squares polynomial fit of `xs` against `ys`, highest power first.
///
/// Returns `None` when there are fewer samples than coefficients or the
/// system cannot be solved.
pub fn polyfit(ys: &[f64], xs: &[f64], degree: usize) -> Option<Vec<f64>> {
    let n = ys.len();
    let cols = degree + 1;
    if n != xs.len() || n < cols {
        return None;
    }
    let a = DMatrix::<f64>::from_fn(n, cols, |r, c| ys[r].powi((degree - c) as i32));
    let b = DVector::<f64>::from_column_slice(xs);
    let svd = a.svd(true, true);
    let sol = svd.solve(&b, SVD_EPS).ok()?;
    let coeffs: Vec<f64> = sol.iter().copied().collect();
    coeffs.iter().all(|c| c.is_finite()).then_some(coeffs)
}

/// Least-squares line through a centerline.
pub fn fit_line(centerline: &[[f32; 2]]) -> Option<LineModel> {
    let ys: Vec<f64> = centerline.iter().map(|p| p[1] as f64).collect();
    let xs: Vec<f64> = centerline.iter().map(|p| p[0] as f64).collect();
    let c = polyfit(&ys, &xs, 1)?;
    Some(LineModel {
        slope: c[0] as f32,
        intercept: c[1] as f32,
    })
}

/// Result of [`fit_and_prune`].
#[derive(Clone, Debug, Default)]
pub struct FitOutcome {
    /// `None` when the centerline was too short or the fit failed.
    pub model: Option<LineModel>,
    /// Surviving centerline points, in input order.
    pub points: Vec<[f32; 2]>,
    /// Number of centerline points removed by the distance gate.
    pub pruned: usize,
    /// The model sampled at every row of the extent; empty without a model.
    pub fitted: Vec<[i32; 2]>,
}

/// Fit a line through `centerline` and drop points farther than
/// `params.prune_distance_px` from it.
///
/// Centerlines shorter than `params.min_fit_points` are returned unchanged.
pub fn fit_and_prune(centerline: &[[f32; 2]], extent: &RowExtent, params: &LaneParams) -> FitOutcome {
    let passthrough = || FitOutcome {
        points: centerline.to_vec(),
        ..Default::default()
    };
    if centerline.len() < params.min_fit_points {
        debug!(
            "fit_and_prune: {} centerline points < {} -> skip fit",
            centerline.len(),
            params.min_fit_points
        );
        return passthrough();
    }
    let Some(model) = fit_line(centerline) else {
        warn!(
            "fit_and_prune: least-squares fit failed on {} points -> raw centerline",
            centerline.len()
        );
        return passthrough();
    };

    let fitted = model.sample_rows(extent.min_y, extent.max_y);
    let points: Vec<[f32; 2]> = centerline
        .iter()
        .copied()
        .filter(|&p| model.distance(p) <= params.prune_distance_px)
        .collect();
    let pruned = centerline.len() - points.len();
    debug!(
        "fit_and_prune: slope={:.4} intercept={:.3} kept={} pruned={}",
        model.slope,
        model.intercept,
        points.len(),
        pruned
    );
    FitOutcome {
        model: Some(model),
        points,
        pruned,
        fitted,
    }
}
