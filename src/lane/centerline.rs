//! Collapsing thick activations into a one-sample-per-row centerline.
use serde::Serialize;
use std::collections::BTreeMap;

/// Bounding extrema of the unfiltered coordinate set.
///
/// `min_y..max_y` is the row range the fitted line is sampled over.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowExtent {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl RowExtent {
    /// Extrema of `coords`; an empty set falls back to the lower half of the
    /// channel (`height / 2 .. height`) across its full width.
    pub fn from_coordinates(coords: &[[i32; 2]], width: usize, height: usize) -> Self {
        let mut extent = Self {
            min_x: 0.0,
            max_x: width as f32,
            min_y: height as f32 / 2.0,
            max_y: height as f32,
        };
        let Some(first) = coords.first() else {
            return extent;
        };
        let (mut x0, mut x1, mut y0, mut y1) = (first[0], first[0], first[1], first[1]);
        for p in &coords[1..] {
            x0 = x0.min(p[0]);
            x1 = x1.max(p[0]);
            y0 = y0.min(p[1]);
            y1 = y1.max(p[1]);
        }
        extent.min_x = x0 as f32;
        extent.max_x = x1 as f32;
        extent.min_y = y0 as f32;
        extent.max_y = y1 as f32;
        extent
    }
}

/// One `[mean_x, y]` per distinct row, ordered by increasing `y`.
pub fn aggregate_rows(coords: &[[i32; 2]]) -> Vec<[f32; 2]> {
    let mut rows: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for p in coords {
        let acc = rows.entry(p[1]).or_insert((0.0, 0));
        acc.0 += p[0] as f64;
        acc.1 += 1;
    }
    rows.into_iter()
        .map(|(y, (sum, n))| [(sum / n as f64) as f32, y as f32])
        .collect()
}
