//! Thresholding a probability channel into pixel coordinates, and the
//! mean-distance outlier gate applied to them.
//!
//! Coordinates are `[x, y]` = `[column, row]`, emitted in row-major order.
use crate::image::{ImageF32, ImageView};

/// Quantize a channel to 8-bit intensities (`v · 255`, truncated and saturated).
///
/// # Panics
///
/// Panics when `channel.data` does not cover `w × h` at its stride; check
/// [`ImageF32::is_consistent`] first for hand-built channels.
pub fn quantize(channel: &ImageF32) -> Vec<u8> {
    let mut out = Vec::with_capacity(channel.w * channel.h);
    for row in channel.rows() {
        out.extend(row.iter().map(|&v| (v * 255.0) as u8));
    }
    out
}

/// All pixels whose quantized intensity is at least `threshold`.
///
/// Same buffer precondition as [`quantize`]. Zero-area channels yield nothing.
pub fn extract_coordinates(channel: &ImageF32, threshold: u8) -> Vec<[i32; 2]> {
    if channel.is_empty() {
        return Vec::new();
    }
    let bytes = quantize(channel);
    let mut coords = Vec::new();
    for (y, row) in bytes.chunks(channel.w).enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v >= threshold {
                coords.push([x as i32, y as i32]);
            }
        }
    }
    coords
}

/// Keeps points with `|x − mean(x)| < mean(x)`.
///
/// This is a magnitude gate rather than a statistical test: with a mean
/// close to zero nearly everything is rejected.
pub fn filter_by_mean_distance(coords: &[[i32; 2]]) -> Vec<[i32; 2]> {
    if coords.is_empty() {
        return Vec::new();
    }
    let mean_x = coords.iter().map(|p| p[0] as f64).sum::<f64>() / coords.len() as f64;
    coords
        .iter()
        .copied()
        .filter(|p| (p[0] as f64 - mean_x).abs() < mean_x)
        .collect()
}
