//! I/O helpers for probability maps, lane masks and JSON.
//!
//! - `load_probability_png`: read a PNG/JPEG/etc. as a [0, 1] probability channel.
//! - `load_logits_json`: read a `(channels, height, width)` logits tensor.
//! - `save_mask_png`: write a rendered lane mask.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageF32;
use image::GrayImage;
use ndarray::Array3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk layout of a logits tensor: row-major `data` with `shape = [c, h, w]`.
#[derive(Debug, Deserialize)]
struct LogitsFile {
    shape: [usize; 3],
    data: Vec<f32>,
}

/// Load an image from disk, convert to 8-bit grayscale and map to [0, 1].
pub fn load_probability_png(path: &Path) -> Result<ImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw().into_iter().map(|v| v as f32 / 255.0).collect();
    ImageF32::from_vec(width, height, data).map_err(|e| format!("{}: {e}", path.display()))
}

/// Load a logits tensor stored as `{"shape": [c, h, w], "data": [...]}`.
pub fn load_logits_json(path: &Path) -> Result<Array3<f32>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read logits {}: {e}", path.display()))?;
    let file: LogitsFile = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse logits {}: {e}", path.display()))?;
    let [c, h, w] = file.shape;
    Array3::from_shape_vec((c, h, w), file.data)
        .map_err(|e| format!("Logits {} do not match shape {:?}: {e}", path.display(), file.shape))
}

/// Save a rendered lane mask to a PNG.
pub fn save_mask_png(mask: &GrayImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    mask.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
