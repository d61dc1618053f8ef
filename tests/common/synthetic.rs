use lane_mask::image::ImageF32;
use ndarray::Array3;

/// Channel with `value` on the straight segment from `from` to `to`
/// (one pixel per row, `(x, y)` order) and zero elsewhere.
pub fn line_channel(
    width: usize,
    height: usize,
    from: (usize, usize),
    to: (usize, usize),
    value: f32,
) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = ImageF32::new(width, height);
    let (x0, y0) = (from.0 as f32, from.1 as f32);
    let (x1, y1) = (to.0 as f32, to.1 as f32);
    let steps = (to.1 as i64 - from.1 as i64).unsigned_abs().max(1) as usize;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (x0 + (x1 - x0) * t).round() as usize;
        let y = (y0 + (y1 - y0) * t).round() as usize;
        if x < width && y < height {
            img.set(x, y, value);
        }
    }
    img
}

/// Logits where `lane_class` is strong on the slanted band
/// `|x − (x_offset + y)| <= half_width` and every other logit is zero.
pub fn slanted_lane_logits(
    classes: usize,
    height: usize,
    width: usize,
    lane_class: usize,
    x_offset: usize,
    half_width: usize,
) -> Array3<f32> {
    Array3::from_shape_fn((classes, height, width), |(c, y, x)| {
        let centre = (x_offset + y) as i64;
        if c == lane_class && (x as i64 - centre).unsigned_abs() as usize <= half_width {
            5.0
        } else {
            0.0
        }
    })
}
