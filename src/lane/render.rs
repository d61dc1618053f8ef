//! Rasterizing a lane polyline into a single-channel mask.
//!
//! Segments are walked with Bresenham and stamped with a filled disc, giving
//! round joins and caps at the requested stroke width.
use crate::error::LaneError;
use crate::image::ImageF32;
use image::{GrayImage, Luma};
use imageproc::drawing::{draw_filled_circle_mut, BresenhamLineIter};

const LANE_WHITE: Luma<u8> = Luma([255]);

/// Truncate sub-pixel points to integer pixel positions (toward zero).
pub fn to_pixels(points: &[[f32; 2]]) -> Vec<[i32; 2]> {
    points.iter().map(|p| [p[0] as i32, p[1] as i32]).collect()
}

/// Draw an open polyline through `points` in order onto `canvas`.
pub fn draw_polyline(canvas: &mut GrayImage, points: &[[i32; 2]], thickness: u32) {
    let radius = (thickness.saturating_sub(1) / 2) as i32;
    let Some(first) = points.first() else {
        return;
    };
    if points.len() == 1 {
        draw_filled_circle_mut(canvas, (first[0], first[1]), radius, LANE_WHITE);
        return;
    }
    for pair in points.windows(2) {
        let start = (pair[0][0] as f32, pair[0][1] as f32);
        let end = (pair[1][0] as f32, pair[1][1] as f32);
        for (x, y) in BresenhamLineIter::new(start, end) {
            draw_filled_circle_mut(canvas, (x, y), radius, LANE_WHITE);
        }
    }
}

/// Fresh black `width × height` mask with the polyline drawn on it.
pub fn render_polyline(points: &[[i32; 2]], width: u32, height: u32, thickness: u32) -> GrayImage {
    let mut canvas = GrayImage::new(width, height);
    draw_polyline(&mut canvas, points, thickness);
    canvas
}

/// Render a mask sized to `channel`.
///
/// Fails with [`LaneError::ShapeMismatch`] when the channel has zero area,
/// its buffer does not cover its declared size, or the size does not fit a
/// mask.
pub fn render_for_channel(
    channel: &ImageF32,
    points: &[[i32; 2]],
    thickness: u32,
) -> Result<GrayImage, LaneError> {
    let mismatch = || LaneError::ShapeMismatch {
        expected: (channel.w, channel.h),
        actual: channel.data.len(),
    };
    if channel.is_empty() || !channel.is_consistent() {
        return Err(mismatch());
    }
    let width = u32::try_from(channel.w).map_err(|_| mismatch())?;
    let height = u32::try_from(channel.h).map_err(|_| mismatch())?;
    Ok(render_polyline(points, width, height, thickness))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_polyline_leaves_canvas_black() {
        let mask = render_polyline(&[], 20, 10, 5);
        assert_eq!(mask.dimensions(), (20, 10));
        assert!(mask.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn stroke_width_matches_thickness() {
        let mask = render_polyline(&[[10, 2], [10, 17]], 21, 20, 5);
        let row: Vec<u8> = (0..21).map(|x| mask.get_pixel(x, 10)[0]).collect();
        let lit: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 255)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(lit, vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let pts = [[3, 40], [20, 31], [35, 12], [61, 4]];
        let a = render_polyline(&pts, 64, 48, 5);
        let b = render_polyline(&pts, 64, 48, 5);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn out_of_canvas_points_are_clipped() {
        let mask = render_polyline(&[[-10, -10], [5, 5]], 8, 8, 3);
        assert_eq!(mask.get_pixel(5, 5)[0], 255);
        assert_eq!(mask.get_pixel(7, 0)[0], 0);
    }

    #[test]
    fn truncated_channel_is_a_shape_mismatch() {
        let mut channel = ImageF32::new(4, 4);
        channel.data.truncate(10);
        let err = render_for_channel(&channel, &[], 5).unwrap_err();
        assert!(matches!(err, LaneError::ShapeMismatch { .. }));
    }

    #[test]
    fn zero_area_canvas_is_a_shape_mismatch() {
        for (w, h) in [(0, 0), (10, 0), (0, 7)] {
            let err = render_for_channel(&ImageF32::new(w, h), &[], 5).unwrap_err();
            assert_eq!(
                err,
                LaneError::ShapeMismatch {
                    expected: (w, h),
                    actual: 0
                }
            );
        }
    }

    #[test]
    fn pixels_truncate_toward_zero() {
        assert_eq!(to_pixels(&[[2.9, 5.0], [0.5, 1.0]]), vec![[2, 5], [0, 1]]);
    }
}
