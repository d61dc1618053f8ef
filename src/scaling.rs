//! Resampling helpers used to bring probability channels to the working
//! resolution before lane fitting.
//!
//! Sampling follows the pixel-centre convention: destination pixel `d` maps
//! to source coordinate `(d + 0.5) · src/dst − 0.5`, with border clamping.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Target size of a resampled channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingSize {
    pub width: usize,
    pub height: usize,
}

impl WorkingSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for WorkingSize {
    fn default() -> Self {
        Self::new(448, 208)
    }
}

/// Source index pair and blend weight for one destination coordinate.
#[derive(Clone, Copy, Debug)]
struct Tap {
    i0: usize,
    i1: usize,
    t: f32,
}

fn taps(src_len: usize, dst_len: usize) -> Vec<Tap> {
    let scale = src_len as f32 / dst_len as f32;
    (0..dst_len)
        .map(|d| {
            let f = (d as f32 + 0.5) * scale - 0.5;
            if f <= 0.0 {
                return Tap { i0: 0, i1: 0, t: 0.0 };
            }
            let i0 = f.floor() as usize;
            if i0 + 1 >= src_len {
                let last = src_len - 1;
                return Tap {
                    i0: last,
                    i1: last,
                    t: 0.0,
                };
            }
            Tap {
                i0,
                i1: i0 + 1,
                t: f - i0 as f32,
            }
        })
        .collect()
}

/// Bilinear resize of a single channel to `size`.
///
/// Returns a copy when the size already matches; an empty source yields a
/// zero image of the requested size.
pub fn resize_bilinear(src: &ImageF32, size: WorkingSize) -> ImageF32 {
    if src.w == size.width && src.h == size.height {
        return src.clone();
    }
    let mut out = ImageF32::new(size.width, size.height);
    if src.w == 0 || src.h == 0 || size.width == 0 || size.height == 0 {
        return out;
    }

    let xs = taps(src.w, size.width);
    let ys = taps(src.h, size.height);
    for (y, ty) in ys.iter().enumerate() {
        let r0 = src.row(ty.i0);
        let r1 = src.row(ty.i1);
        let dst = out.row_mut(y);
        for (px, tx) in dst.iter_mut().zip(xs.iter()) {
            let top = r0[tx.i0] + (r0[tx.i1] - r0[tx.i0]) * tx.t;
            let bottom = r1[tx.i0] + (r1[tx.i1] - r1[tx.i0]) * tx.t;
            *px = top + (bottom - top) * ty.t;
        }
    }
    out
}
