//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Holds one class channel of a probability tensor. Values are expected in
//! [0, 1] but nothing here enforces it.
use crate::error::LaneError;
use ndarray::ArrayView2;

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Wrap an existing row-major buffer, checking its length against `w × h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Result<Self, LaneError> {
        if data.len() != w * h {
            return Err(LaneError::ShapeMismatch {
                expected: (w, h),
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Copy a `(rows, cols)` array view into an owned channel.
    pub fn from_array(view: ArrayView2<'_, f32>) -> Self {
        let (h, w) = view.dim();
        let data = view.iter().copied().collect();
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// True when the channel has no pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// True when the backing buffer covers every row at the declared stride.
    pub fn is_consistent(&self) -> bool {
        if self.h == 0 {
            return true;
        }
        self.stride >= self.w && self.data.len() >= self.stride * (self.h - 1) + self.w
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
