use crate::lane::fit::LineModel;
use image::GrayImage;

/// Per-channel output of the lane pipeline.
#[derive(Clone, Debug)]
pub struct LaneLine {
    /// White polyline on black, same size as the source channel.
    pub mask: GrayImage,
    /// Points the mask was drawn through, in drawing order.
    pub polyline: Vec<[i32; 2]>,
    /// Fitted line, when the centerline was long enough to fit.
    pub model: Option<LineModel>,
    /// The fitted line sampled once per row over the activation's row range.
    pub fitted: Vec<[i32; 2]>,
}

impl LaneLine {
    /// True when nothing was drawn.
    pub fn is_blank(&self) -> bool {
        self.polyline.is_empty()
    }
}
