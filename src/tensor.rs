//! Per-frame probability tensor and channel selection.
//!
//! A tensor has shape `(channels, height, width)`. It is built from raw
//! logits with a softmax over the channel axis and then sliced into owned
//! [`ImageF32`] channels for the per-lane stages.
use crate::error::LaneError;
use crate::image::ImageF32;
use crate::softmax::softmax;
use ndarray::{Array3, ArrayView3, Axis};

#[derive(Clone, Debug)]
pub struct ProbabilityTensor {
    data: Array3<f32>,
}

impl ProbabilityTensor {
    /// Normalize raw logits over the channel axis.
    pub fn from_logits(logits: ArrayView3<'_, f32>) -> Result<Self, LaneError> {
        let data = softmax(&logits, Some(0))?;
        Ok(Self { data })
    }

    /// Wrap values that are already probabilities.
    pub fn from_probabilities(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// `(channels, height, width)`.
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn channels(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn view(&self) -> ArrayView3<'_, f32> {
        self.data.view()
    }

    /// Copy one class channel out of the tensor.
    pub fn channel(&self, index: usize) -> Result<ImageF32, LaneError> {
        let channels = self.channels();
        if index >= channels {
            return Err(LaneError::ChannelOutOfRange { index, channels });
        }
        Ok(ImageF32::from_array(self.data.index_axis(Axis(0), index)))
    }

    /// Copy the selected channels, preserving the selection order.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<ImageF32>, LaneError> {
        indices.iter().map(|&i| self.channel(i)).collect()
    }
}
