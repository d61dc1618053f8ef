use thiserror::Error;

/// Contract violations raised by the lane post-processing stages.
///
/// Empty coordinate sets and underdetermined fits are not errors; the
/// pipeline falls back to a blank mask or the raw centerline instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneError {
    #[error("softmax axis {axis} is out of range for a {ndim}-dimensional array")]
    InvalidAxis { axis: usize, ndim: usize },

    #[error("buffer of {actual} elements does not cover the declared (width, height) {expected:?}")]
    ShapeMismatch {
        /// Declared `(width, height)`.
        expected: (usize, usize),
        /// Number of elements actually available.
        actual: usize,
    },

    #[error("channel {index} selected but the tensor only has {channels} channels")]
    ChannelOutOfRange { index: usize, channels: usize },
}
