//! Numerically stable softmax over one axis of an n-dimensional array.
//!
//! Each 1-D lane along the chosen axis is shifted by its maximum before
//! exponentiation and then divided by its sum, so the output along that axis
//! is non-negative and sums to one.
use crate::error::LaneError;
use ndarray::{Array, ArrayBase, Axis, Data, Dimension};

/// Softmax along `axis`. With `None`, the first axis longer than one is used.
pub fn softmax<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Array<f32, D>, LaneError>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    softmax_scaled(x, 1.0, axis)
}

/// Softmax of `theta · x` along `axis`.
pub fn softmax_scaled<S, D>(
    x: &ArrayBase<S, D>,
    theta: f32,
    axis: Option<usize>,
) -> Result<Array<f32, D>, LaneError>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    let ndim = x.ndim();
    let axis = match axis {
        Some(a) => a,
        None => default_axis(x.shape()).ok_or(LaneError::InvalidAxis { axis: 0, ndim })?,
    };
    if axis >= ndim {
        return Err(LaneError::InvalidAxis { axis, ndim });
    }

    let mut out = x.mapv(|v| v * theta);
    for mut lane in out.lanes_mut(Axis(axis)) {
        let max = lane.fold(f32::NEG_INFINITY, |m, &v| m.max(v));
        lane.mapv_inplace(|v| (v - max).exp());
        let sum = lane.sum();
        lane.mapv_inplace(|v| v / sum);
    }
    Ok(out)
}

/// First axis whose length exceeds one, or the last axis when all are singleton.
fn default_axis(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .position(|&len| len > 1)
        .or_else(|| shape.len().checked_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Array2, Array3};

    fn ramp(shape: (usize, usize, usize)) -> Array3<f32> {
        Array3::from_shape_fn(shape, |(c, r, k)| {
            ((c * 7 + r * 3 + k) % 11) as f32 * 0.9 - 4.0
        })
    }

    #[test]
    fn sums_to_one_along_channel_axis() {
        let logits = ramp((5, 4, 6));
        let p = softmax(&logits, Some(0)).unwrap();
        assert_eq!(p.shape(), logits.shape());
        for r in 0..4 {
            for k in 0..6 {
                let s: f32 = (0..5).map(|c| p[[c, r, k]]).sum();
                assert!((s - 1.0).abs() < 1e-6, "sum {s} at ({r}, {k})");
                assert!((0..5).all(|c| p[[c, r, k]] >= 0.0));
            }
        }
    }

    #[test]
    fn shift_invariant() {
        let logits = ramp((3, 5, 5));
        let shifted = logits.mapv(|v| v + 123.5);
        let a = softmax(&logits, Some(0)).unwrap();
        let b = softmax(&shifted, Some(0)).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-5, "{x} vs {y}");
        }
    }

    #[test]
    fn default_axis_skips_singletons() {
        let x = Array2::from_shape_vec((1, 3), vec![1.0f32, 2.0, 3.0]).unwrap();
        let p = softmax(&x, None).unwrap();
        let s: f32 = p.iter().sum();
        assert!((s - 1.0).abs() < 1e-6);
        assert!(p[[0, 2]] > p[[0, 1]] && p[[0, 1]] > p[[0, 0]]);
    }

    #[test]
    fn rejects_out_of_range_axis() {
        let x = ramp((2, 2, 2));
        assert_eq!(
            softmax(&x, Some(3)).unwrap_err(),
            LaneError::InvalidAxis { axis: 3, ndim: 3 }
        );
    }

    #[test]
    fn theta_sharpens_distribution() {
        let x = arr1(&[1.0f32, 2.0]);
        let soft = softmax(&x, None).unwrap();
        let sharp = softmax_scaled(&x, 10.0, None).unwrap();
        assert!(sharp[1] > soft[1]);
        assert!((sharp.sum() - 1.0).abs() < 1e-6);
    }
}
