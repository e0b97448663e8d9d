//! Tolerance comparison helpers for floating-point results
//!
//! Block-wise and parallel contraction sum in the same order as the direct
//! kernel, but callers combining results from other sources need a tolerance.

use num_traits::Float;
use triad_core::{Mat, TriadError, TriadResult};

/// Largest absolute element-wise difference between two tensors
///
/// # Errors
///
/// `ShapeMismatch` if radix or group sizes differ.
///
/// # Examples
///
/// ```
/// use triad_core::{GroupSizes, Mat};
/// use triad_kernels::max_abs_diff;
///
/// let a = Mat::from_vec(vec![1.0, 2.0], GroupSizes::new(1, 0, 0), 2).unwrap();
/// let b = Mat::from_vec(vec![1.5, 1.0], GroupSizes::new(1, 0, 0), 2).unwrap();
/// assert_eq!(max_abs_diff(&a, &b).unwrap(), 1.0);
/// ```
pub fn max_abs_diff<T>(a: &Mat<T>, b: &Mat<T>) -> TriadResult<T>
where
    T: Float,
{
    if !a.same_shape(b) {
        return Err(TriadError::shape_mismatch(
            "max_abs_diff",
            format!(
                "[{}], N={} vs [{}], N={}",
                a.sizes(),
                a.radix(),
                b.sizes(),
                b.radix()
            ),
        ));
    }
    Ok(a.as_slice()
        .iter()
        .zip(b.as_slice())
        .fold(T::zero(), |max, (&x, &y)| max.max((x - y).abs())))
}

/// Whether two tensors have the same shape and every element within `tol`
///
/// A NaN element never compares equal.
pub fn approx_eq<T>(a: &Mat<T>, b: &Mat<T>, tol: T) -> bool
where
    T: Float,
{
    a.same_shape(b)
        && a.as_slice()
            .iter()
            .zip(b.as_slice())
            .all(|(&x, &y)| (x - y).abs() <= tol)
}
