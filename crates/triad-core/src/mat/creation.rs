//! Tensor creation and initialization methods
//!
//! Every constructor allocates through a fallible reservation, so an
//! oversized request surfaces as `AllocationFailure` instead of aborting.

use super::types::Mat;
use crate::codec::{check_radix, checked_volume};
use crate::error::{TriadError, TriadResult};
use crate::types::GroupSizes;
use num_traits::{NumCast, One, Zero};

impl<T> Mat<T> {
    /// Create a tensor filled by calling `f` with each flat offset
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat};
    ///
    /// let mat = Mat::from_fn(GroupSizes::new(0, 1, 1), 2, |i| i * 10).unwrap();
    /// assert_eq!(mat.as_slice(), &[0, 10, 20, 30]);
    /// ```
    pub fn from_fn(
        sizes: GroupSizes,
        radix: usize,
        f: impl FnMut(usize) -> T,
    ) -> TriadResult<Self> {
        Self::build("from_fn", sizes, radix, f)
    }
}

impl<T> Mat<T>
where
    T: Clone,
{
    /// Create a tensor filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat};
    ///
    /// let mat = Mat::from_elem(GroupSizes::new(1, 1, 0), 3, 5.0).unwrap();
    /// assert!(mat.as_slice().iter().all(|&x| x == 5.0));
    /// ```
    pub fn from_elem(sizes: GroupSizes, radix: usize, value: T) -> TriadResult<Self> {
        Self::build("from_elem", sizes, radix, |_| value.clone())
    }

    /// Create a tensor of zeros
    pub fn zeros(sizes: GroupSizes, radix: usize) -> TriadResult<Self>
    where
        T: Zero,
    {
        Self::build("zeros", sizes, radix, |_| T::zero())
    }

    /// Create a tensor of ones
    pub fn ones(sizes: GroupSizes, radix: usize) -> TriadResult<Self>
    where
        T: One,
    {
        Self::build("ones", sizes, radix, |_| T::one())
    }
}

impl<T> Mat<T>
where
    T: NumCast,
{
    /// Create a tensor holding its own flat offsets, `0, 1, …, len - 1`
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `T` cannot represent the largest offset, plus the
    /// usual sizing errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat};
    ///
    /// let mat = Mat::<f32>::iota(GroupSizes::new(1, 1, 1), 3).unwrap();
    /// assert_eq!(mat.read(&[2], &[2], &[2]).unwrap(), 26.0);
    ///
    /// assert!(Mat::<u8>::iota(GroupSizes::new(3, 3, 3), 2).is_err());
    /// ```
    pub fn iota(sizes: GroupSizes, radix: usize) -> TriadResult<Self> {
        check_radix("iota", radix)?;
        let rank = sizes.total();
        let len = checked_volume("iota", radix, rank)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| TriadError::allocation_failure("iota", radix, rank))?;
        for offset in 0..len {
            let value = T::from(offset).ok_or_else(|| {
                TriadError::shape_mismatch(
                    "iota",
                    format!("element type cannot represent offset {}", offset),
                )
            })?;
            data.push(value);
        }
        Self::from_vec(data, sizes, radix)
    }
}
