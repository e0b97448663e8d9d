//! Conversion to and from `ndarray` arrays
//!
//! A `Mat` of rank `r` corresponds to an `ArrayD` of shape `[radix; r]` with
//! axes ordered free, then scott, then caly. Row-major order of the array is
//! exactly the flat order of the tensor, so conversion is a buffer move or
//! copy without reordering.

use super::types::Mat;
use crate::error::{TriadError, TriadResult};
use crate::types::GroupSizes;
use ndarray::{ArrayBase, ArrayD, Data, IxDyn};

impl<T> Mat<T> {
    /// Consume the tensor into an `ArrayD` of shape `[radix; rank]`
    pub fn into_array(self) -> TriadResult<ArrayD<T>> {
        let shape = vec![self.radix; self.rank()];
        ArrayD::from_shape_vec(IxDyn(&shape), self.data)
            .map_err(|e| TriadError::shape_mismatch("into_array", e.to_string()))
    }
}

impl<T> Mat<T>
where
    T: Clone,
{
    /// Copy the tensor into an `ArrayD` of shape `[radix; rank]`
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat};
    ///
    /// let mat = Mat::<i32>::iota(GroupSizes::new(1, 1, 1), 3).unwrap();
    /// let array = mat.to_array().unwrap();
    /// assert_eq!(array.shape(), &[3, 3, 3]);
    /// assert_eq!(array[[2, 0, 1]], mat.read(&[2], &[0], &[1]).unwrap());
    /// ```
    pub fn to_array(&self) -> TriadResult<ArrayD<T>> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| TriadError::allocation_failure("to_array", self.radix, self.rank()))?;
        data.extend(self.data.iter().cloned());
        let shape = vec![self.radix; self.rank()];
        ArrayD::from_shape_vec(IxDyn(&shape), data)
            .map_err(|e| TriadError::shape_mismatch("to_array", e.to_string()))
    }

    /// Build a tensor from an array whose every axis has length `radix`
    ///
    /// The first `sizes.free` axes become the free group, the next
    /// `sizes.scott` the scott group, the rest the caly group.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the array does not have `sizes.total()` axes of
    /// length `radix`.
    pub fn from_array<S>(
        array: &ArrayBase<S, IxDyn>,
        sizes: GroupSizes,
        radix: usize,
    ) -> TriadResult<Self>
    where
        S: Data<Elem = T>,
    {
        let shape = array.shape();
        if shape.len() != sizes.total() || shape.iter().any(|&dim| dim != radix) {
            return Err(TriadError::shape_mismatch(
                "from_array",
                format!(
                    "array shape {:?} does not match [{}], N={}",
                    shape, sizes, radix
                ),
            ));
        }
        let mut data = Vec::new();
        data.try_reserve_exact(array.len())
            .map_err(|_| TriadError::allocation_failure("from_array", radix, sizes.total()))?;
        data.extend(array.iter().cloned());
        Self::from_vec(data, sizes, radix)
    }
}
