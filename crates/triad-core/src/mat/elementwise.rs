//! Element-wise operations and group reduction

use super::types::Mat;
use crate::codec::IndexSequence;
use crate::error::{TriadError, TriadResult};
use crate::types::{Group, StructuredIndex};
use num_traits::Num;

impl<T> Mat<T> {
    /// Apply `f` to every element, keeping the shape
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat};
    ///
    /// let mat = Mat::<i32>::iota(GroupSizes::new(0, 1, 0), 3).unwrap();
    /// let squared = mat.map(|&x| (x * x) as f64).unwrap();
    /// assert_eq!(squared.as_slice(), &[0.0, 1.0, 4.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// `AllocationFailure` if the result buffer cannot be reserved.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> TriadResult<Mat<U>> {
        Mat::build("map", self.sizes, self.radix, |offset| f(&self.data[offset]))
    }

    /// Combine two tensors of the same shape element by element
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if radix or group sizes differ
    /// - `AllocationFailure` if the result buffer cannot be reserved
    pub fn zip_with<U, V>(
        &self,
        other: &Mat<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> TriadResult<Mat<V>> {
        if !self.same_shape(other) {
            return Err(TriadError::shape_mismatch(
                "zip_with",
                format!(
                    "[{}], N={} vs [{}], N={}",
                    self.sizes, self.radix, other.sizes, other.radix
                ),
            ));
        }
        Mat::build("zip_with", self.sizes, self.radix, |offset| {
            f(&self.data[offset], &other.data[offset])
        })
    }
}

impl<T> Mat<T>
where
    T: Clone + Num,
{
    /// Sum the sections along `group`, leaving that group at size 0
    ///
    /// Sections are added in ascending ordinal order. A group of size 0 has a
    /// single section, so the result equals the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{Group, GroupSizes, Mat};
    ///
    /// let mat = Mat::<i32>::iota(GroupSizes::new(1, 0, 1), 2).unwrap();
    /// // rows [0, 1] and [2, 3]
    /// let column_sums = mat.sum_group(Group::Free).unwrap();
    /// assert_eq!(column_sums.as_slice(), &[2, 4]);
    /// ```
    pub fn sum_group(&self, group: Group) -> TriadResult<Self> {
        let sizes = self.sizes.with(group, 0);
        let mut result = Self::build("sum_group", sizes, self.radix, |_| T::zero())?;
        for digits in IndexSequence::new(self.sizes.get(group), self.radix)? {
            let (_, offsets) = self.slice_offsets(&StructuredIndex::only(group, &digits))?;
            for (acc, offset) in result.data.iter_mut().zip(offsets) {
                *acc = acc.clone() + self.data[offset].clone();
            }
        }
        Ok(result)
    }
}
