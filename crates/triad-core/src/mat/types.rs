//! Tensor type definition and basic accessors
//!
//! This module defines the core `Mat<T>` type and its length invariant.
//! Creation, indexing, sectioning and the rest live in sibling modules.

use crate::codec::{check_radix, checked_volume};
use crate::error::{TriadError, TriadResult};
use crate::types::{Group, GroupSizes};

/// Dense tensor whose axes are partitioned into three axis groups
///
/// Every axis has the same size `radix`. The flat buffer holds
/// `radix^(free + scott + caly)` elements in row-major order over the
/// concatenated index (free axes most significant, caly axes least).
///
/// # Type Parameters
///
/// * `T` - The element type. Storage only needs `Clone`; arithmetic needs
///   `num_traits::Num`.
///
/// # Invariant
///
/// `data.len() == radix^(sizes.total())` and `radix >= 1`, checked by every
/// constructor.
///
/// # Examples
///
/// ```
/// use triad_core::{GroupSizes, Mat};
///
/// let mat = Mat::<f64>::zeros(GroupSizes::new(1, 1, 1), 3).unwrap();
/// assert_eq!(mat.len(), 27);
/// assert_eq!(mat.rank(), 3);
/// assert_eq!(mat.radix(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "MatRepr<T>", into = "MatRepr<T>")
)]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Clone + serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct Mat<T> {
    pub(crate) data: Vec<T>,
    pub(crate) sizes: GroupSizes,
    pub(crate) radix: usize,
}

/// Unchecked wire form; deserialization goes back through `Mat::from_vec`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatRepr<T> {
    data: Vec<T>,
    sizes: GroupSizes,
    radix: usize,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MatRepr<T>> for Mat<T> {
    type Error = TriadError;

    fn try_from(repr: MatRepr<T>) -> TriadResult<Self> {
        Mat::from_vec(repr.data, repr.sizes, repr.radix)
    }
}

#[cfg(feature = "serde")]
impl<T> From<Mat<T>> for MatRepr<T> {
    fn from(mat: Mat<T>) -> Self {
        MatRepr {
            data: mat.data,
            sizes: mat.sizes,
            radix: mat.radix,
        }
    }
}

impl<T> Mat<T> {
    /// Create a tensor that takes ownership of a pre-built buffer
    ///
    /// # Arguments
    ///
    /// * `data` - Flat buffer in row-major order
    /// * `sizes` - Rank of each axis group
    /// * `radix` - Size of every axis
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `radix` is zero or `data.len() != radix^sizes.total()`
    /// - `AllocationFailure` if `radix^sizes.total()` does not fit in `usize`
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat};
    ///
    /// let mat = Mat::from_vec(vec![1, 2, 3, 4], GroupSizes::new(1, 0, 1), 2).unwrap();
    /// assert_eq!(mat.read(&[1], &[], &[0]).unwrap(), 3);
    ///
    /// assert!(Mat::from_vec(vec![1, 2, 3], GroupSizes::new(1, 0, 1), 2).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>, sizes: GroupSizes, radix: usize) -> TriadResult<Self> {
        check_radix("from_vec", radix)?;
        let expected = checked_volume("from_vec", radix, sizes.total())?;
        if data.len() != expected {
            return Err(TriadError::shape_mismatch(
                "from_vec",
                format!(
                    "[{}], N={} requires {} elements, but got {}",
                    sizes,
                    radix,
                    expected,
                    data.len()
                ),
            ));
        }
        Ok(Self { data, sizes, radix })
    }

    /// Allocate and fill a buffer for `sizes`/`radix`, one call of `fill` per flat offset.
    pub(crate) fn build(
        operation: &'static str,
        sizes: GroupSizes,
        radix: usize,
        fill: impl FnMut(usize) -> T,
    ) -> TriadResult<Self> {
        check_radix(operation, radix)?;
        let rank = sizes.total();
        let len = checked_volume(operation, radix, rank)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| TriadError::allocation_failure(operation, radix, rank))?;
        data.extend((0..len).map(fill));
        Ok(Self { data, sizes, radix })
    }

    /// Rank of each axis group
    pub fn sizes(&self) -> GroupSizes {
        self.sizes
    }

    /// Rank of one axis group
    pub fn group_size(&self, group: Group) -> usize {
        self.sizes.get(group)
    }

    /// Size of every axis
    pub fn radix(&self) -> usize {
        self.radix
    }

    /// Total number of axes
    pub fn rank(&self) -> usize {
        self.sizes.total()
    }

    /// Number of elements, `radix^rank`
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a valid tensor (a rank-0 tensor holds one element)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `other` has the same radix and group sizes
    pub fn same_shape<U>(&self, other: &Mat<U>) -> bool {
        self.radix == other.radix && self.sizes == other.sizes
    }

    /// The flat buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The flat buffer, mutably (for bulk fill)
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and return its buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_enforces_length() {
        let err = Mat::from_vec(vec![0u8; 26], GroupSizes::new(1, 1, 1), 3).unwrap_err();
        assert!(err.is_shape_mismatch());
        assert_eq!(err.operation(), "from_vec");

        let mat = Mat::from_vec(vec![0u8; 27], GroupSizes::new(1, 1, 1), 3).unwrap();
        assert_eq!(mat.len(), 27);
    }

    #[test]
    fn test_from_vec_rejects_zero_radix() {
        let err = Mat::from_vec(vec![1.0_f32], GroupSizes::default(), 0).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_rank_zero_holds_one_element() {
        let mat = Mat::from_vec(vec![7], GroupSizes::default(), 5).unwrap();
        assert_eq!(mat.rank(), 0);
        assert_eq!(mat.len(), 1);
        assert!(!mat.is_empty());
    }

    #[test]
    fn test_build_overflow_is_allocation_failure() {
        let err = Mat::build("zeros", GroupSizes::new(40, 0, 0), 10, |_| 0u8).unwrap_err();
        assert_eq!(err, TriadError::allocation_failure("zeros", 10, 40));
    }

    #[test]
    fn test_accessors() {
        let mat = Mat::from_vec((0..8).collect(), GroupSizes::new(2, 0, 1), 2).unwrap();
        assert_eq!(mat.sizes(), GroupSizes::new(2, 0, 1));
        assert_eq!(mat.group_size(Group::Free), 2);
        assert_eq!(mat.group_size(Group::Scott), 0);
        assert_eq!(mat.as_slice()[5], 5);
        assert!(mat.same_shape(&mat.clone()));
        assert_eq!(mat.into_vec(), (0..8).collect::<Vec<_>>());
    }
}
