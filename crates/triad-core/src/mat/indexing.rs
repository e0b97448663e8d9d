//! Structured and flat element access
//!
//! Structured access takes one index list per axis group and resolves it
//! through [`offset_of`](crate::codec::offset_of). Flat access addresses the
//! buffer directly. Both are bounds-checked and never wrap around.

use super::types::Mat;
use crate::codec::offset_of;
use crate::error::{TriadError, TriadResult};
use crate::types::StructuredIndex;
use std::ops::{Index, IndexMut};

impl<T> Mat<T> {
    /// Flat offset of a structured index in this tensor
    ///
    /// Partial lists are read with the lengths actually supplied, so
    /// `offset(([2], [], []))` on a radix-3 tensor is 2 whatever the ranks.
    pub fn offset(&self, index: &StructuredIndex<'_>) -> TriadResult<usize> {
        offset_of(index, &self.sizes, self.radix)
    }

    /// Reference to the element at a structured index
    ///
    /// # Errors
    ///
    /// `IndexOutOfDomain` if a digit is `>= radix` or a list is longer than
    /// its group.
    ///
    /// Short lists address the element whose offset is the ordinal of the
    /// concatenated lists; see [`offset`](Self::offset).
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat};
    ///
    /// let mat = Mat::<i32>::iota(GroupSizes::new(1, 1, 1), 3).unwrap();
    /// assert_eq!(mat.get(&[1], &[2], &[0]).unwrap(), &15);
    /// assert!(mat.get(&[3], &[0], &[0]).is_err());
    /// ```
    pub fn get(&self, free: &[usize], scott: &[usize], caly: &[usize]) -> TriadResult<&T> {
        self.get_at(&StructuredIndex::new(free, scott, caly))
    }

    /// Mutable reference to the element at a structured index
    pub fn get_mut(
        &mut self,
        free: &[usize],
        scott: &[usize],
        caly: &[usize],
    ) -> TriadResult<&mut T> {
        self.get_at_mut(&StructuredIndex::new(free, scott, caly))
    }

    /// Reference to the element at a structured index
    pub fn get_at(&self, index: &StructuredIndex<'_>) -> TriadResult<&T> {
        let offset = self.offset(index)?;
        self.get_flat(offset)
    }

    /// Mutable reference to the element at a structured index
    pub fn get_at_mut(&mut self, index: &StructuredIndex<'_>) -> TriadResult<&mut T> {
        let offset = self.offset(index)?;
        self.get_flat_mut(offset)
    }

    /// Write `value` at a structured index
    ///
    /// Nothing is written if the index is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat};
    ///
    /// let mut mat = Mat::<f64>::zeros(GroupSizes::new(1, 0, 1), 2).unwrap();
    /// mat.write(&[1], &[], &[1], 4.5).unwrap();
    /// assert_eq!(mat.as_slice(), &[0.0, 0.0, 0.0, 4.5]);
    /// ```
    pub fn write(
        &mut self,
        free: &[usize],
        scott: &[usize],
        caly: &[usize],
        value: T,
    ) -> TriadResult<()> {
        *self.get_mut(free, scott, caly)? = value;
        Ok(())
    }

    /// Reference to the element at a flat offset
    ///
    /// # Errors
    ///
    /// `IndexOutOfDomain` if `offset >= len()`.
    pub fn get_flat(&self, offset: usize) -> TriadResult<&T> {
        let len = self.data.len();
        self.data
            .get(offset)
            .ok_or_else(|| TriadError::index_out_of_domain("get_flat", offset, len))
    }

    /// Mutable reference to the element at a flat offset
    pub fn get_flat_mut(&mut self, offset: usize) -> TriadResult<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(offset)
            .ok_or_else(|| TriadError::index_out_of_domain("get_flat_mut", offset, len))
    }

    /// Write `value` at a flat offset
    pub fn write_flat(&mut self, offset: usize, value: T) -> TriadResult<()> {
        *self.get_flat_mut(offset)? = value;
        Ok(())
    }
}

impl<T> Mat<T>
where
    T: Clone,
{
    /// Copy of the element at a structured index
    pub fn read(&self, free: &[usize], scott: &[usize], caly: &[usize]) -> TriadResult<T> {
        self.get(free, scott, caly).cloned()
    }

    /// Copy of the element at a flat offset
    pub fn read_flat(&self, offset: usize) -> TriadResult<T> {
        self.get_flat(offset).cloned()
    }
}

/// Flat indexing; panics on an out-of-range offset like slice indexing.
impl<T> Index<usize> for Mat<T> {
    type Output = T;

    fn index(&self, offset: usize) -> &T {
        &self.data[offset]
    }
}

impl<T> IndexMut<usize> for Mat<T> {
    fn index_mut(&mut self, offset: usize) -> &mut T {
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use crate::types::GroupSizes;

    use super::*;

    fn iota_111() -> Mat<i64> {
        Mat::iota(GroupSizes::new(1, 1, 1), 3).unwrap()
    }

    #[test]
    fn test_get_matches_offset_formula() {
        let mat = iota_111();
        for f in 0..3 {
            for s in 0..3 {
                for c in 0..3 {
                    let expected = (f * 9 + s * 3 + c) as i64;
                    assert_eq!(mat.read(&[f], &[s], &[c]).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn test_partial_index_reads_supplied_lengths() {
        let mat = iota_111();
        assert_eq!(mat.read(&[2], &[], &[]).unwrap(), 2);
        assert_eq!(mat.read(&[], &[1], &[]).unwrap(), 1);
        assert_eq!(mat.read(&[], &[], &[]).unwrap(), 0);
        assert_eq!(mat.read(&[1], &[], &[2]).unwrap(), 5);
        assert_eq!(mat.offset(&StructuredIndex::new(&[1], &[], &[2])).unwrap(), 5);
    }

    #[test]
    fn test_partial_write_lands_at_supplied_offset() {
        let mut mat = Mat::<i64>::zeros(GroupSizes::new(2, 1, 1), 2).unwrap();
        // [1 | 1 | ] is ordinal 3
        mat.write(&[1], &[1], &[], 7).unwrap();
        assert_eq!(mat[3], 7);
        assert_eq!(mat.as_slice().iter().filter(|&&x| x != 0).count(), 1);
        *mat.get_mut(&[], &[], &[1]).unwrap() += 1;
        assert_eq!(mat[1], 1);
    }

    #[test]
    fn test_out_of_domain_digit_is_rejected_without_write() {
        let mut mat = iota_111();
        let before = mat.clone();
        let err = mat.write(&[0], &[3], &[0], -1).unwrap_err();
        assert_eq!(err, TriadError::index_out_of_domain("offset_of", 3, 3));
        assert_eq!(mat, before);
    }

    #[test]
    fn test_too_long_list_is_rejected() {
        let mat = Mat::<f64>::zeros(GroupSizes::new(1, 0, 1), 2).unwrap();
        assert!(mat.get(&[0], &[0], &[0]).unwrap_err().is_index_out_of_domain());
    }

    #[test]
    fn test_flat_access() {
        let mut mat = iota_111();
        assert_eq!(mat.read_flat(26).unwrap(), 26);
        mat.write_flat(26, 100).unwrap();
        assert_eq!(mat[26], 100);
        mat[0] = -5;
        assert_eq!(mat.read(&[0], &[0], &[0]).unwrap(), -5);

        let err = mat.read_flat(27).unwrap_err();
        assert_eq!(err, TriadError::index_out_of_domain("get_flat", 27, 27));
        assert!(mat.write_flat(27, 0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_operator_panics_out_of_range() {
        let mat = iota_111();
        let _ = mat[27];
    }
}
