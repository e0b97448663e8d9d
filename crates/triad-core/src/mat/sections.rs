//! Slicing, dissection and assembly along axis groups
//!
//! A partial [`StructuredIndex`] selects a slice: the supplied digits fix the
//! most significant axes of each group, every omitted axis stays free. The
//! slice is itself a tensor whose group sizes are the omitted counts.
//!
//! Dissection along a group selects every full-length index of that group in
//! odometer order, producing `radix^rank` sections with that group at size 0.
//! Assembly places the sections back at their ordinals.

use super::types::Mat;
use crate::codec::{check_radix, checked_volume, digits_of, slice_origin, IndexSequence};
use crate::error::{TriadError, TriadResult};
use crate::types::{Digits, Group, GroupSizes, StructuredIndex};
use std::iter::FusedIterator;

/// Flat offsets of every element of a slice, in row-major order of the slice.
///
/// The offset is updated incrementally: stepping an axis adds its stride,
/// a carry rewinds the axis by `(radix - 1) * stride`.
#[derive(Debug, Clone)]
pub(crate) struct SliceOffsets {
    strides: Digits,
    digits: Digits,
    radix: usize,
    offset: usize,
    remaining: usize,
}

impl SliceOffsets {
    fn advance(&mut self) {
        for (digit, &stride) in self.digits.iter_mut().zip(self.strides.iter()).rev() {
            if *digit + 1 < self.radix {
                *digit += 1;
                self.offset += stride;
                return;
            }
            self.offset -= *digit * stride;
            *digit = 0;
        }
    }
}

impl Iterator for SliceOffsets {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.offset;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceOffsets {}

impl FusedIterator for SliceOffsets {}

/// Smallest `rank` with `radix^rank == count`
fn exact_log(count: usize, radix: usize) -> TriadResult<usize> {
    let not_a_power = || {
        TriadError::shape_mismatch(
            "assemble",
            format!("{} sections is not a power of radix {}", count, radix),
        )
    };
    if radix == 1 {
        return Err(TriadError::shape_mismatch(
            "assemble",
            "radix 1 does not determine the group rank; use assemble_rank",
        ));
    }
    let mut rank = 0;
    let mut power = 1usize;
    while power < count {
        power = power.checked_mul(radix).ok_or_else(not_a_power)?;
        rank += 1;
    }
    if power == count {
        Ok(rank)
    } else {
        Err(not_a_power())
    }
}

impl<T> Mat<T> {
    /// Remaining sizes and element offsets of the slice `index` selects.
    pub(crate) fn slice_offsets(
        &self,
        index: &StructuredIndex<'_>,
    ) -> TriadResult<(GroupSizes, SliceOffsets)> {
        let origin = slice_origin(index, &self.sizes, self.radix)?;
        let rank = self.rank();
        let mut remaining = GroupSizes::default();
        let mut strides = Digits::new();
        for group in Group::ALL {
            let fixed = index.group(group).len();
            let free_axes = self.sizes.get(group) - fixed;
            remaining = remaining.with(group, free_axes);
            let first = self.sizes.base(group) + fixed;
            for axis in first..first + free_axes {
                strides.push(checked_volume("select", self.radix, rank - axis - 1)?);
            }
        }
        let count = checked_volume("select", self.radix, remaining.total())?;
        let offsets = SliceOffsets {
            digits: smallvec::smallvec![0; strides.len()],
            strides,
            radix: self.radix,
            offset: origin,
            remaining: count,
        };
        Ok((remaining, offsets))
    }
}

impl<T> Mat<T>
where
    T: Clone,
{
    /// Copy out the slice selected by a partial structured index
    ///
    /// Each group of the result has `rank - supplied digits` axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{GroupSizes, Mat, StructuredIndex};
    ///
    /// let mat = Mat::<i32>::iota(GroupSizes::new(1, 1, 1), 3).unwrap();
    /// let row = mat.select(&StructuredIndex::new(&[2], &[1], &[])).unwrap();
    /// assert_eq!(row.sizes(), GroupSizes::new(0, 0, 1));
    /// assert_eq!(row.as_slice(), &[21, 22, 23]);
    /// ```
    pub fn select(&self, index: &StructuredIndex<'_>) -> TriadResult<Self> {
        let (sizes, offsets) = self.slice_offsets(index)?;
        let mut data = Vec::new();
        data.try_reserve_exact(offsets.len())
            .map_err(|_| TriadError::allocation_failure("select", self.radix, sizes.total()))?;
        data.extend(offsets.map(|offset| self.data[offset].clone()));
        Ok(Self {
            data,
            sizes,
            radix: self.radix,
        })
    }

    /// Write `block` into the slice selected by a partial structured index
    ///
    /// Inverse of [`select`](Self::select). Everything is validated before the
    /// first write.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfDomain` for an invalid index
    /// - `ShapeMismatch` if `block` does not have this tensor's radix and the
    ///   slice's group sizes
    pub fn place(&mut self, index: &StructuredIndex<'_>, block: &Mat<T>) -> TriadResult<()> {
        let (sizes, offsets) = self.slice_offsets(index)?;
        if block.radix != self.radix || block.sizes != sizes {
            return Err(TriadError::shape_mismatch(
                "place",
                format!(
                    "slice is [{}], N={} but block is [{}], N={}",
                    sizes, self.radix, block.sizes, block.radix
                ),
            ));
        }
        for (offset, value) in offsets.zip(block.data.iter()) {
            self.data[offset] = value.clone();
        }
        Ok(())
    }

    /// The section at `ordinal` along `group`
    ///
    /// Equal to `self.dissect(group)?[ordinal]` without building the others.
    pub fn section(&self, group: Group, ordinal: usize) -> TriadResult<Self> {
        let digits = digits_of(ordinal, self.sizes.get(group), self.radix)?;
        self.select(&StructuredIndex::only(group, &digits))
    }

    /// Split the tensor into `radix^rank(group)` sections along `group`
    ///
    /// Sections come in ordinal order of the group index and each owns a
    /// fresh buffer with `group` at size 0. Every parent element is copied
    /// exactly once across all sections.
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{Group, GroupSizes, Mat};
    ///
    /// let mat = Mat::<u32>::iota(GroupSizes::new(1, 1, 1), 3).unwrap();
    /// let sections = mat.dissect(Group::Scott).unwrap();
    /// assert_eq!(sections.len(), 3);
    /// assert_eq!(sections[1].sizes(), GroupSizes::new(1, 0, 1));
    /// assert_eq!(&sections[1].as_slice()[..3], &[3, 4, 5]);
    /// ```
    pub fn dissect(&self, group: Group) -> TriadResult<Vec<Self>> {
        let rank = self.sizes.get(group);
        let sequence = IndexSequence::new(rank, self.radix)?;
        log::debug!(
            "dissect: [{}], N={} along {} into {} sections",
            self.sizes,
            self.radix,
            group,
            sequence.len()
        );
        let mut sections = Vec::new();
        sections
            .try_reserve_exact(sequence.len())
            .map_err(|_| TriadError::allocation_failure("dissect", self.radix, rank))?;
        for digits in sequence {
            log::trace!("dissect: {} section {:?}", group, &digits[..]);
            sections.push(self.select(&StructuredIndex::only(group, &digits))?);
        }
        Ok(sections)
    }

    /// Rebuild a tensor from its sections along `group`
    ///
    /// The rank of `group` is recovered as the exact `log_radix` of the number
    /// of sections. Radix 1 always yields one section whatever the rank, so it
    /// is rejected; use [`assemble_rank`](Self::assemble_rank) there.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the list is empty, the radix is 1, its length is not
    /// a power of the radix, or the sections disagree on radix or group sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use triad_core::{Group, GroupSizes, Mat};
    ///
    /// let mat = Mat::<f64>::iota(GroupSizes::new(2, 0, 1), 2).unwrap();
    /// let sections = mat.dissect(Group::Free).unwrap();
    /// assert_eq!(Mat::assemble(&sections, Group::Free).unwrap(), mat);
    /// ```
    pub fn assemble(sections: &[Self], group: Group) -> TriadResult<Self> {
        let first = sections.first().ok_or_else(|| {
            TriadError::shape_mismatch("assemble", "cannot assemble an empty section list")
        })?;
        check_radix("assemble", first.radix)?;
        let rank = exact_log(sections.len(), first.radix)?;
        Self::assemble_rank(sections, group, rank)
    }

    /// Rebuild a tensor whose `group` has `rank` axes from its sections
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the list is empty, does not hold exactly
    /// `radix^rank` sections, a section has a non-zero `group`, or the
    /// sections disagree on radix or group sizes.
    pub fn assemble_rank(sections: &[Self], group: Group, rank: usize) -> TriadResult<Self> {
        let first = sections.first().ok_or_else(|| {
            TriadError::shape_mismatch("assemble", "cannot assemble an empty section list")
        })?;
        if first.sizes.get(group) != 0 {
            return Err(TriadError::shape_mismatch(
                "assemble",
                format!("sections must have {} at size 0, got [{}]", group, first.sizes),
            ));
        }
        if let Some((position, odd)) = sections
            .iter()
            .enumerate()
            .find(|(_, section)| !section.same_shape(first))
        {
            return Err(TriadError::shape_mismatch(
                "assemble",
                format!(
                    "section {} is [{}], N={} but section 0 is [{}], N={}",
                    position, odd.sizes, odd.radix, first.sizes, first.radix
                ),
            ));
        }
        let expected = checked_volume("assemble", first.radix, rank)?;
        if sections.len() != expected {
            return Err(TriadError::shape_mismatch(
                "assemble",
                format!(
                    "{} of rank {} needs {} sections, got {}",
                    group,
                    rank,
                    expected,
                    sections.len()
                ),
            ));
        }

        let sizes = first.sizes.with(group, rank);
        log::debug!(
            "assemble: {} sections along {} into [{}], N={}",
            sections.len(),
            group,
            sizes,
            first.radix
        );
        let seed = first.data[0].clone();
        let mut result = Self::build("assemble", sizes, first.radix, |_| seed.clone())?;
        for (digits, section) in IndexSequence::new(rank, first.radix)?.zip(sections) {
            result.place(&StructuredIndex::only(group, &digits), section)?;
        }
        Ok(result)
    }
}
