//! Core type definitions for axis-group tensors.
//!
//! A triad tensor partitions its axes into three named groups. Each group is
//! addressed as one composite radix-`n` dimension:
//!
//! - [`Group`] names a group (`free`, `scott`, `caly`)
//! - [`GroupSizes`] holds the rank (number of axes) of each group
//! - [`StructuredIndex`] is one index list per group
//! - [`Digits`] is an owned index list, as produced by the codec
//!
//! # Examples
//!
//! ```
//! use triad_core::{Group, GroupSizes};
//!
//! let sizes = GroupSizes::new(2, 1, 3);
//! assert_eq!(sizes.total(), 6);
//! assert_eq!(sizes.get(Group::Caly), 3);
//! assert_eq!(sizes.with(Group::Scott, 0), GroupSizes::new(2, 0, 3));
//! ```

use smallvec::SmallVec;
use std::fmt;

/// Owned index list (one digit per axis, most significant first).
///
/// Inline storage covers groups of up to 6 axes; longer lists spill to the heap.
pub type Digits = SmallVec<[usize; 6]>;

/// One of the three axis groups of a tensor.
///
/// Groups are ordered by significance in the flat layout: `Free` contributes
/// the most significant digits, then `Scott`, then `Caly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    Free,
    Scott,
    Caly,
}

impl Group {
    /// All groups in significance order
    pub const ALL: [Group; 3] = [Group::Free, Group::Scott, Group::Caly];

    /// Lower-case group name
    pub fn name(self) -> &'static str {
        match self {
            Group::Free => "free",
            Group::Scott => "scott",
            Group::Caly => "caly",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank of each axis group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSizes {
    pub free: usize,
    pub scott: usize,
    pub caly: usize,
}

impl GroupSizes {
    /// Create group sizes from the three ranks
    pub const fn new(free: usize, scott: usize, caly: usize) -> Self {
        Self { free, scott, caly }
    }

    /// Rank of `group`
    pub fn get(&self, group: Group) -> usize {
        match group {
            Group::Free => self.free,
            Group::Scott => self.scott,
            Group::Caly => self.caly,
        }
    }

    /// Copy with the rank of `group` replaced
    pub fn with(mut self, group: Group, size: usize) -> Self {
        match group {
            Group::Free => self.free = size,
            Group::Scott => self.scott = size,
            Group::Caly => self.caly = size,
        }
        self
    }

    /// Total number of axes
    ///
    /// Saturates instead of overflowing; such a rank never fits a buffer and is
    /// rejected when the buffer is sized.
    pub fn total(&self) -> usize {
        self.free.saturating_add(self.scott).saturating_add(self.caly)
    }

    /// Axis position of the first axis of `group` in the concatenated index
    pub fn base(&self, group: Group) -> usize {
        match group {
            Group::Free => 0,
            Group::Scott => self.free,
            Group::Caly => self.free.saturating_add(self.scott),
        }
    }
}

impl fmt::Display for GroupSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "free={}, scott={}, caly={}",
            self.free, self.scott, self.caly
        )
    }
}

/// A structured index: one index list per axis group.
///
/// A list may be shorter than its group's rank. Element access
/// ([`offset_of`](crate::codec::offset_of), `Mat::read`, ...) reads the three
/// lists as one number using the lengths actually supplied. Slicing
/// (`Mat::select`, `Mat::place`) treats the supplied digits as the most
/// significant axes of each group and leaves the omitted trailing axes free.
///
/// # Examples
///
/// ```
/// use triad_core::{Group, StructuredIndex};
///
/// let idx = StructuredIndex::new(&[1], &[], &[0, 2]);
/// assert_eq!(idx.group(Group::Caly), &[0, 2]);
///
/// let only = StructuredIndex::only(Group::Scott, &[2]);
/// assert!(only.group(Group::Free).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StructuredIndex<'a> {
    pub free: &'a [usize],
    pub scott: &'a [usize],
    pub caly: &'a [usize],
}

impl StructuredIndex<'static> {
    /// Index with every list empty (the origin of the whole tensor)
    pub const EMPTY: Self = StructuredIndex {
        free: &[],
        scott: &[],
        caly: &[],
    };
}

impl<'a> StructuredIndex<'a> {
    /// Create a structured index from three index lists
    pub fn new(free: &'a [usize], scott: &'a [usize], caly: &'a [usize]) -> Self {
        Self { free, scott, caly }
    }

    /// Index that fixes only `group` and leaves the other two groups free
    pub fn only(group: Group, digits: &'a [usize]) -> Self {
        let mut idx = StructuredIndex::default();
        match group {
            Group::Free => idx.free = digits,
            Group::Scott => idx.scott = digits,
            Group::Caly => idx.caly = digits,
        }
        idx
    }

    /// Index list of `group`
    pub fn group(&self, group: Group) -> &'a [usize] {
        match group {
            Group::Free => self.free,
            Group::Scott => self.scott,
            Group::Caly => self.caly,
        }
    }

    /// Number of digits supplied for each group
    pub fn lengths(&self) -> GroupSizes {
        GroupSizes::new(self.free.len(), self.scott.len(), self.caly.len())
    }
}
