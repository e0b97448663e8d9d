//! Mixed-radix codec: structured indices to flat offsets and back.
//!
//! An index list `[d₀, d₁, …, d_{k-1}]` over radix `n` is read as a big-endian
//! mixed-radix number, `Σ dᵢ · n^(k-i-1)`. A structured index is the logical
//! concatenation of its three lists (free digits most significant, then scott,
//! then caly), so the flat offset of an element is the ordinal of that
//! concatenated list. This is exactly row-major order over `radix^rank`
//! elements.
//!
//! The inverse direction is an odometer: [`Odometer`] holds an explicit
//! counter state, and [`IndexSequence`] drives it to enumerate all index lists
//! of a given length in lexicographic order.
//!
//! # Examples
//!
//! ```
//! use triad_core::codec::{digits_of, offset_of, ordinal_of, IndexSequence};
//! use triad_core::{GroupSizes, StructuredIndex};
//!
//! assert_eq!(ordinal_of(&[1, 2], 3).unwrap(), 5);
//! assert_eq!(&digits_of(5, 2, 3).unwrap()[..], &[1, 2]);
//!
//! let ranks = GroupSizes::new(1, 1, 1);
//! let idx = StructuredIndex::new(&[2], &[0], &[1]);
//! assert_eq!(offset_of(&idx, &ranks, 3).unwrap(), 2 * 9 + 1);
//!
//! let all: Vec<_> = IndexSequence::new(2, 2).unwrap().map(|d| d.to_vec()).collect();
//! assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
//! ```

use crate::error::{TriadError, TriadResult};
use crate::types::{Digits, Group, GroupSizes, StructuredIndex};
use smallvec::smallvec;
use std::iter::FusedIterator;

/// Number of index lists of `rank` digits over `radix`, i.e. `radix^rank`
///
/// # Errors
///
/// `AllocationFailure` if the count does not fit in `usize`.
pub fn volume(radix: usize, rank: usize) -> TriadResult<usize> {
    checked_volume("volume", radix, rank)
}

pub(crate) fn checked_volume(
    operation: &'static str,
    radix: usize,
    rank: usize,
) -> TriadResult<usize> {
    u32::try_from(rank)
        .ok()
        .and_then(|exp| radix.checked_pow(exp))
        .ok_or_else(|| TriadError::allocation_failure(operation, radix, rank))
}

pub(crate) fn check_radix(operation: &'static str, radix: usize) -> TriadResult<()> {
    if radix == 0 {
        return Err(TriadError::shape_mismatch(
            operation,
            "radix must be at least 1",
        ));
    }
    Ok(())
}

fn check_digit(operation: &'static str, digit: usize, radix: usize) -> TriadResult<()> {
    if digit >= radix {
        return Err(TriadError::index_out_of_domain(operation, digit, radix));
    }
    Ok(())
}

/// Interpret `digits` as a big-endian radix-`radix` number
///
/// # Errors
///
/// - `IndexOutOfDomain` if any digit is `>= radix`
/// - `AllocationFailure` if the value does not fit in `usize`
pub fn ordinal_of(digits: &[usize], radix: usize) -> TriadResult<usize> {
    let mut ordinal = 0usize;
    for &digit in digits {
        check_digit("ordinal_of", digit, radix)?;
        ordinal = ordinal
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| TriadError::allocation_failure("ordinal_of", radix, digits.len()))?;
    }
    Ok(ordinal)
}

/// Flat offset of a structured index in a tensor with group ranks `ranks`
///
/// The three lists are concatenated (free, scott, caly) and read as one
/// big-endian number, using the lengths actually supplied. An empty list
/// contributes no digits, so `([2], [], [])` over radix 3 is offset 2. For
/// full-length lists the mapping is a bijection onto `[0, radix^ranks.total())`.
///
/// # Errors
///
/// - `IndexOutOfDomain` if a list is longer than its group's rank (bound is
///   `rank + 1`, the number of valid lengths) or a digit is `>= radix`
/// - `AllocationFailure` if the offset does not fit in `usize`
pub fn offset_of(
    index: &StructuredIndex<'_>,
    ranks: &GroupSizes,
    radix: usize,
) -> TriadResult<usize> {
    let mut offset = 0usize;
    for group in Group::ALL {
        let digits = checked_list("offset_of", index, ranks, group)?;
        offset = push_digits("offset_of", offset, digits, ranks, radix)?;
    }
    Ok(offset)
}

/// Offset of the first element of the slice a partial index selects
///
/// Omitted trailing digits of every group count as zero, so each group keeps
/// its full positional weight. Agrees with [`offset_of`] on full-length lists.
pub(crate) fn slice_origin(
    index: &StructuredIndex<'_>,
    ranks: &GroupSizes,
    radix: usize,
) -> TriadResult<usize> {
    let mut offset = 0usize;
    for group in Group::ALL {
        let digits = checked_list("slice_origin", index, ranks, group)?;
        offset = push_digits("slice_origin", offset, digits, ranks, radix)?;
        let weight = checked_volume("slice_origin", radix, ranks.get(group) - digits.len())?;
        offset = offset.checked_mul(weight).ok_or_else(|| {
            TriadError::allocation_failure("slice_origin", radix, ranks.total())
        })?;
    }
    Ok(offset)
}

fn checked_list<'a>(
    operation: &'static str,
    index: &StructuredIndex<'a>,
    ranks: &GroupSizes,
    group: Group,
) -> TriadResult<&'a [usize]> {
    let digits = index.group(group);
    let rank = ranks.get(group);
    if digits.len() > rank {
        return Err(TriadError::index_out_of_domain(
            operation,
            digits.len(),
            rank + 1,
        ));
    }
    Ok(digits)
}

fn push_digits(
    operation: &'static str,
    mut offset: usize,
    digits: &[usize],
    ranks: &GroupSizes,
    radix: usize,
) -> TriadResult<usize> {
    for &digit in digits {
        check_digit(operation, digit, radix)?;
        offset = offset
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| TriadError::allocation_failure(operation, radix, ranks.total()))?;
    }
    Ok(offset)
}

/// Index list of `length` digits whose ordinal is `ordinal`
///
/// Inverse of [`ordinal_of`] for a fixed length.
///
/// # Errors
///
/// - `IndexOutOfDomain` if `ordinal >= radix^length`
/// - `AllocationFailure` if `radix^length` does not fit in `usize`
pub fn digits_of(ordinal: usize, length: usize, radix: usize) -> TriadResult<Digits> {
    let bound = checked_volume("digits_of", radix, length)?;
    if ordinal >= bound {
        return Err(TriadError::index_out_of_domain("digits_of", ordinal, bound));
    }
    let mut digits: Digits = smallvec![0; length];
    let mut rest = ordinal;
    for slot in digits.iter_mut().rev() {
        *slot = rest % radix;
        rest /= radix;
    }
    Ok(digits)
}

/// Mixed-radix counter state.
///
/// `increment` is the whole state transition: add one at the least significant
/// digit and propagate the carry. Cloning an odometer gives an independent
/// counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odometer {
    digits: Digits,
    radix: usize,
}

impl Odometer {
    /// Counter of `length` digits, all zero
    pub fn new(length: usize, radix: usize) -> Self {
        Self {
            digits: smallvec![0; length],
            radix,
        }
    }

    /// Counter positioned at `ordinal`
    pub fn from_ordinal(ordinal: usize, length: usize, radix: usize) -> TriadResult<Self> {
        Ok(Self {
            digits: digits_of(ordinal, length, radix)?,
            radix,
        })
    }

    /// Current digits, most significant first
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Radix of every digit
    pub fn radix(&self) -> usize {
        self.radix
    }

    /// Advance by one. Returns `false` when the counter wrapped back to all zeros.
    pub fn increment(&mut self) -> bool {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.radix {
                return true;
            }
            *digit = 0;
        }
        false
    }

    /// The next counter state, or `None` if this is the last one
    pub fn successor(&self) -> Option<Self> {
        let mut next = self.clone();
        next.increment().then_some(next)
    }
}

/// Lazy, finite, restartable enumeration of index lists in odometer order.
///
/// Yields `radix^length` lists; every yielded list is an independent owned
/// value. A zero-length sequence yields a single empty list.
///
/// # Examples
///
/// ```
/// use triad_core::codec::IndexSequence;
///
/// let mut seq = IndexSequence::new(1, 3).unwrap();
/// assert_eq!(seq.len(), 3);
/// assert_eq!(&seq.next().unwrap()[..], &[0]);
/// seq.restart();
/// assert_eq!(seq.count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct IndexSequence {
    start: Odometer,
    state: Odometer,
    initial_remaining: usize,
    remaining: usize,
}

impl IndexSequence {
    /// All index lists of `length` digits over `radix`
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `radix` is zero
    /// - `AllocationFailure` if `radix^length` does not fit in `usize`
    pub fn new(length: usize, radix: usize) -> TriadResult<Self> {
        Self::starting_at(0, length, radix)
    }

    /// The index lists from `ordinal` (inclusive) to the end
    pub fn starting_at(ordinal: usize, length: usize, radix: usize) -> TriadResult<Self> {
        check_radix("index_sequence", radix)?;
        let total = checked_volume("index_sequence", radix, length)?;
        if ordinal >= total {
            return Err(TriadError::index_out_of_domain(
                "index_sequence",
                ordinal,
                total,
            ));
        }
        let start = Odometer::from_ordinal(ordinal, length, radix)?;
        Ok(Self {
            state: start.clone(),
            start,
            initial_remaining: total - ordinal,
            remaining: total - ordinal,
        })
    }

    /// Rewind to the first list this sequence was created with
    pub fn restart(&mut self) {
        self.state = self.start.clone();
        self.remaining = self.initial_remaining;
    }
}

impl Iterator for IndexSequence {
    type Item = Digits;

    fn next(&mut self) -> Option<Digits> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.state.digits.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.state.increment();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IndexSequence {}

impl FusedIterator for IndexSequence {}

/// All index lists of `length` digits over `radix`
pub fn index_sequence(length: usize, radix: usize) -> TriadResult<IndexSequence> {
    IndexSequence::new(length, radix)
}
