//! # triad-core
//!
//! Axis-group tensors, mixed-radix addressing, dissection and assembly.
//!
//! A triad tensor has `a + b + c` axes, all of the same size `radix`,
//! partitioned into three named axis groups:
//!
//! - **free** (`a` axes), most significant in the flat layout
//! - **scott** (`b` axes)
//! - **caly** (`c` axes), least significant
//!
//! Each group acts as a single composite dimension of `radix^rank` positions.
//! This crate provides:
//!
//! - **Mixed-radix codec** ([`codec`]) between structured indices and flat offsets
//! - **Dense tensor** ([`Mat`]) with structured and flat access
//! - **Slicing** with partial structured indices ([`Mat::select`], [`Mat::place`])
//! - **Dissection/assembly** along a group ([`Mat::dissect`], [`Mat::assemble`])
//! - **Group reduction** ([`Mat::sum_group`]) and `ndarray` interop
//!
//! ## Quick Start
//!
//! ```
//! use triad_core::{Group, GroupSizes, Mat};
//!
//! // radix 3, one axis per group: 27 elements 0..26
//! let mat = Mat::<i64>::iota(GroupSizes::new(1, 1, 1), 3).unwrap();
//! assert_eq!(mat.read(&[2], &[1], &[0]).unwrap(), 21);
//!
//! // peel off the scott group
//! let sections = mat.dissect(Group::Scott).unwrap();
//! assert_eq!(sections.len(), 3);
//! assert_eq!(sections[0].sizes(), GroupSizes::new(1, 0, 1));
//!
//! // and put it back
//! let back = Mat::assemble(&sections, Group::Scott).unwrap();
//! assert_eq!(back, mat);
//! ```
//!
//! ## Partial Indices
//!
//! An index list may be shorter than its group. For slicing, the supplied
//! digits fix the leading axes of the group and the rest stay free. Element
//! access instead reads the lists with the lengths actually supplied:
//!
//! ```
//! use triad_core::{GroupSizes, Mat, StructuredIndex};
//!
//! let mat = Mat::<u32>::iota(GroupSizes::new(2, 0, 0), 2).unwrap();
//! let half = mat.select(&StructuredIndex::new(&[1], &[], &[])).unwrap();
//! assert_eq!(half.as_slice(), &[2, 3]);
//! assert_eq!(mat.read(&[1], &[], &[]).unwrap(), 1);
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`TriadResult`]. Failures are reported at
//! the first violated precondition and nothing is written on failure:
//!
//! ```
//! use triad_core::{GroupSizes, Mat};
//!
//! let mut mat = Mat::<f64>::zeros(GroupSizes::new(1, 1, 1), 2).unwrap();
//! assert!(mat.write(&[0], &[2], &[0], 1.0).unwrap_err().is_index_out_of_domain());
//! assert!(Mat::<f64>::zeros(GroupSizes::new(70, 0, 0), 2).unwrap_err().is_allocation_failure());
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialization of [`Mat`], [`Group`] and [`GroupSizes`]

pub mod codec;
pub mod error;
pub mod mat;
pub mod types;


pub use codec::{digits_of, index_sequence, offset_of, ordinal_of, volume, IndexSequence, Odometer};
pub use error::{TriadError, TriadResult};
pub use mat::Mat;
pub use types::{Digits, Group, GroupSizes, StructuredIndex};

/// Commonly used items
pub mod prelude {
    pub use crate::codec::{IndexSequence, Odometer};
    pub use crate::error::{TriadError, TriadResult};
    pub use crate::mat::Mat;
    pub use crate::types::{Group, GroupSizes, StructuredIndex};
}
