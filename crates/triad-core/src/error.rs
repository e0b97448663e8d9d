//! Error types for axis-group tensor operations
//!
//! Every fallible operation in the triad stack reports one of three kinds of
//! failure, always synchronously and at the first violated precondition:
//!
//! - **`ShapeMismatch`**: radix or group-size disagreement between operands, or a
//!   section list whose length is not an exact power of the radix
//! - **`IndexOutOfDomain`**: an index digit `>= radix`, an index list longer than
//!   its group, or a flat offset past the end of the buffer
//! - **`AllocationFailure`**: `radix^rank` does not fit in `usize`, or the
//!   allocator refused the buffer
//!
//! # Examples
//!
//! ```
//! use triad_core::{GroupSizes, Mat, TriadError};
//!
//! let err = Mat::from_vec(vec![0.0_f64; 5], GroupSizes::new(1, 1, 0), 2).unwrap_err();
//! assert!(matches!(err, TriadError::ShapeMismatch { .. }));
//! ```

use thiserror::Error;

/// Error type for every triad operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriadError {
    /// Operands disagree on radix or group sizes
    #[error("{operation}: shape mismatch - {reason}")]
    ShapeMismatch {
        operation: &'static str,
        reason: String,
    },

    /// An index digit, index-list length, or flat offset is outside its domain `[0, bound)`
    #[error("{operation}: index {index} out of domain [0, {bound})")]
    IndexOutOfDomain {
        operation: &'static str,
        index: usize,
        bound: usize,
    },

    /// A buffer of `radix^rank` elements could not be sized or allocated
    #[error("{operation}: cannot allocate {radix}^{rank} elements")]
    AllocationFailure {
        operation: &'static str,
        radix: usize,
        rank: usize,
    },
}

/// Result type for triad operations
pub type TriadResult<T> = Result<T, TriadError>;

impl TriadError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(operation: &'static str, reason: impl Into<String>) -> Self {
        TriadError::ShapeMismatch {
            operation,
            reason: reason.into(),
        }
    }

    /// Create an index-out-of-domain error
    pub fn index_out_of_domain(operation: &'static str, index: usize, bound: usize) -> Self {
        TriadError::IndexOutOfDomain {
            operation,
            index,
            bound,
        }
    }

    /// Create an allocation failure error
    pub fn allocation_failure(operation: &'static str, radix: usize, rank: usize) -> Self {
        TriadError::AllocationFailure {
            operation,
            radix,
            rank,
        }
    }

    /// Name of the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            TriadError::ShapeMismatch { operation, .. }
            | TriadError::IndexOutOfDomain { operation, .. }
            | TriadError::AllocationFailure { operation, .. } => operation,
        }
    }

    /// Whether this is a shape mismatch
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, TriadError::ShapeMismatch { .. })
    }

    /// Whether this is an index-out-of-domain error
    pub fn is_index_out_of_domain(&self) -> bool {
        matches!(self, TriadError::IndexOutOfDomain { .. })
    }

    /// Whether this is an allocation failure
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, TriadError::AllocationFailure { .. })
    }
}
