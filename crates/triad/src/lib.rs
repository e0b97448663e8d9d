//! # Triad - Axis-Group Tensors
//!
//! Dense tensors whose axes are partitioned into three groups (free, scott,
//! caly), with mixed-radix addressing, dissection into sections, and
//! section-wise contraction.
//!
//! This is the **meta crate** that re-exports all Triad components for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use triad::prelude::*;
//!
//! let a = Mat::<f64>::iota(GroupSizes::new(1, 1, 1), 3)?;
//! let sections = a.dissect(Group::Scott)?;
//! assert_eq!(Mat::assemble(&sections, Group::Scott)?, a);
//!
//! let b = Mat::<f64>::ones(GroupSizes::new(1, 1, 1), 3)?;
//! assert_eq!(contract_blockwise(&a, &b)?, contract(&a, &b)?);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Tensor and Addressing ([`core`])
//!
//! `Mat<T>`, the mixed-radix codec, partial-index slicing, dissection and
//! assembly.
//!
//! ```
//! use triad::core::codec::ordinal_of;
//!
//! assert_eq!(ordinal_of(&[1, 0, 1], 2).unwrap(), 5);
//! ```
//!
//! ### Contraction ([`kernels`])
//!
//! Direct, section-pair, block-wise and reduced contraction.
//!
//! ## Features
//!
//! - `parallel`: Contract section pairs on the Rayon pool
//! - `serde`: Serialization of tensors and group metadata

// Re-export all components
pub use triad_core as core;
pub use triad_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use triad::prelude::*;
    //!
    //! let mat = Mat::<f64>::zeros(GroupSizes::new(1, 0, 1), 4).unwrap();
    //! assert_eq!(mat.len(), 16);
    //! ```

    // Core types
    pub use crate::core::{
        Group, GroupSizes, IndexSequence, Mat, Odometer, StructuredIndex, TriadError, TriadResult,
    };

    // Contraction
    pub use crate::kernels::{
        contract, contract_blockwise, contract_reduced, contract_sections, ContractionConfig,
        ContractionEngine,
    };
}
