//! # triad-kernels
//!
//! Section-wise contraction of axis-group tensors.
//!
//! ## Overview
//!
//! For `A` with groups `(free l, scott s, caly c)` and `B` with groups
//! `(free s, scott c, caly m)`, the contraction sums over the shared `c`
//! group and carries the `s` group through as a batch:
//!
//! - [`contract`] - direct kernel, `C(l, s, m) = Σ_c A(l, s, c) · B(s, c, m)`
//! - [`contract_sections`] - dissect `A` on scott and `B` on free, contract each pair
//! - [`contract_blockwise`] - assemble the pairwise results, equal to [`contract`]
//! - [`contract_reduced`] - also sum over the batch group (block matrix product)
//!
//! Section pairs own independent buffers, so with the `parallel` feature they
//! can be contracted on the rayon pool ([`ContractionConfig::parallel`]).
//!
//! ## Quick Start
//!
//! ```
//! use triad_core::{GroupSizes, Mat};
//! use triad_kernels::{contract, contract_blockwise};
//!
//! let a = Mat::<f64>::ones(GroupSizes::new(1, 1, 1), 2).unwrap();
//! let b = Mat::<f64>::ones(GroupSizes::new(1, 1, 1), 2).unwrap();
//!
//! let c = contract(&a, &b).unwrap();
//! assert!(c.as_slice().iter().all(|&x| x == 2.0));
//! assert_eq!(contract_blockwise(&a, &b).unwrap(), c);
//! ```
//!
//! ## Features
//!
//! - `parallel`: Contract section pairs in parallel via Rayon

pub mod config;
pub mod contraction;
pub mod utils;


pub use config::ContractionConfig;
pub use contraction::{
    contract, contract_blockwise, contract_reduced, contract_sections, ContractionEngine,
};
pub use utils::{approx_eq, max_abs_diff};
