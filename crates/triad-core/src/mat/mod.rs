//! Axis-group tensor implementation and operations
//!
//! This module provides the `Mat<T>` tensor organized into functional
//! sub-modules.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod convert;
mod creation;
mod display;
mod elementwise;
mod indexing;
mod sections;

// Re-export the main type
pub use types::Mat;
