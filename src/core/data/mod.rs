//! Core data types used across all pipeline phases.
//!
//! ## Module Structure
//!
//! - `source`: Source code location types (SourceLocation, LineIndex)

pub mod source;

pub use source::{LineIndex, SourceLocation};
