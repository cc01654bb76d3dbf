//! Core data types for pile-based read correction.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Alignment`]: One pairwise alignment of a supporting read against a template read
//! - [`Strand`]: Orientation of the supporting read in an alignment
//! - [`Window`]: An inclusive coordinate range on the template (a pile position)
//! - [`Pile`]: The template slice plus the overlapping slices of supporting reads
//! - [`SequenceStore`]: Read-only name → sequence lookup
//!
//! ## Coordinates
//!
//! All coordinates are 0-based and **inclusive** on both ends. An alignment
//! covering the first ten bases of a read has `q_start = 0` and `q_end = 9`.
//! Parsers for formats with half-open intervals (PAF) convert on input.

pub mod alignment;
pub mod sequence;
pub mod window;

pub use alignment::{Alignment, Strand};
pub use sequence::{reverse_complement, SequenceStore};
pub use window::{Pile, Window};
