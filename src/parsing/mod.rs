//! Readers for the inputs produced by external tools.
//!
//! This module provides parsers for:
//!
//! - **PAF files**: Pairwise alignments of supporting reads against template reads
//!   (e.g. from minimap2 all-vs-all mapping)
//! - **FASTA files**: Read sequences, loaded into a [`SequenceStore`](crate::core::SequenceStore)
//!
//! ## Example
//!
//! ```rust,no_run
//! use pilefix::parsing::{fasta, paf};
//! use std::path::Path;
//!
//! let alignments = paf::parse_paf_file(Path::new("overlaps.paf")).unwrap();
//! let store = fasta::load_sequences(Path::new("reads.fa")).unwrap();
//! ```

pub mod fasta;
pub mod paf;

pub use paf::ParseError;
