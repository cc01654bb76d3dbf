//! # pilefix
//!
//! A library for reference-free correction of long, error-prone reads.
//!
//! Long reads are corrected using the shorter, more accurate pieces of other
//! reads that align to them. `pilefix` solves the two local problems at the
//! heart of this approach:
//!
//! 1. **Piles**: split a template read into windows covered by enough
//!    alignments, and collect for each window the overlapping slice of every
//!    aligned read, remapped to target coordinates and reverse-complemented
//!    for reverse-strand alignments.
//! 2. **Graph search**: treat the k-mers of a pile as an implicit de Bruijn
//!    graph and reconstruct sequence between two anchor k-mers with a bounded,
//!    backtracking search that retries at smaller k-mer orders on failure.
//!
//! Alignment generation is left to an external aligner (PAF input), and
//! searches are heuristic: failing to close a gap is an expected outcome.
//!
//! ## Example
//!
//! ```rust
//! use pilefix::core::{Alignment, SequenceStore};
//! use pilefix::graph::{KmerCounts, LinkConfig, Linker};
//! use pilefix::piles::{get_alignment_piles, PileConfig};
//!
//! let read = "ACGTTGCAATCGGA";
//! let store: SequenceStore = [("tpl", read), ("a", read), ("b", read)].into_iter().collect();
//! let alignments = vec![
//!     Alignment::new("tpl", 0, 13, 14, "a", 0, 13, 14),
//!     Alignment::new("tpl", 0, 13, 14, "b", 0, 13, 14),
//! ];
//!
//! let config = PileConfig { min_support: 3, window_size: 14, window_overlap: 0, mer_size: 5 };
//! let piles = get_alignment_piles(&alignments, &store, &config);
//! assert_eq!(piles.len(), 1);
//!
//! let counts = KmerCounts::from_sequences(&piles.piles[0], 5..=5);
//! let linker = Linker::with_config(&counts, LinkConfig {
//!     base_order: 5,
//!     min_order: 5,
//!     max_distance: read.len(),
//!     max_branches: 10,
//!     solid_threshold: 2,
//! });
//! let result = linker.link("ACGTT", "TCGGA", 5).unwrap();
//! assert_eq!(result.missing_part, read);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignments, windows, piles, and the sequence store
//! - [`piles`]: Coverage, window partitioning, and pile extraction
//! - [`graph`]: K-mer counts, neighbour lookup, linear extension, and linking
//! - [`parsing`]: PAF and FASTA readers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod graph;
pub mod parsing;
pub mod piles;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{Alignment, Pile, SequenceStore, Strand, Window};
pub use crate::graph::{KmerCounts, LinkConfig, LinkResult, Linker};
pub use crate::piles::{get_alignment_piles, AlignmentPiles, PileConfig};
