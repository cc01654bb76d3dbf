//! Implicit de Bruijn graph over a k-mer count table.
//!
//! The graph is never materialised. Nodes are the k-mers whose count reaches a
//! solidity threshold, and two nodes are adjacent when they overlap by `k - 1`
//! bases. Adjacency is answered on demand by [`neighbours`].
//!
//! - [`KmerCounts`]: k-mer → count table, absent k-mers count 0
//! - [`neighbours`]: solid one-base extensions of a k-mer, most frequent first
//! - [`extend_left`] / [`extend_right`]: follow unambiguous paths from a sequence end
//! - [`Linker`]: branch-limited search connecting a source seed to a target seed
//!
//! ## Order reduction
//!
//! Small orders tolerate more sequencing errors but produce denser graphs with
//! more branches; large orders are specific but break on errors. A failed
//! search is therefore retried at successively smaller orders, see
//! [`Linker::link_with_order_reduction`].
//!
//! ## Example
//!
//! ```rust
//! use pilefix::graph::{KmerCounts, LinkConfig, Linker};
//!
//! let counts = KmerCounts::from_sequences(&["ACGTTGCAAT", "ACGTTGCAAT"], 4..=5);
//! let config = LinkConfig {
//!     base_order: 5,
//!     min_order: 4,
//!     max_distance: 100,
//!     max_branches: 10,
//!     solid_threshold: 2,
//! };
//!
//! let linker = Linker::with_config(&counts, config);
//! let result = linker.link_with_order_reduction("ACGTT", "GCAAT").unwrap();
//! assert_eq!(result.missing_part, "ACGTTGCAAT");
//! assert_eq!(result.order, 5);
//! ```

pub mod counts;
pub mod extend;
pub mod link;
pub mod neighbours;

pub use counts::KmerCounts;
pub use extend::{extend_left, extend_right};
pub use link::{LinkConfig, LinkResult, Linker};
pub use neighbours::{neighbours, Direction, ALPHABET};
