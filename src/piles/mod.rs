//! Coverage windows and per-window sequence piles.
//!
//! Given every alignment of supporting reads against one template read, this
//! module:
//!
//! 1. Computes per-base depth over the template ([`coverage`])
//! 2. Cuts the template into windows of sufficiently covered bases ([`partition`])
//! 3. Extracts, for each window, the template slice and the matching slice of
//!    every overlapping supporting read ([`extract`])
//!
//! ## Example
//!
//! ```rust
//! use pilefix::core::{Alignment, SequenceStore};
//! use pilefix::piles::{get_alignment_piles, PileConfig};
//!
//! let store: SequenceStore = [("tpl", "AAAACGTGGGG"), ("sup", "AAAACGTGGGG")]
//!     .into_iter()
//!     .collect();
//! let alignments = vec![Alignment::new("tpl", 0, 10, 11, "sup", 0, 10, 11)];
//!
//! let config = PileConfig { min_support: 2, window_size: 4, window_overlap: 0, mer_size: 4 };
//! let piles = get_alignment_piles(&alignments, &store, &config);
//!
//! assert_eq!(piles.windows.len(), piles.piles.len());
//! assert_eq!(piles.piles[0], vec!["AAAA", "AAAA"]);
//! ```

pub mod coverage;
pub mod extract;
pub mod partition;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Alignment, Pile, SequenceStore, Window};

pub use coverage::coverage;
pub use extract::{extract_pile, remap_to_target, TargetSlice};
pub use partition::{pile_windows, windows_from_coverage};

/// Default minimum depth for a base to belong to a window
pub const DEFAULT_MIN_SUPPORT: u32 = 4;

/// Default window length
pub const DEFAULT_WINDOW_SIZE: usize = 500;

/// Default number of bases shared by consecutive windows
pub const DEFAULT_WINDOW_OVERLAP: usize = 50;

/// Default k-mer size; shorter supporting slices are dropped from piles
pub const DEFAULT_MER_SIZE: usize = 9;

/// Parameters for windowing and pile extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PileConfig {
    /// Minimum depth (template included) for a base to be inside a window
    pub min_support: u32,
    /// Window length
    pub window_size: usize,
    /// Bases shared by consecutive windows (0 disables overlap)
    pub window_overlap: usize,
    /// Minimum length of a supporting slice
    pub mer_size: usize,
}

impl Default for PileConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            window_size: DEFAULT_WINDOW_SIZE,
            window_overlap: DEFAULT_WINDOW_OVERLAP,
            mer_size: DEFAULT_MER_SIZE,
        }
    }
}

/// Windows and their piles, paired by index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentPiles {
    pub windows: Vec<Window>,
    pub piles: Vec<Pile>,
}

impl AlignmentPiles {
    /// Iterate over `(window, pile)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Window, &Pile)> {
        self.windows.iter().zip(self.piles.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Compute the windows of a template read and the pile of each window.
///
/// The template is the query of the first alignment; alignments naming a
/// different query are ignored. The returned windows and piles have equal
/// length; a pile may be empty when its window reaches past the stored template.
#[must_use]
pub fn get_alignment_piles(
    alignments: &[Alignment],
    store: &SequenceStore,
    config: &PileConfig,
) -> AlignmentPiles {
    let Some(first) = alignments.first() else {
        return AlignmentPiles::default();
    };

    let template: Vec<Alignment> = alignments
        .iter()
        .filter(|al| al.q_name == first.q_name)
        .cloned()
        .collect();
    if template.len() < alignments.len() {
        warn!(
            "Ignoring {} alignments whose query is not '{}'",
            alignments.len() - template.len(),
            first.q_name
        );
    }

    let windows = pile_windows(
        first.q_length,
        &template,
        config.min_support,
        config.window_size,
        config.window_overlap,
    );

    let piles: Vec<Pile> = windows
        .iter()
        .map(|&w| extract_pile(&template, w, store, config.mer_size))
        .collect();

    debug!(
        "Read '{}': {} windows from {} alignments",
        first.q_name,
        windows.len(),
        template.len()
    );

    AlignmentPiles { windows, piles }
}

/// Group alignments by query name, keeping the first-seen order of queries
/// and the input order of alignments within each group.
#[must_use]
pub fn group_by_query(alignments: Vec<Alignment>) -> Vec<Vec<Alignment>> {
    let mut index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    let mut groups: Vec<Vec<Alignment>> = Vec::new();

    for al in alignments {
        if let Some(&i) = index.get(&al.q_name) {
            groups[i].push(al);
        } else {
            index.insert(al.q_name.clone(), groups.len());
            groups.push(vec![al]);
        }
    }

    groups
}
