use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::counts::KmerCounts;
use crate::graph::neighbours::{neighbours, Direction};

/// Default starting k-mer order
pub const DEFAULT_BASE_ORDER: usize = 9;

/// Default smallest order tried before giving up
pub const DEFAULT_MIN_ORDER: usize = 5;

/// Default cap on the number of bases added while searching
pub const DEFAULT_MAX_DISTANCE: usize = 10_000;

/// Default number of branches explored per search
pub const DEFAULT_MAX_BRANCHES: usize = 50;

/// Default minimum count of a solid k-mer
pub const DEFAULT_SOLID_THRESHOLD: u32 = 4;

/// Bounds for the branch-limited search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Order tried first by [`Linker::link_with_order_reduction`]
    pub base_order: usize,
    /// Searches below this order fail immediately
    pub min_order: usize,
    /// Maximum number of bases added to the path
    pub max_distance: usize,
    /// Maximum number of branch candidates explored in one search
    pub max_branches: usize,
    /// Minimum count for a k-mer to be a graph node
    pub solid_threshold: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_order: DEFAULT_BASE_ORDER,
            min_order: DEFAULT_MIN_ORDER,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_branches: DEFAULT_MAX_BRANCHES,
            solid_threshold: DEFAULT_SOLID_THRESHOLD,
        }
    }
}

impl LinkConfig {
    /// Default bounds with the distance cap set to the length of the read being corrected
    #[must_use]
    pub fn for_read_length(read_length: usize) -> Self {
        Self {
            max_distance: read_length,
            ..Self::default()
        }
    }
}

/// A successful link between two seeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResult {
    /// Source seed, the bases found in the graph, then the target seed
    pub missing_part: String,
    /// Order of the k-mers used to find the path
    pub order: usize,
    /// Branch candidates explored by the successful search
    pub branches: usize,
}

/// Branch-limited path search through the implicit de Bruijn graph of a count table
pub struct Linker<'a> {
    counts: &'a KmerCounts,
    config: LinkConfig,
}

impl<'a> Linker<'a> {
    /// Create a linker with default bounds
    pub fn new(counts: &'a KmerCounts) -> Self {
        Self {
            counts,
            config: LinkConfig::default(),
        }
    }

    /// Create a linker with custom bounds
    pub fn with_config(counts: &'a KmerCounts, config: LinkConfig) -> Self {
        Self { counts, config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Try to connect `source` to `target` at a single order.
    ///
    /// The path starts with the whole source seed and grows from its last
    /// `order`-mer until that k-mer equals the first `order` bases of `target`.
    /// On success the missing part is the path followed by the rest of the
    /// target seed.
    #[must_use]
    pub fn link(&self, source: &str, target: &str, order: usize) -> Option<LinkResult> {
        let mut branches = 0;
        let missing_part = self.link_from(target, order, &mut branches, 0, source.to_string())?;
        Some(LinkResult {
            missing_part,
            order,
            branches,
        })
    }

    /// Try [`Linker::link`] at `base_order`, then at each smaller order down to
    /// `min_order`, with a fresh branch budget every time.
    #[must_use]
    pub fn link_with_order_reduction(&self, source: &str, target: &str) -> Option<LinkResult> {
        if self.config.base_order < self.config.min_order {
            return None;
        }
        for order in (self.config.min_order..=self.config.base_order).rev() {
            if let Some(result) = self.link(source, target, order) {
                return Some(result);
            }
            debug!("No path between seeds at order {order}");
        }
        None
    }

    /// Continue a search from `path`, returning the missing part on success.
    ///
    /// `branches` counts the branch candidates explored so far across the whole
    /// search tree and must not be shared between independent searches.
    /// `distance` is the number of bases already added to `path`.
    ///
    /// Fails when `order` is below `min_order`, when `branches` exceeds
    /// `max_branches`, or when `distance` exceeds `max_distance`. Unambiguous
    /// stretches are followed directly; at a branch every candidate is tried
    /// in descending count order, recursing with backtracking, and the first
    /// success wins.
    #[must_use]
    pub fn link_from(
        &self,
        target: &str,
        order: usize,
        branches: &mut usize,
        mut distance: usize,
        mut path: String,
    ) -> Option<String> {
        if order == 0
            || order < self.config.min_order
            || *branches > self.config.max_branches
            || distance > self.config.max_distance
        {
            return None;
        }
        if path.len() < order || target.len() < order || !path.is_ascii() || !target.is_ascii()
        {
            return None;
        }

        let target_anchor = &target[..order];
        let mut found = path.ends_with(target_anchor);
        let mut candidates = self.right_neighbours(&path, order);

        while !found && candidates.len() == 1 && distance <= self.config.max_distance {
            let next = &candidates[0];
            found = next == target_anchor;
            path.push_str(&next[order - 1..]);
            if !found {
                distance += 1;
                candidates = self.right_neighbours(&path, order);
            }
        }

        if !found && candidates.len() > 1 && distance <= self.config.max_distance {
            for next in &candidates {
                if next == target_anchor {
                    path.push_str(&next[order - 1..]);
                    found = true;
                    break;
                }

                *branches += 1;
                let mut extended = path.clone();
                extended.push_str(&next[order - 1..]);
                if let Some(missing_part) =
                    self.link_from(target, order, branches, distance + 1, extended)
                {
                    return Some(missing_part);
                }
            }
        }

        if found {
            path.push_str(&target[order..]);
            Some(path)
        } else {
            None
        }
    }

    fn right_neighbours(&self, path: &str, order: usize) -> Vec<String> {
        neighbours(
            &path[path.len() - order..],
            Direction::Right,
            self.counts,
            self.config.solid_threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(order: usize, max_branches: usize) -> LinkConfig {
        LinkConfig {
            base_order: order,
            min_order: order,
            max_distance: 100,
            max_branches,
            solid_threshold: 1,
        }
    }

    fn counts_of(seqs: &[&str], orders: std::ops::RangeInclusive<usize>) -> KmerCounts {
        KmerCounts::from_sequences(seqs, orders)
    }

    #[test]
    fn test_source_already_at_target() {
        let counts = KmerCounts::new();
        let linker = Linker::with_config(&counts, config(4, 10));
        let result = linker.link("GGACGT", "ACGTCC", 4).unwrap();
        assert_eq!(result.missing_part, "GGACGTCC");
        assert_eq!(result.branches, 0);
    }

    #[test]
    fn test_unambiguous_path() {
        let counts = counts_of(&["ACGTTGCAAT"], 4..=4);
        let linker = Linker::with_config(&counts, config(4, 10));
        let result = linker.link("ACGT", "GCAAT", 4).unwrap();
        assert_eq!(result.missing_part, "ACGTTGCAAT");
        assert_eq!(result.order, 4);
    }

    #[test]
    fn test_dead_end_fails() {
        let counts = counts_of(&["ACGTTG"], 4..=4);
        let linker = Linker::with_config(&counts, config(4, 10));
        assert!(linker.link("ACGT", "CCCC", 4).is_none());
    }

    #[test]
    fn test_branch_backtracking() {
        // After CGTT the graph branches into GTTA (dead end, seen twice) and GTTC (leads to target)
        let counts = counts_of(&["ACGTTA", "ACGTTA", "CGTTCGAT"], 4..=4);
        let linker = Linker::with_config(&counts, config(4, 10));
        let result = linker.link("ACGT", "CGAT", 4).unwrap();
        assert_eq!(result.missing_part, "ACGTTCGAT");
        assert_eq!(result.branches, 2);
    }

    #[test]
    fn test_branch_candidate_matches_target() {
        let counts = counts_of(&["ACGTTA", "ACGTTA", "CGTTCGAT"], 4..=4);
        let linker = Linker::with_config(&counts, config(4, 0));
        let result = linker.link("ACGT", "GTTCGA", 4).unwrap();
        assert_eq!(result.missing_part, "ACGTTCGA");
        // GTTA is explored first and immediately exceeds the budget
        assert_eq!(result.branches, 1);
    }

    #[test]
    fn test_zero_branch_budget_stops_at_branch() {
        let counts = counts_of(&["ACGTTA", "ACGTTA", "CGTTCGAT"], 4..=4);
        let linker = Linker::with_config(&counts, config(4, 0));
        assert!(linker.link("ACGT", "CGAT", 4).is_none());
    }

    #[test]
    fn test_distance_cap() {
        let counts = counts_of(&["ACGTTGCAAT"], 4..=4);
        let linker = Linker::with_config(
            &counts,
            LinkConfig {
                max_distance: 2,
                ..config(4, 10)
            },
        );
        assert!(linker.link("ACGT", "CAAT", 4).is_none());
        assert!(linker.link("ACGT", "TTGC", 4).is_some());
    }

    #[test]
    fn test_order_below_minimum_fails() {
        let counts = counts_of(&["ACGTTGCAAT"], 3..=4);
        let linker = Linker::with_config(&counts, config(4, 10));
        assert!(linker.link("ACGT", "GCAAT", 3).is_none());
    }

    #[test]
    fn test_order_reduction_finds_smaller_order() {
        // At order 5 the seeds share no path; at order 4 they do
        let counts = counts_of(&["ACGTTGCAAT"], 4..=4);
        let linker = Linker::with_config(
            &counts,
            LinkConfig {
                base_order: 5,
                min_order: 4,
                ..config(4, 10)
            },
        );
        let result = linker.link_with_order_reduction("TACGT", "GCAAT").unwrap();
        assert_eq!(result.order, 4);
        assert_eq!(result.missing_part, "TACGTTGCAAT");
    }

    #[test]
    fn test_order_reduction_gives_up() {
        let counts = KmerCounts::new();
        let linker = Linker::with_config(
            &counts,
            LinkConfig {
                base_order: 6,
                min_order: 4,
                ..config(4, 10)
            },
        );
        assert!(linker.link_with_order_reduction("ACGTAC", "TTTTTT").is_none());
    }
}
