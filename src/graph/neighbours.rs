use crate::graph::counts::KmerCounts;

/// Nucleotides tried when extending a k-mer
pub const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Side of a k-mer on which a base is added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Drop the last base and prepend one
    Left,
    /// Drop the first base and append one
    Right,
}

/// Solid neighbours of `kmer` in the given direction, most frequent first.
///
/// Candidates are the four one-base extensions of the `(k-1)`-overlap; only
/// those with a count of at least `threshold` are kept. Ties keep alphabet
/// order.
///
/// # Examples
///
/// ```
/// use pilefix::graph::{neighbours, Direction, KmerCounts};
///
/// let counts: KmerCounts = [("CGTA", 5), ("CGTG", 3)].into_iter().collect();
/// assert_eq!(neighbours("ACGT", Direction::Right, &counts, 1), vec!["CGTA", "CGTG"]);
/// ```
#[must_use]
pub fn neighbours(
    kmer: &str,
    direction: Direction,
    counts: &KmerCounts,
    threshold: u32,
) -> Vec<String> {
    if kmer.is_empty() || !kmer.is_ascii() {
        return Vec::new();
    }

    let mut found: Vec<(String, u32)> = ALPHABET
        .iter()
        .map(|&base| match direction {
            Direction::Right => format!("{}{base}", &kmer[1..]),
            Direction::Left => format!("{base}{}", &kmer[..kmer.len() - 1]),
        })
        .filter_map(|candidate| {
            let count = counts.get(&candidate);
            (count >= threshold).then_some((candidate, count))
        })
        .collect();

    found.sort_by(|a, b| b.1.cmp(&a.1));
    found.into_iter().map(|(kmer, _)| kmer).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_neighbours_ranked_by_count() {
        let counts: KmerCounts = [("CGTA", 5), ("CGTC", 0), ("CGTG", 3), ("CGTT", 0)]
            .into_iter()
            .collect();
        assert_eq!(
            neighbours("ACGT", Direction::Right, &counts, 1),
            vec!["CGTA", "CGTG"]
        );
    }

    #[test]
    fn test_left_neighbours() {
        let counts: KmerCounts = [("AACG", 1), ("TACG", 4), ("GACG", 4)].into_iter().collect();
        assert_eq!(
            neighbours("ACGT", Direction::Left, &counts, 1),
            vec!["GACG", "TACG", "AACG"]
        );
        assert_eq!(neighbours("ACGT", Direction::Left, &counts, 2), vec!["GACG", "TACG"]);
    }

    #[test]
    fn test_zero_threshold_accepts_all_four() {
        let counts = KmerCounts::new();
        let found = neighbours("AC", Direction::Right, &counts, 0);
        assert_eq!(found, vec!["CA", "CC", "CG", "CT"]);
    }

    #[test]
    fn test_no_solid_neighbours() {
        let counts: KmerCounts = [("CGTA", 1)].into_iter().collect();
        assert!(neighbours("ACGT", Direction::Right, &counts, 2).is_empty());
        assert!(neighbours("", Direction::Right, &counts, 0).is_empty());
    }
}
