use crate::graph::counts::KmerCounts;
use crate::graph::neighbours::{neighbours, Direction};

/// Extend `seq` to the left while its leftmost `order`-mer has exactly one solid
/// left neighbour, adding at most `max_distance` bases.
///
/// Returns the number of bases prepended. Stops at a dead end, at a branch, or
/// once `max_distance` bases were added.
pub fn extend_left(
    counts: &KmerCounts,
    order: usize,
    max_distance: usize,
    seq: &mut String,
    threshold: u32,
) -> usize {
    extend(counts, order, max_distance, seq, threshold, Direction::Left)
}

/// Extend `seq` to the right while its rightmost `order`-mer has exactly one
/// solid right neighbour, adding at most `max_distance` bases.
///
/// Returns the number of bases appended.
pub fn extend_right(
    counts: &KmerCounts,
    order: usize,
    max_distance: usize,
    seq: &mut String,
    threshold: u32,
) -> usize {
    extend(counts, order, max_distance, seq, threshold, Direction::Right)
}

fn extend(
    counts: &KmerCounts,
    order: usize,
    max_distance: usize,
    seq: &mut String,
    threshold: u32,
    direction: Direction,
) -> usize {
    if order == 0 || seq.len() < order || !seq.is_ascii() {
        return 0;
    }

    let mut distance = 0;
    while distance < max_distance {
        let terminal = match direction {
            Direction::Left => &seq[..order],
            Direction::Right => &seq[seq.len() - order..],
        };
        let next = neighbours(terminal, direction, counts, threshold);
        let [only] = next.as_slice() else {
            break;
        };

        match direction {
            Direction::Left => seq.insert_str(0, &only[..1]),
            Direction::Right => seq.push_str(&only[order - 1..]),
        }
        distance += 1;
    }

    distance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(seqs: &[&str], k: usize) -> KmerCounts {
        KmerCounts::from_sequences(seqs, k..=k)
    }

    #[test]
    fn test_extend_right_until_dead_end() {
        let counts = counts_of(&["ACGTTGCA"], 4);
        let mut seq = String::from("ACGT");
        let added = extend_right(&counts, 4, 100, &mut seq, 1);
        assert_eq!(added, 4);
        assert_eq!(seq, "ACGTTGCA");
    }

    #[test]
    fn test_extend_left_until_dead_end() {
        let counts = counts_of(&["ACGTTGCA"], 4);
        let mut seq = String::from("TGCA");
        let added = extend_left(&counts, 4, 100, &mut seq, 1);
        assert_eq!(added, 4);
        assert_eq!(seq, "ACGTTGCA");
    }

    #[test]
    fn test_extend_respects_distance_cap() {
        let counts = counts_of(&["ACGTTGCA"], 4);
        let mut seq = String::from("ACGT");
        assert_eq!(extend_right(&counts, 4, 2, &mut seq, 1), 2);
        assert_eq!(seq, "ACGTTG");

        let mut untouched = String::from("ACGT");
        assert_eq!(extend_right(&counts, 4, 0, &mut untouched, 1), 0);
        assert_eq!(untouched, "ACGT");
    }

    #[test]
    fn test_extend_stops_at_branch() {
        // CGTT is followed by either GTTA or GTTC
        let counts = counts_of(&["ACGTTA", "CGTTC"], 4);
        let mut seq = String::from("ACGT");
        assert_eq!(extend_right(&counts, 4, 100, &mut seq, 1), 1);
        assert_eq!(seq, "ACGTT");
    }

    #[test]
    fn test_extend_honours_threshold() {
        let counts = counts_of(&["ACGTTGCA", "ACGTTG"], 4);
        let mut seq = String::from("ACGT");
        // GTTG and CGTT are seen twice, TTGC and TGCA only once
        assert_eq!(extend_right(&counts, 4, 100, &mut seq, 2), 2);
        assert_eq!(seq, "ACGTTG");
    }

    #[test]
    fn test_seed_shorter_than_order() {
        let counts = counts_of(&["ACGTTGCA"], 4);
        let mut seq = String::from("ACG");
        assert_eq!(extend_right(&counts, 4, 100, &mut seq, 1), 0);
        assert_eq!(seq, "ACG");
    }
}
