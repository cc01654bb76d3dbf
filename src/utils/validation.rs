//! Centralized validation and helper functions.

/// Maximum number of records (alignments or sequences) read from one file
pub const MAX_RECORDS: usize = 50_000_000;

/// Check whether adding another record would exceed [`MAX_RECORDS`].
/// Returns an error message if the limit would be exceeded, `None` otherwise.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Validate that a string only holds the nucleotides `A`, `C`, `G`, `T` (any case).
///
/// # Examples
///
/// ```
/// use pilefix::utils::validation::is_nucleotide_sequence;
///
/// assert!(is_nucleotide_sequence("ACGTacgt"));
/// assert!(!is_nucleotide_sequence("ACGN"));
/// assert!(!is_nucleotide_sequence(""));
/// ```
#[must_use]
pub fn is_nucleotide_sequence(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T'))
}

/// Validate a k-mer order against a seed: non-zero and no longer than the seed.
#[must_use]
pub fn is_valid_order(order: usize, seed: &str) -> bool {
    order > 0 && order <= seed.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_limit() {
        assert!(check_record_limit(0).is_none());
        assert!(check_record_limit(MAX_RECORDS - 1).is_none());
        assert!(check_record_limit(MAX_RECORDS).is_some());
    }

    #[test]
    fn test_is_nucleotide_sequence() {
        assert!(is_nucleotide_sequence("ACGT"));
        assert!(is_nucleotide_sequence("acgt"));
        assert!(!is_nucleotide_sequence("ACGU"));
        assert!(!is_nucleotide_sequence("AC GT"));
    }

    #[test]
    fn test_is_valid_order() {
        assert!(is_valid_order(4, "ACGT"));
        assert!(!is_valid_order(5, "ACGT"));
        assert!(!is_valid_order(0, "ACGT"));
    }
}
