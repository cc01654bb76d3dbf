use std::collections::HashMap;

/// Complement of a single nucleotide, preserving case. Unknown symbols map to `N`.
fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        b'a' => b't',
        b'c' => b'g',
        b'g' => b'c',
        b't' => b'a',
        b'n' => b'n',
        _ => b'N',
    }
}

/// Reverse complement of a nucleotide string
///
/// # Examples
///
/// ```
/// use pilefix::core::reverse_complement;
///
/// assert_eq!(reverse_complement("AACGT"), "ACGTT");
/// ```
#[must_use]
pub fn reverse_complement(seq: &str) -> String {
    seq.bytes().rev().map(|b| complement(b) as char).collect()
}

/// Read-only lookup from read name to nucleotide sequence.
///
/// Populated once by the caller (usually from a FASTA file) and shared by
/// every pile computation; it is never mutated while piles are being built.
#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    sequences: HashMap<String, String>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sequence, replacing any previous one with the same name
    pub fn insert(&mut self, name: impl Into<String>, sequence: impl Into<String>) {
        self.sequences.insert(name.into(), sequence.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sequences.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sequences.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl<N: Into<String>, S: Into<String>> FromIterator<(N, S)> for SequenceStore {
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (name, sequence) in iter {
            store.insert(name, sequence);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ACGT"), "ACGT");
        assert_eq!(reverse_complement("AAAC"), "GTTT");
        assert_eq!(reverse_complement("acgN"), "Ncgt");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn test_store_lookup() {
        let store: SequenceStore = [("r1", "ACGT"), ("r2", "GGGG")].into_iter().collect();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("r1"), Some("ACGT"));
        assert!(store.contains("r2"));
        assert_eq!(store.get("r3"), None);
    }
}
