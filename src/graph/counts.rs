use std::collections::HashMap;
use std::ops::RangeInclusive;

/// K-mer occurrence table backing the implicit de Bruijn graph.
///
/// K-mers of several orders may live in the same table since each key carries
/// its own length. Absent k-mers have count 0.
#[derive(Debug, Clone, Default)]
pub struct KmerCounts {
    counts: HashMap<String, u32>,
}

impl KmerCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every k-mer of every order in `orders` across `sequences`.
    ///
    /// Sequences are upper-cased before counting. Sequences shorter than an
    /// order contribute nothing at that order.
    pub fn from_sequences<S: AsRef<str>>(sequences: &[S], orders: RangeInclusive<usize>) -> Self {
        let mut table = Self::new();
        for seq in sequences {
            let seq = seq.as_ref().to_ascii_uppercase();
            for k in orders.clone() {
                table.add_kmers(&seq, k);
            }
        }
        table
    }

    /// Add every k-mer of length `k` in `seq`
    pub fn add_kmers(&mut self, seq: &str, k: usize) {
        if k == 0 || seq.len() < k {
            return;
        }
        for start in 0..=seq.len() - k {
            if let Some(kmer) = seq.get(start..start + k) {
                self.increment(kmer);
            }
        }
    }

    pub fn increment(&mut self, kmer: &str) {
        *self.counts.entry(kmer.to_string()).or_insert(0) += 1;
    }

    /// Set the count of a k-mer directly
    pub fn insert(&mut self, kmer: impl Into<String>, count: u32) {
        self.counts.insert(kmer.into(), count);
    }

    /// Occurrence count, 0 when the k-mer was never seen
    #[must_use]
    pub fn get(&self, kmer: &str) -> u32 {
        self.counts.get(kmer).copied().unwrap_or(0)
    }

    /// A k-mer is solid when its count reaches `threshold`
    #[must_use]
    pub fn is_solid(&self, kmer: &str, threshold: u32) -> bool {
        self.get(kmer) >= threshold
    }

    /// Number of distinct k-mers
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for KmerCounts {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (kmer, count) in iter {
            table.insert(kmer, count);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_kmer_is_zero() {
        let table = KmerCounts::new();
        assert_eq!(table.get("ACGT"), 0);
        assert!(table.is_solid("ACGT", 0));
        assert!(!table.is_solid("ACGT", 1));
    }

    #[test]
    fn test_from_sequences_multiple_orders() {
        let table = KmerCounts::from_sequences(&["ACGTA", "acgt"], 3..=4);
        assert_eq!(table.get("ACG"), 2);
        assert_eq!(table.get("CGT"), 2);
        assert_eq!(table.get("GTA"), 1);
        assert_eq!(table.get("ACGT"), 2);
        assert_eq!(table.get("CGTA"), 1);
        assert_eq!(table.get("ACGTA"), 0);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_short_sequence_ignored() {
        let table = KmerCounts::from_sequences(&["AC"], 3..=3);
        assert!(table.is_empty());
    }
}
