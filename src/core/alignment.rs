use serde::{Deserialize, Serialize};

/// Orientation of the supporting (target) read relative to the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    #[default]
    Forward,
    Reverse,
}

impl Strand {
    /// Parse a strand from its PAF representation (`+` or `-`)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Forward),
            "-" => Some(Self::Reverse),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse)
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// A pairwise alignment of a supporting read (target) against the template read (query).
///
/// Coordinates are 0-based and inclusive. Alignments are produced by an external
/// aligner and are never modified by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Template read name
    pub q_name: String,
    /// First aligned template base
    pub q_start: usize,
    /// Last aligned template base
    pub q_end: usize,
    /// Template read length
    pub q_length: usize,

    /// Supporting read name
    pub t_name: String,
    /// First aligned supporting base
    pub t_start: usize,
    /// Last aligned supporting base
    pub t_end: usize,
    /// Supporting read length
    pub t_length: usize,

    pub strand: Strand,
}

impl Alignment {
    /// Create a forward-strand alignment covering `[q_start, q_end]` of the template
    /// and `[t_start, t_end]` of the supporting read.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        q_name: impl Into<String>,
        q_start: usize,
        q_end: usize,
        q_length: usize,
        t_name: impl Into<String>,
        t_start: usize,
        t_end: usize,
        t_length: usize,
    ) -> Self {
        Self {
            q_name: q_name.into(),
            q_start,
            q_end,
            q_length,
            t_name: t_name.into(),
            t_start,
            t_end,
            t_length,
            strand: Strand::Forward,
        }
    }

    /// Builder method to set the strand
    #[must_use]
    pub fn with_strand(mut self, strand: Strand) -> Self {
        self.strand = strand;
        self
    }

    /// Number of template bases covered by the alignment
    #[must_use]
    pub fn query_span(&self) -> usize {
        self.q_end - self.q_start + 1
    }

    /// Check that both coordinate ranges satisfy `start <= end < length`
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.q_start <= self.q_end
            && self.q_end < self.q_length
            && self.t_start <= self.t_end
            && self.t_end < self.t_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_parse() {
        assert_eq!(Strand::parse("+"), Some(Strand::Forward));
        assert_eq!(Strand::parse("-"), Some(Strand::Reverse));
        assert_eq!(Strand::parse("*"), None);
        assert!(Strand::Reverse.is_reverse());
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    #[test]
    fn test_alignment_consistency() {
        let al = Alignment::new("read1", 10, 19, 100, "read2", 0, 9, 50);
        assert!(al.is_consistent());
        assert_eq!(al.query_span(), 10);
        assert_eq!(al.strand, Strand::Forward);

        let past_end = Alignment::new("read1", 10, 100, 100, "read2", 0, 9, 50);
        assert!(!past_end.is_consistent());

        let inverted = Alignment::new("read1", 10, 19, 100, "read2", 9, 0, 50);
        assert!(!inverted.is_consistent());
    }
}
