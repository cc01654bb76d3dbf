use serde::{Deserialize, Serialize};

/// An inclusive range `[begin, end]` of template coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Window {
    pub begin: usize,
    pub end: usize,
}

impl Window {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Number of template bases in the window
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Windows always hold at least one base
    pub fn len(&self) -> usize {
        self.end + 1 - self.begin
    }

    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.begin <= pos && pos <= self.end
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.begin, self.end)
    }
}

/// Sequences overlapping one window.
///
/// Index 0 holds the template slice; the remaining entries are the supporting
/// read slices in alignment input order. Duplicates are kept.
pub type Pile = Vec<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_len() {
        let w = Window::new(0, 10);
        assert_eq!(w.len(), 11);
        assert!(w.contains(0));
        assert!(w.contains(10));
        assert!(!w.contains(11));
        assert_eq!(Window::new(5, 5).len(), 1);
        assert_eq!(w.to_string(), "[0, 10]");
    }
}
