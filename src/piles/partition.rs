use crate::core::{Alignment, Window};
use crate::piles::coverage::coverage;

/// Split a template into windows of adequately covered bases.
///
/// A forward scan tracks the current run of bases with depth `>= min_support`.
/// Each time the run reaches `window_size` bases a window is emitted and the scan
/// resumes `window_overlap` bases before the current position, so consecutive
/// windows share `window_overlap` bases. A base below `min_support` resets the run.
///
/// A backward scan then looks for the last run of `window_size` covered bases
/// ending at the template tail and appends it when the forward scan did not
/// already produce it. This captures the trailing bases that the forward scan
/// leaves behind when the template length is not a multiple of the window step.
///
/// `window_size` of 0 is treated as 1, and `window_overlap` is clamped to
/// `window_size - 1` so the forward scan always advances.
#[must_use]
pub fn pile_windows(
    template_len: usize,
    alignments: &[Alignment],
    min_support: u32,
    window_size: usize,
    window_overlap: usize,
) -> Vec<Window> {
    let depth = coverage(template_len, alignments);
    windows_from_coverage(&depth, min_support, window_size, window_overlap)
}

/// Window scan over a precomputed coverage array
#[must_use]
pub fn windows_from_coverage(
    depth: &[u32],
    min_support: u32,
    window_size: usize,
    window_overlap: usize,
) -> Vec<Window> {
    let window_size = window_size.max(1);
    let overlap = window_overlap.min(window_size - 1);
    let mut windows = Vec::new();

    let mut begin = 0;
    let mut run = 0;
    let mut i = 0;
    while i < depth.len() {
        if depth[i] < min_support {
            run = 0;
            i += 1;
            begin = i;
            continue;
        }

        run += 1;
        i += 1;
        if run == window_size {
            windows.push(Window::new(begin, begin + run - 1));
            i -= overlap;
            begin = i;
            run = 0;
        }
    }

    if let Some(tail) = tail_window(depth, min_support, window_size) {
        if !windows.contains(&tail) {
            windows.push(tail);
        }
    }

    windows
}

/// The first `window_size` run of covered bases found scanning back from the end
fn tail_window(depth: &[u32], min_support: u32, window_size: usize) -> Option<Window> {
    let mut run = 0;
    for (i, &d) in depth.iter().enumerate().rev() {
        if d < min_support {
            run = 0;
            continue;
        }
        run += 1;
        if run == window_size {
            return Some(Window::new(i, i + window_size - 1));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_fixed_windows_without_overlap() {
        let depth = vec![2; 11];
        let windows = windows_from_coverage(&depth, 2, 4, 0);
        assert_eq!(
            windows,
            vec![Window::new(0, 3), Window::new(4, 7), Window::new(7, 10)]
        );
    }

    #[test]
    fn test_exact_multiple_has_no_duplicate_tail() {
        let depth = vec![3; 8];
        let windows = windows_from_coverage(&depth, 2, 4, 0);
        assert_eq!(windows, vec![Window::new(0, 3), Window::new(4, 7)]);
    }

    #[test]
    fn test_template_equal_to_window() {
        let depth = vec![2; 4];
        assert_eq!(windows_from_coverage(&depth, 2, 4, 0), vec![Window::new(0, 3)]);
    }

    #[test]
    fn test_overlapping_windows_share_bases() {
        let depth = vec![2; 10];
        let windows = windows_from_coverage(&depth, 2, 4, 2);
        assert_eq!(
            windows,
            vec![
                Window::new(0, 3),
                Window::new(2, 5),
                Window::new(4, 7),
                Window::new(6, 9),
            ]
        );
    }

    #[test]
    fn test_overlap_clamped_to_window_size() {
        let depth = vec![2; 6];
        let windows = windows_from_coverage(&depth, 2, 3, 10);
        assert_eq!(
            windows,
            vec![
                Window::new(0, 2),
                Window::new(1, 3),
                Window::new(2, 4),
                Window::new(3, 5),
            ]
        );
    }

    #[test]
    fn test_low_coverage_resets_run() {
        //            0  1  2  3  4  5  6  7  8  9
        let depth = [2, 2, 2, 1, 2, 2, 2, 2, 1, 2];
        let windows = windows_from_coverage(&depth, 2, 4, 0);
        assert_eq!(windows, vec![Window::new(4, 7)]);
    }

    #[test]
    fn test_no_window_long_enough() {
        let depth = [2, 2, 1, 2, 2, 1, 2];
        assert!(windows_from_coverage(&depth, 2, 3, 0).is_empty());
        assert!(windows_from_coverage(&[], 2, 3, 0).is_empty());
    }

    #[test]
    fn test_tail_window_skips_uncovered_suffix() {
        let depth = [2, 2, 2, 2, 2, 2, 1, 1];
        let windows = windows_from_coverage(&depth, 2, 4, 0);
        assert_eq!(windows, vec![Window::new(0, 3), Window::new(2, 5)]);
    }

    #[test]
    fn test_pile_windows_from_alignments() {
        let al = Alignment::new("tpl", 0, 10, 11, "sup", 0, 10, 11);
        let windows = pile_windows(11, &[al], 2, 4, 0);
        assert_eq!(windows.first(), Some(&Window::new(0, 3)));
        assert_eq!(windows.last(), Some(&Window::new(7, 10)));
    }

    #[test]
    fn test_randomized_windows_are_long_and_supported() {
        let mut rng = StdRng::seed_from_u64(0xA11C_E5ED);
        for _ in 0..500 {
            let depth: Vec<u32> = (0..rng.gen_range(0..300))
                .map(|_| rng.gen_range(1..5))
                .collect();
            let min_support = rng.gen_range(1..5);
            let window_size = rng.gen_range(1..40);
            let overlap = rng.gen_range(0..40);

            let windows = windows_from_coverage(&depth, min_support, window_size, overlap);
            for w in &windows {
                assert!(w.end < depth.len());
                assert!(w.len() >= window_size);
                assert!(depth[w.begin..=w.end].iter().all(|&d| d >= min_support));
            }
        }
    }
}
