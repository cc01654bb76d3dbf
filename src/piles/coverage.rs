use crate::core::Alignment;

/// Per-base alignment depth over a template of `template_len` bases.
///
/// Every base starts at 1 (the template covers itself) and is incremented once
/// for each alignment whose inclusive query range `[q_start, q_end]` contains it.
/// Ranges reaching past the template end are truncated.
#[must_use]
pub fn coverage(template_len: usize, alignments: &[Alignment]) -> Vec<u32> {
    let mut depth = vec![1u32; template_len];

    for al in alignments {
        if al.q_start >= template_len {
            continue;
        }
        let end = al.q_end.min(template_len - 1);
        for d in &mut depth[al.q_start..=end] {
            *d += 1;
        }
    }

    depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn al(q_start: usize, q_end: usize) -> Alignment {
        Alignment::new("tpl", q_start, q_end, 20, "sup", 0, q_end - q_start, 100)
    }

    #[test]
    fn test_coverage_no_alignments() {
        assert_eq!(coverage(5, &[]), vec![1, 1, 1, 1, 1]);
        assert!(coverage(0, &[]).is_empty());
    }

    #[test]
    fn test_coverage_inclusive_ranges() {
        let depth = coverage(10, &[al(0, 4), al(3, 9), al(3, 3)]);
        assert_eq!(depth, vec![2, 2, 2, 4, 3, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_coverage_truncates_past_end() {
        let depth = coverage(4, &[al(2, 9), al(7, 8)]);
        assert_eq!(depth, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_coverage_randomized_length_and_floor() {
        let mut rng = StdRng::seed_from_u64(0x5EED_C0DE);
        for _ in 0..200 {
            let len = rng.gen_range(1..200usize);
            let alignments: Vec<Alignment> = (0..rng.gen_range(0..20))
                .map(|_| {
                    let start = rng.gen_range(0..len);
                    let end = (start + rng.gen_range(0..50)).min(len - 1);
                    al(start, end)
                })
                .collect();

            let depth = coverage(len, &alignments);
            assert_eq!(depth.len(), len);
            assert!(depth.iter().all(|&d| d >= 1));

            let total: u64 = depth.iter().map(|&d| u64::from(d) - 1).sum();
            let expected: u64 = alignments.iter().map(|a| a.query_span() as u64).sum();
            assert_eq!(total, expected);
        }
    }
}
