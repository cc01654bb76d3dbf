use tracing::{debug, warn};

use crate::core::{reverse_complement, Alignment, Pile, SequenceStore, Window};

/// Portion of a supporting read that corresponds to a template window.
///
/// `begin..=end` is cut from the supporting read (and reverse-complemented for
/// reverse-strand alignments), then `length` bases starting at `shift` are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSlice {
    pub begin: usize,
    pub end: usize,
    pub shift: usize,
    pub length: usize,
}

/// Map a template window onto the target coordinates of one alignment.
///
/// Returns `None` when the alignment does not overlap the window or the mapped
/// target span is empty. The alignment must either start at or before the
/// window and reach it, or start before the window end and reach past it.
///
/// When the window starts before the alignment, the target start is pushed left
/// by the missing template bases; when it ends after the alignment, the target
/// end is pushed right. Both are clamped to `[0, t_length - 1]`.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)] // Read coordinates fit in i64
pub fn remap_to_target(al: &Alignment, window: Window) -> Option<TargetSlice> {
    let reaches_begin = al.q_start <= window.begin && al.q_end >= window.begin;
    let reaches_end = window.end <= al.q_end && al.q_start < window.end;
    if !(reaches_begin || reaches_end) || al.t_length == 0 {
        return None;
    }

    let q_start = al.q_start as i64;
    let q_end = al.q_end as i64;
    let w_begin = window.begin as i64;
    let w_end = window.end as i64;
    let t_last = al.t_length as i64 - 1;

    let mut shift = (w_begin - q_start).max(0);
    if al.t_start as i64 + shift > al.t_end as i64 {
        return None;
    }

    let mut t_begin = al.t_start as i64;
    let mut t_end = al.t_end as i64;
    let mut length = window.len() as i64;

    // An alignment strictly inside the window fails the overlap test above, so at
    // most one side of the window can fall outside the alignment.
    if w_begin < q_start {
        shift = 0;
        t_begin = (t_begin - (q_start - w_begin)).max(0);
        length = length.min((t_begin + length - 1).min(t_last) - t_begin + 1);
    } else if q_end < w_end {
        t_end = (t_end + (w_end - q_end)).min(t_last);
        length = length.min(t_end - (t_end - length + 1).max(0) + 1);
    }

    if t_begin > t_end || length <= 0 {
        return None;
    }

    Some(TargetSlice {
        begin: t_begin as usize,
        end: t_end as usize,
        shift: shift as usize,
        length: length as usize,
    })
}

/// Up to `len` bytes of `s` starting at `start`, empty when out of range
fn clamp_slice(s: &str, start: usize, len: usize) -> &str {
    if start >= s.len() {
        return "";
    }
    let end = start.saturating_add(len).min(s.len());
    s.get(start..end).unwrap_or("")
}

/// Build the pile for one window.
///
/// The template is the query read named by the first alignment. Index 0 of the
/// pile is the literal template slice; each overlapping alignment then adds its
/// remapped supporting slice, in input order, if it holds at least `mer_size`
/// bases. Returns an empty pile when the window reaches past the stored template.
#[must_use]
pub fn extract_pile(
    alignments: &[Alignment],
    window: Window,
    store: &SequenceStore,
    mer_size: usize,
) -> Pile {
    let Some(first) = alignments.first() else {
        return Pile::new();
    };
    let Some(template) = store.get(&first.q_name) else {
        warn!("Template read '{}' is missing from the sequence store", first.q_name);
        return Pile::new();
    };
    if window.end >= template.len() {
        debug!(
            "Window {} exceeds template '{}' of length {}",
            window,
            first.q_name,
            template.len()
        );
        return Pile::new();
    }

    let mut pile = vec![clamp_slice(template, window.begin, window.len()).to_string()];

    for al in alignments {
        let Some(slice) = remap_to_target(al, window) else {
            continue;
        };
        let Some(support) = store.get(&al.t_name) else {
            warn!("Supporting read '{}' is missing from the sequence store", al.t_name);
            continue;
        };

        let span = clamp_slice(support, slice.begin, slice.end - slice.begin + 1);
        let oriented = if al.strand.is_reverse() {
            reverse_complement(span)
        } else {
            span.to_string()
        };

        let piece = clamp_slice(&oriented, slice.shift, slice.length);
        if piece.len() >= mer_size {
            pile.push(piece.to_string());
        }
    }

    pile
}
