//! Interval overlap math used to deduplicate clip candidates.

use hookline_models::ClipCandidate;

/// Seconds two windows share, zero when disjoint.
pub(crate) fn overlap_duration(a: (f64, f64), b: (f64, f64)) -> f64 {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    (end - start).max(0.0)
}

/// Whether the shared span exceeds `max_ratio` of the shorter window.
pub(crate) fn significant_overlap(a: (f64, f64), b: (f64, f64), max_ratio: f64) -> bool {
    let shorter = (a.1 - a.0).min(b.1 - b.0);
    overlap_duration(a, b) > shorter * max_ratio
}

/// Keep the highest-scoring candidate of every overlapping pair.
///
/// Candidates are ranked by score first (stable, so equal scores keep
/// their strategy-priority order) and accepted greedily against the
/// already-kept set.
pub(crate) fn dedup_by_overlap(
    mut clips: Vec<ClipCandidate>,
    max_ratio: f64,
) -> Vec<ClipCandidate> {
    clips.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut kept: Vec<ClipCandidate> = Vec::with_capacity(clips.len());
    for clip in clips {
        let window = (clip.start_time, clip.end_time);
        let clashes = kept
            .iter()
            .any(|k| significant_overlap(window, (k.start_time, k.end_time), max_ratio));
        if !clashes {
            kept.push(clip);
        }
    }
    kept
}
