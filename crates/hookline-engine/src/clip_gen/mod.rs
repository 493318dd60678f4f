//! Clip candidate generation.
//!
//! Four strategies propose windows in priority order: strong lyric hooks,
//! beat drops, chorus repeats, then a sweep for akad-heavy lines. Anchor
//! spacing is enforced across strategies through [`ClaimedAnchors`], and
//! a final overlap pass keeps the best of any overlapping pair.

mod overlap;
mod strategies;

use hookline_models::{BeatAnalysis, ClipCandidate, Segment};
use tracing::debug;

pub use strategies::ClaimedAnchors;

/// A candidate whose window shares more than this fraction of the shorter
/// window with an already-kept candidate is discarded.
pub const MAX_OVERLAP_RATIO: f64 = 0.4;

/// Generate deduplicated clip candidates, best score first.
pub fn generate_clips(segments: &[Segment], beats: &BeatAnalysis) -> Vec<ClipCandidate> {
    let mut claimed = ClaimedAnchors::new();
    let mut proposals = Vec::new();

    proposals.extend(strategies::hook_candidates(segments, &mut claimed));
    proposals.extend(strategies::drop_candidates(
        &beats.drop_times,
        segments,
        &mut claimed,
    ));
    proposals.extend(strategies::chorus_candidates(
        beats.chorus_starts(),
        &mut claimed,
    ));
    proposals.extend(strategies::akad_candidates(segments, &mut claimed));

    let proposed = proposals.len();
    let clips = overlap::dedup_by_overlap(proposals, MAX_OVERLAP_RATIO);
    debug!(proposed, kept = clips.len(), "Generated clip candidates");
    clips
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_models::Emotion;

    fn segment(start: f64, end: f64, text: &str, emotions: Vec<Emotion>, potential: f64) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
            emotions,
            viral_potential: potential,
        }
    }

    fn beats(drops: Vec<f64>, chorus: Option<Vec<f64>>) -> BeatAnalysis {
        BeatAnalysis {
            tempo: 140.0,
            beat_times: Vec::new(),
            drop_times: drops,
            chorus_times: chorus,
        }
    }

    #[test]
    fn test_empty_inputs_yield_no_clips() {
        assert!(generate_clips(&[], &BeatAnalysis::default()).is_empty());
    }

    #[test]
    fn test_output_sorted_by_score() {
        let segments = vec![
            segment(5.0, 8.0, "theke pe khade bhai", vec![Emotion::Akad], 0.95),
            segment(100.0, 103.0, "thodi halki line", vec![Emotion::Neutral], 0.65),
        ];
        let clips = generate_clips(&segments, &beats(vec![200.0], Some(vec![300.0])));
        assert!(clips.len() >= 3);
        for pair in clips.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(clips[0].hook_line, "theke pe khade bhai");
    }

    #[test]
    fn test_no_significant_overlaps_survive() {
        let segments = vec![
            segment(10.0, 13.0, "tagdi line bhai", vec![Emotion::Akad], 0.95),
            segment(12.0, 15.0, "doosri tagdi line", vec![Emotion::Akad], 0.92),
            segment(60.0, 63.0, "gaam ki baat", vec![Emotion::GaonPride], 0.8),
        ];
        let clips = generate_clips(&segments, &beats(vec![11.0, 90.0], Some(vec![61.0])));
        for (i, a) in clips.iter().enumerate() {
            for b in clips.iter().skip(i + 1) {
                let shared = (a.end_time.min(b.end_time) - a.start_time.max(b.start_time)).max(0.0);
                let shorter = a.duration().min(b.duration());
                assert!(
                    shared <= shorter * MAX_OVERLAP_RATIO + 1e-9,
                    "clips {:?} and {:?} overlap too much",
                    (a.start_time, a.end_time),
                    (b.start_time, b.end_time)
                );
            }
        }
    }

    #[test]
    fn test_drop_near_hook_anchor_skipped() {
        let segments = vec![segment(10.0, 13.0, "tagdi line bhai", vec![Emotion::Akad], 0.95)];
        // 20s drop sits within the 15s drop spacing of the claimed 10s hook.
        let clips = generate_clips(&segments, &beats(vec![20.0], None));
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].viral_reason, "Hook: 'tagdi line bhai'");
    }
}
