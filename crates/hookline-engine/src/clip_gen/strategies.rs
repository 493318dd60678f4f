//! The four clip proposal strategies.

use hookline_models::{ClipCandidate, Emotion, Segment};

const HOOK_POTENTIAL_FLOOR: f64 = 0.6;
const HOOK_LIMIT: usize = 5;
const HOOK_SPACING_SECS: f64 = 20.0;
/// Lead-in before the hook line so the cut does not clip its first word.
const HOOK_LEAD_IN_SECS: f64 = 0.5;
const HOOK_TAIL_SECS: f64 = 18.0;
/// Hard ceiling on hook-anchored clip length.
const MAX_HOOK_CLIP_SECS: f64 = 35.0;

const DROP_LIMIT: usize = 5;
const DROP_SPACING_SECS: f64 = 15.0;
const DROP_LEAD_IN_SECS: f64 = 5.0;
const DROP_TAIL_SECS: f64 = 20.0;
const DROP_SCORE: f64 = 0.8;
const DROP_FALLBACK_HOOK: &str = "DUNIYA DEKHEGI 🔥";

const CHORUS_LIMIT: usize = 3;
const CHORUS_SPACING_SECS: f64 = 10.0;
const CHORUS_TAIL_SECS: f64 = 25.0;
const CHORUS_SCORE: f64 = 0.7;

const AKAD_POTENTIAL_FLOOR: f64 = 0.8;
const AKAD_SPACING_SECS: f64 = 15.0;

/// Anchor timestamps already claimed by an earlier strategy.
///
/// Each strategy checks spacing against this set and claims the anchors
/// it uses, so later strategies spread their proposals across the song
/// instead of piling onto the same moments.
#[derive(Debug, Default)]
pub struct ClaimedAnchors {
    anchors: Vec<f64>,
}

impl ClaimedAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `t` lands within `min_spacing` seconds of a claimed anchor.
    pub fn is_too_close(&self, t: f64, min_spacing: f64) -> bool {
        self.anchors.iter().any(|a| (t - a).abs() < min_spacing)
    }

    pub fn claim(&mut self, t: f64) {
        self.anchors.push(t);
    }
}

/// First audience-mapped emotion wins; fallback-only lists read as general.
fn audience_for(emotions: &[Emotion]) -> &'static str {
    emotions
        .iter()
        .find(|e| !matches!(e, Emotion::Neutral | Emotion::General))
        .map(|e| e.target_audience())
        .unwrap_or_else(|| Emotion::General.target_audience())
}

/// Cut a clip window around a strong lyric line.
fn hook_clip(segment: &Segment) -> ClipCandidate {
    let start = (segment.start - HOOK_LEAD_IN_SECS).max(0.0);
    let end = (segment.end + HOOK_TAIL_SECS).min(start + MAX_HOOK_CLIP_SECS);
    let preview: String = segment.text.chars().take(20).collect();
    ClipCandidate::new(start, end, segment.text.clone(), segment.viral_potential)
        .with_audience(audience_for(&segment.emotions))
        .with_reason(format!("Hook: '{preview}'"))
        .with_emotions(segment.emotions.clone())
}

/// Strong lyric lines, best potential first.
pub(crate) fn hook_candidates(
    segments: &[Segment],
    claimed: &mut ClaimedAnchors,
) -> Vec<ClipCandidate> {
    let mut strong: Vec<&Segment> = segments
        .iter()
        .filter(|s| s.viral_potential > HOOK_POTENTIAL_FLOOR)
        .collect();
    strong.sort_by(|a, b| {
        b.viral_potential
            .partial_cmp(&a.viral_potential)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut clips = Vec::new();
    for segment in strong.into_iter().take(HOOK_LIMIT) {
        if claimed.is_too_close(segment.start, HOOK_SPACING_SECS) {
            continue;
        }
        clips.push(hook_clip(segment));
        claimed.claim(segment.start);
    }
    clips
}

/// Beat-drop moments. The hook line is borrowed from whichever segment
/// spans the drop, with a stock line when none does.
pub(crate) fn drop_candidates(
    drop_times: &[f64],
    segments: &[Segment],
    claimed: &mut ClaimedAnchors,
) -> Vec<ClipCandidate> {
    let mut clips = Vec::new();
    for &drop in drop_times.iter().take(DROP_LIMIT) {
        if claimed.is_too_close(drop, DROP_SPACING_SECS) {
            continue;
        }
        let hook_line = segments
            .iter()
            .find(|s| s.contains(drop))
            .map(|s| s.text.clone())
            .unwrap_or_else(|| DROP_FALLBACK_HOOK.to_string());
        let start = (drop - DROP_LEAD_IN_SECS).max(0.0);
        clips.push(
            ClipCandidate::new(start, drop + DROP_TAIL_SECS, hook_line, DROP_SCORE)
                .with_audience("party_youth")
                .with_reason("High energy beat drop moment"),
        );
        claimed.claim(drop);
    }
    clips
}

/// Chorus repeats, loopable by construction.
pub(crate) fn chorus_candidates(
    chorus_starts: &[f64],
    claimed: &mut ClaimedAnchors,
) -> Vec<ClipCandidate> {
    let mut clips = Vec::new();
    for &start in chorus_starts.iter().take(CHORUS_LIMIT) {
        if claimed.is_too_close(start, CHORUS_SPACING_SECS) {
            continue;
        }
        let begin = start.max(0.0);
        clips.push(
            ClipCandidate::new(begin, begin + CHORUS_TAIL_SECS, "CHORUS VIBE 🚀", CHORUS_SCORE)
                .with_audience("general")
                .with_reason("Catchy chorus loop"),
        );
        claimed.claim(start);
    }
    clips
}

/// Sweep for very strong akad lines the hook pass may have spaced out.
pub(crate) fn akad_candidates(
    segments: &[Segment],
    claimed: &mut ClaimedAnchors,
) -> Vec<ClipCandidate> {
    let mut clips = Vec::new();
    for segment in segments {
        if !segment.emotions.contains(&Emotion::Akad)
            || segment.viral_potential <= AKAD_POTENTIAL_FLOOR
        {
            continue;
        }
        if claimed.is_too_close(segment.start, AKAD_SPACING_SECS) {
            continue;
        }
        clips.push(hook_clip(segment));
        claimed.claim(segment.start);
    }
    clips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(start: f64, end: f64, text: &str, emotions: Vec<Emotion>, potential: f64) -> Segment {
        Segment {
            start,
            end,
            text: text.to_string(),
            emotions,
            viral_potential: potential,
        }
    }

    #[test]
    fn test_hook_window_math() {
        let seg = segment(10.0, 13.0, "theke pe khade bhai", vec![Emotion::Akad], 0.95);
        let mut claimed = ClaimedAnchors::new();
        let clips = hook_candidates(&[seg], &mut claimed);
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].start_time, 9.5);
        assert_eq!(clips[0].end_time, 31.0);
        assert_eq!(clips[0].target_audience, "ladke_18_30_gaon_shehar");
        assert_eq!(clips[0].viral_reason, "Hook: 'theke pe khade bhai'");
    }

    #[test]
    fn test_hook_window_capped() {
        // A long segment near the song start gets the hard length cap.
        let seg = segment(0.0, 30.0, "lambi line", vec![Emotion::Neutral], 0.9);
        let mut claimed = ClaimedAnchors::new();
        let clips = hook_candidates(&[seg], &mut claimed);
        assert_eq!(clips[0].start_time, 0.0);
        assert_eq!(clips[0].end_time, 35.0);
    }

    #[test]
    fn test_hooks_ranked_and_spaced() {
        let segments = vec![
            segment(0.0, 3.0, "theek thaak line", vec![Emotion::Neutral], 0.65),
            segment(10.0, 13.0, "sabse tagdi line", vec![Emotion::Akad], 0.95),
            segment(15.0, 18.0, "paas wali line", vec![Emotion::Akad], 0.9),
        ];
        let mut claimed = ClaimedAnchors::new();
        let clips = hook_candidates(&segments, &mut claimed);
        // The 15s anchor falls inside the 20s spacing of the 10s anchor.
        assert_eq!(clips.len(), 2);
        assert_eq!(clips[0].hook_line, "sabse tagdi line");
        assert_eq!(clips[1].hook_line, "theek thaak line");
    }

    #[test]
    fn test_drop_takes_spanning_segment_text() {
        let segments = vec![segment(38.0, 44.0, "beat pe naacho", vec![Emotion::Mauj], 0.7)];
        let mut claimed = ClaimedAnchors::new();
        let clips = drop_candidates(&[40.0, 120.0], &segments, &mut claimed);
        assert_eq!(clips.len(), 2);
        assert_eq!(clips[0].hook_line, "beat pe naacho");
        assert_eq!(clips[0].start_time, 35.0);
        assert_eq!(clips[0].end_time, 60.0);
        assert_eq!(clips[1].hook_line, DROP_FALLBACK_HOOK);
    }

    #[test]
    fn test_drop_respects_claimed_anchor() {
        let mut claimed = ClaimedAnchors::new();
        claimed.claim(30.0);
        let clips = drop_candidates(&[40.0], &[], &mut claimed);
        assert!(clips.is_empty());
    }

    #[test]
    fn test_chorus_candidates_limited() {
        let mut claimed = ClaimedAnchors::new();
        let clips = chorus_candidates(&[30.0, 75.0, 120.0, 165.0], &mut claimed);
        assert_eq!(clips.len(), 3);
        assert_eq!(clips[0].hook_line, "CHORUS VIBE 🚀");
        assert_eq!(clips[0].end_time - clips[0].start_time, 25.0);
    }

    #[test]
    fn test_akad_sweep_floor() {
        let segments = vec![
            segment(100.0, 103.0, "attitude wali", vec![Emotion::Akad], 0.8),
            segment(200.0, 203.0, "jaat ka jalwa", vec![Emotion::Akad], 0.85),
        ];
        let mut claimed = ClaimedAnchors::new();
        let clips = akad_candidates(&segments, &mut claimed);
        // The 0.8 line sits on the floor and is excluded, the cut is strict.
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].hook_line, "jaat ka jalwa");
    }
}
