//! Clip ranking: predicted score from base score, trends, and history.

use hookline_models::{ClipCandidate, Emotion, HistorySummary, TrendKind, TrendSignal};

/// Bonus when a content-format trend mentions the clip's emotion.
const TREND_BONUS: f64 = 0.15;
/// Bonus when the emotion's recorded engagement clears the floor.
const HISTORY_BONUS: f64 = 0.10;
const HISTORY_ENGAGEMENT_FLOOR: f64 = 0.05;
/// Bonus for durations inside the short-attention sweet spot.
const DURATION_BONUS: f64 = 0.10;
const OPTIMAL_DURATION_MIN_SECS: f64 = 6.0;
const OPTIMAL_DURATION_MAX_SECS: f64 = 8.0;

/// Resolve the clip's dominant emotion.
///
/// Tagged emotions win; otherwise the strategy reason is sniffed for a
/// label; otherwise the clip is treated as general content.
pub(crate) fn dominant_emotion(clip: &ClipCandidate) -> Emotion {
    if let Some(emotion) = clip.first_emotion() {
        return emotion;
    }
    let reason = clip.viral_reason.to_lowercase();
    if reason.contains("akad") {
        Emotion::Akad
    } else if reason.contains("sad") {
        Emotion::Dard
    } else {
        Emotion::General
    }
}

fn predicted_score(
    clip: &ClipCandidate,
    emotion: Emotion,
    trends: &[TrendSignal],
    history: &HistorySummary,
) -> f64 {
    let mut score = clip.score;

    let matches_trend = trends.iter().any(|signal| {
        signal.trend_type == TrendKind::ContentFormat
            && signal.description.to_lowercase().contains(emotion.as_str())
    });
    if matches_trend {
        score += TREND_BONUS;
    }

    if history.avg_engagement(emotion) > HISTORY_ENGAGEMENT_FLOOR {
        score += HISTORY_BONUS;
    }

    let duration = clip.duration();
    if (OPTIMAL_DURATION_MIN_SECS..=OPTIMAL_DURATION_MAX_SECS).contains(&duration) {
        score += DURATION_BONUS;
    }

    score.min(1.0)
}

/// Rank clips by predicted score, best first.
///
/// Each returned clip is a copy extended with its resolved emotion, the
/// final score, and a stable id when it arrived without one.
pub(crate) fn rank_clips(
    clips: &[ClipCandidate],
    trends: &[TrendSignal],
    history: &HistorySummary,
) -> Vec<ClipCandidate> {
    let mut ranked: Vec<ClipCandidate> = clips
        .iter()
        .map(|clip| {
            let emotion = dominant_emotion(clip);
            let mut extended = clip.clone();
            extended.emotion = Some(emotion);
            extended.predicted_score = Some(predicted_score(clip, emotion, trends, history));
            if extended.clip_id.is_none() {
                extended.clip_id = Some(format!("clip_{}_{}", clip.start_time as i64, emotion));
            }
            extended
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.predicted_score
            .unwrap_or(0.0)
            .partial_cmp(&a.predicted_score.unwrap_or(0.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(start: f64, end: f64, score: f64, emotions: Vec<Emotion>) -> ClipCandidate {
        ClipCandidate::new(start, end, "hook", score).with_emotions(emotions)
    }

    #[test]
    fn test_emotion_resolution_order() {
        let tagged = clip(0.0, 10.0, 0.5, vec![Emotion::Dard, Emotion::Pyaar]);
        assert_eq!(dominant_emotion(&tagged), Emotion::Dard);

        let from_reason = clip(0.0, 10.0, 0.5, vec![]).with_reason("Akad anthem moment");
        assert_eq!(dominant_emotion(&from_reason), Emotion::Akad);

        let bare = clip(0.0, 10.0, 0.5, vec![]);
        assert_eq!(dominant_emotion(&bare), Emotion::General);
    }

    #[test]
    fn test_trend_bonus_needs_content_format() {
        let subject = clip(0.0, 20.0, 0.5, vec![Emotion::Akad]);
        let history = HistorySummary::default();

        let format_trend = vec![TrendSignal::content_format("akad wali reels chal rahi hain")];
        let score = predicted_score(&subject, Emotion::Akad, &format_trend, &history);
        assert!((score - 0.65).abs() < 1e-9);

        // Same wording under a different signal kind earns nothing.
        let mut other = TrendSignal::content_format("akad wali reels chal rahi hain");
        other.trend_type = TrendKind::PostingTime;
        let score = predicted_score(&subject, Emotion::Akad, &[other], &history);
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_history_and_duration_bonuses() {
        let history = HistorySummary::from_avg_engagement(&[(Emotion::Akad, 0.08)]);
        // 7 seconds falls in the sweet spot.
        let subject = clip(0.0, 7.0, 0.5, vec![Emotion::Akad]);
        let score = predicted_score(&subject, Emotion::Akad, &[], &history);
        assert!((score - 0.7).abs() < 1e-9);

        // 8 seconds is still inside, the window is inclusive.
        let edge = clip(0.0, 8.0, 0.5, vec![Emotion::Akad]);
        let score = predicted_score(&edge, Emotion::Akad, &[], &history);
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_predicted_score_capped() {
        let history = HistorySummary::from_avg_engagement(&[(Emotion::Akad, 0.09)]);
        let trends = vec![TrendSignal::content_format("akad format")];
        let subject = clip(0.0, 7.0, 0.9, vec![Emotion::Akad]);
        let score = predicted_score(&subject, Emotion::Akad, &trends, &history);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_rank_assigns_ids_and_sorts() {
        let clips = vec![
            clip(30.0, 50.0, 0.5, vec![Emotion::Dard]),
            clip(10.0, 30.0, 0.9, vec![Emotion::Akad]),
        ];
        let ranked = rank_clips(&clips, &[], &HistorySummary::default());
        assert_eq!(ranked[0].clip_id.as_deref(), Some("clip_10_akad"));
        assert_eq!(ranked[0].emotion, Some(Emotion::Akad));
        assert_eq!(ranked[1].clip_id.as_deref(), Some("clip_30_dard"));
    }

    #[test]
    fn test_rank_keeps_existing_ids() {
        let mut preset = clip(10.0, 30.0, 0.9, vec![Emotion::Akad]);
        preset.clip_id = Some("clip_1".to_string());
        let ranked = rank_clips(&[preset], &[], &HistorySummary::default());
        assert_eq!(ranked[0].clip_id.as_deref(), Some("clip_1"));
    }
}
