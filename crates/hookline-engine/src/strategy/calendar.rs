//! Calendar assembly: day slots, the command digest, and guidance.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use hookline_models::{Action, ClipCandidate, ContentDecision, Emotion, Platform};

/// Fallback slots when the emotion has no fixed publishing time: the
/// first post of a day goes midday, later ones to early evening.
const FIRST_SLOT: (u32, u32) = (12, 0);
const LATER_SLOT: (u32, u32) = (18, 0);

/// How many upcoming decisions the command digest covers.
const COMMAND_LIMIT: usize = 7;

/// A clip admitted to scheduling, with the caution note from the
/// history check when its emotion has been underperforming.
pub(crate) struct ActiveClip {
    pub clip: ClipCandidate,
    pub caution: Option<String>,
}

/// Spread active clips over the calendar window, filling days in rank
/// order. Leftover clips beyond `days * clips_per_day` stay unscheduled.
pub(crate) fn build_schedule(
    active: &[ActiveClip],
    duration_days: u32,
    start_date: NaiveDate,
) -> Vec<(NaiveDateTime, ContentDecision)> {
    if active.is_empty() || duration_days == 0 {
        return Vec::new();
    }

    let clips_per_day = (active.len() / duration_days as usize).max(1);
    let mut pool = active.iter();
    let mut scheduled = Vec::new();

    for day in 0..duration_days {
        let date = start_date + Days::new(u64::from(day));
        let day_clips: Vec<&ActiveClip> = pool.by_ref().take(clips_per_day).collect();
        if day_clips.is_empty() {
            break;
        }
        for (position, entry) in day_clips.into_iter().enumerate() {
            scheduled.push(decision_for(entry, date, position));
        }
    }
    scheduled
}

fn slot_for(emotion: Emotion, position: usize) -> NaiveTime {
    emotion.fixed_time_slot().unwrap_or_else(|| {
        let (hour, minute) = if position == 0 { FIRST_SLOT } else { LATER_SLOT };
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
    })
}

fn decision_for(
    entry: &ActiveClip,
    date: NaiveDate,
    position: usize,
) -> (NaiveDateTime, ContentDecision) {
    let clip = &entry.clip;
    let emotion = clip.emotion.unwrap_or(Emotion::General);
    let slot = slot_for(emotion, position);
    let when = NaiveDateTime::new(date, slot);
    let predicted = clip.predicted_score.unwrap_or(clip.score);

    let mut reason = format!(
        "High score ({:.2}) & {} fit for {}",
        predicted,
        emotion,
        slot.format("%H:%M")
    );
    let mut priority = if predicted > 0.8 { 1 } else { 2 };
    if let Some(note) = &entry.caution {
        reason = format!("{reason} [caution: {note}]");
        priority = 2;
    }

    let content_id = clip
        .clip_id
        .clone()
        .unwrap_or_else(|| format!("clip_{}_{}", clip.start_time as i64, emotion));

    let decision = ContentDecision {
        action: Action::Post,
        content_id,
        platform: Platform::for_duration(clip.duration()),
        scheduled_time: when.format("%Y-%m-%d %H:%M").to_string(),
        reason,
        priority,
        emotion,
        predicted_score: predicted,
    };
    (when, decision)
}

/// Short imperative digest of the next few decisions, for humans.
pub(crate) fn build_commands(scheduled: &[(NaiveDateTime, ContentDecision)]) -> Vec<String> {
    scheduled
        .iter()
        .take(COMMAND_LIMIT)
        .map(|(when, decision)| {
            let mut command = format!(
                "[{}] {}: {} pe {} post karo",
                when.format("%d %b"),
                decision.content_id,
                decision.platform,
                when.format("%I:%M %p")
            );
            match decision.emotion {
                Emotion::Akad => command.push_str(" (akad content = evening rush)"),
                Emotion::Dard => command.push_str(" (sad content = morning vibe)"),
                _ => {}
            }
            command
        })
        .collect()
}

/// One-line plan summary naming the dominant emotion.
pub(crate) fn build_guidance(active: &[ActiveClip]) -> String {
    let mut counts: Vec<(Emotion, usize)> = Vec::new();
    for entry in active {
        let emotion = entry.clip.emotion.unwrap_or(Emotion::General);
        if let Some(slot) = counts.iter_mut().find(|(e, _)| *e == emotion) {
            slot.1 += 1;
        } else {
            counts.push((emotion, 1));
        }
    }

    let mut remaining = counts.into_iter();
    let Some(mut dominant) = remaining.next() else {
        return "Content khatam! Naya banao.".to_string();
    };
    // Ties keep the earlier emotion.
    for entry in remaining {
        if entry.1 > dominant.1 {
            dominant = entry;
        }
    }

    format!(
        "Total {} clips ready. '{}' content dominant hai. Schedule follow karo.",
        active.len(),
        dominant.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(start: f64, end: f64, emotion: Emotion, predicted: f64) -> ActiveClip {
        let mut clip = ClipCandidate::new(start, end, "hook", predicted);
        clip.emotion = Some(emotion);
        clip.predicted_score = Some(predicted);
        clip.clip_id = Some(format!("clip_{}_{}", start as i64, emotion));
        ActiveClip {
            clip,
            caution: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_slots_override_position() {
        let clips = vec![
            active(10.0, 30.0, Emotion::Dard, 0.7),
            active(50.0, 70.0, Emotion::Akad, 0.9),
            active(90.0, 110.0, Emotion::Mauj, 0.6),
        ];
        let scheduled = build_schedule(&clips, 1, date(2026, 9, 1));
        assert_eq!(scheduled.len(), 3);
        assert_eq!(scheduled[0].1.scheduled_time, "2026-09-01 07:00");
        assert_eq!(scheduled[1].1.scheduled_time, "2026-09-01 19:00");
        // Third in its day, so the later fallback slot.
        assert_eq!(scheduled[2].1.scheduled_time, "2026-09-01 18:00");
    }

    #[test]
    fn test_first_position_gets_midday_slot() {
        let clips = vec![active(10.0, 30.0, Emotion::Mauj, 0.7)];
        let scheduled = build_schedule(&clips, 7, date(2026, 9, 1));
        assert_eq!(scheduled[0].1.scheduled_time, "2026-09-01 12:00");
    }

    #[test]
    fn test_one_clip_per_day_when_pool_small() {
        let clips = vec![
            active(10.0, 30.0, Emotion::Mauj, 0.7),
            active(50.0, 70.0, Emotion::Pyaar, 0.6),
        ];
        let scheduled = build_schedule(&clips, 7, date(2026, 9, 1));
        assert_eq!(scheduled.len(), 2);
        assert_eq!(scheduled[0].1.scheduled_time, "2026-09-01 12:00");
        assert_eq!(scheduled[1].1.scheduled_time, "2026-09-02 12:00");
    }

    #[test]
    fn test_priority_from_predicted_score() {
        let clips = vec![
            active(10.0, 30.0, Emotion::Mauj, 0.85),
            active(50.0, 70.0, Emotion::Pyaar, 0.8),
        ];
        let scheduled = build_schedule(&clips, 2, date(2026, 9, 1));
        assert_eq!(scheduled[0].1.priority, 1);
        // Exactly 0.8 is normal priority, the cut is strict.
        assert_eq!(scheduled[1].1.priority, 2);
    }

    #[test]
    fn test_caution_demotes_and_annotates() {
        let mut entry = active(10.0, 30.0, Emotion::Dard, 0.9);
        entry.caution = Some("'dard' consistently underperforms".to_string());
        let scheduled = build_schedule(&[entry], 1, date(2026, 9, 1));
        assert_eq!(scheduled[0].1.priority, 2);
        assert!(scheduled[0]
            .1
            .reason
            .contains("[caution: 'dard' consistently underperforms]"));
    }

    #[test]
    fn test_platform_from_duration() {
        let clips = vec![
            active(0.0, 12.0, Emotion::Mauj, 0.7),
            active(20.0, 50.0, Emotion::Pyaar, 0.7),
            active(60.0, 150.0, Emotion::GaonPride, 0.7),
        ];
        let scheduled = build_schedule(&clips, 1, date(2026, 9, 1));
        assert_eq!(scheduled[0].1.platform, Platform::InstagramReel);
        assert_eq!(scheduled[1].1.platform, Platform::YoutubeShorts);
        assert_eq!(scheduled[2].1.platform, Platform::Facebook);
    }

    #[test]
    fn test_command_digest_format() {
        let clips = vec![active(10.0, 30.0, Emotion::Akad, 0.9)];
        let scheduled = build_schedule(&clips, 1, date(2026, 9, 1));
        let commands = build_commands(&scheduled);
        assert_eq!(
            commands[0],
            "[01 Sep] clip_10_akad: youtube_shorts pe 07:00 PM post karo (akad content = evening rush)"
        );
    }

    #[test]
    fn test_guidance_dominant_emotion() {
        let clips = vec![
            active(0.0, 10.0, Emotion::Akad, 0.9),
            active(20.0, 30.0, Emotion::Akad, 0.8),
            active(40.0, 50.0, Emotion::Dard, 0.7),
        ];
        assert_eq!(
            build_guidance(&clips),
            "Total 3 clips ready. 'akad' content dominant hai. Schedule follow karo."
        );
        assert_eq!(build_guidance(&[]), "Content khatam! Naya banao.");
    }
}
