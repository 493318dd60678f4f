//! The scheduling brain: rank clip candidates, filter out weak ones,
//! and lay the survivors onto a multi-day posting calendar.

mod calendar;
mod scoring;

use std::collections::HashMap;

use chrono::{Days, NaiveDateTime};
use hookline_models::{
    Action, ClipCandidate, Emotion, HistorySummary, Platform, StopEntry, StrategyPlan, TrendSignal,
};
use tracing::info;

use calendar::ActiveClip;

/// Clips predicted below this are excluded from posting.
pub const SKIP_SCORE_FLOOR: f64 = 0.4;
/// An emotion whose recorded engagement sits below this gets a caution.
pub const CAUTION_ENGAGEMENT_FLOOR: f64 = 0.02;

/// Rank candidates and lay out a posting calendar over `duration_days`,
/// starting the day after `now`.
///
/// Low-scoring clips go to the stop list with action `stop` and are not
/// scheduled. Clips whose emotion has been underperforming stay on the
/// calendar at demoted priority with a caution note in their reason, and
/// are mirrored to the stop list with action `hold` so a human can pull
/// them before posting.
pub fn decide(
    clips: &[ClipCandidate],
    trends: &[TrendSignal],
    history: &HistorySummary,
    duration_days: u32,
    now: NaiveDateTime,
) -> StrategyPlan {
    let ranked = scoring::rank_clips(clips, trends, history);

    let mut active: Vec<ActiveClip> = Vec::new();
    let mut stop_list: Vec<StopEntry> = Vec::new();
    for clip in ranked {
        let emotion = clip.emotion.unwrap_or(Emotion::General);
        let content_id = clip.clip_id.clone().unwrap_or_default();
        let predicted = clip.predicted_score.unwrap_or(clip.score);

        if predicted < SKIP_SCORE_FLOOR {
            stop_list.push(StopEntry {
                content_id,
                reason: "Low viral potential score (< 0.4)".to_string(),
                action: Action::Stop,
            });
            continue;
        }

        let caution = history
            .is_underperforming(emotion, CAUTION_ENGAGEMENT_FLOOR)
            .then(|| format!("'{emotion}' consistently underperforms"));
        if let Some(note) = &caution {
            stop_list.push(StopEntry {
                content_id,
                reason: note.clone(),
                action: Action::Hold,
            });
        }
        active.push(ActiveClip { clip, caution });
    }

    let start_date = now.date() + Days::new(1);
    let mut scheduled = calendar::build_schedule(&active, duration_days, start_date);
    scheduled.sort_by_key(|(when, _)| *when);

    let commands = calendar::build_commands(&scheduled);
    let guidance = calendar::build_guidance(&active);

    let decisions: Vec<_> = scheduled.into_iter().map(|(_, decision)| decision).collect();
    let mut platform_distribution: HashMap<Platform, u32> = HashMap::new();
    for decision in &decisions {
        *platform_distribution.entry(decision.platform).or_insert(0) += 1;
    }

    info!(
        scheduled = decisions.len(),
        stopped = stop_list.len(),
        "Strategy plan assembled"
    );

    StrategyPlan {
        calendar: decisions,
        platform_distribution,
        stop_list,
        commands,
        guidance,
    }
}
