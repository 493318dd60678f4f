//! Trend analysis over observed competitor posts.

use hookline_models::{CompetitorPost, TrendKind, TrendReport, TrendSignal};
use tracing::debug;

/// Signals below this confidence stay out of the digest.
const CONFIDENCE_FLOOR: f64 = 0.7;
/// Share of observed reels that must lead with a hook before the hook
/// signal fires.
const HOOK_SUCCESS_SHARE: f64 = 0.6;
/// Engagement a hooked post must clear to count as a success.
const HOOK_ENGAGEMENT_FLOOR: f64 = 0.05;

/// Built-in observation set used when no competitor feed is supplied.
pub fn sample_competitor_posts() -> Vec<CompetitorPost> {
    vec![
        CompetitorPost::reel(12.0, 0.08, true),
        CompetitorPost::reel(8.0, 0.10, true),
    ]
}

/// Derive signals from competitor observations.
pub fn competitor_signals(posts: &[CompetitorPost]) -> Vec<TrendSignal> {
    let mut signals = Vec::new();

    let durations: Vec<f64> = posts
        .iter()
        .filter(|post| post.post_type == "reel")
        .map(|post| post.duration)
        .collect();
    if !durations.is_empty() {
        let avg = durations.iter().sum::<f64>() / durations.len() as f64;
        signals.push(TrendSignal {
            trend_type: TrendKind::OptimalDuration,
            description: format!("Top performers ka avg reel duration: {avg:.1} sec"),
            confidence: 0.85,
            action_recommendation: Some(format!(
                "Reels {} se {} sec ke beech rakho",
                avg as i64 - 2,
                avg as i64 + 2
            )),
            data_source: Some("competitor_analysis".to_string()),
        });
    }

    let hook_successes = posts
        .iter()
        .filter(|post| post.hook_in_first_2s && post.engagement_rate > HOOK_ENGAGEMENT_FLOOR)
        .count();
    if hook_successes as f64 > durations.len() as f64 * HOOK_SUCCESS_SHARE {
        signals.push(TrendSignal {
            trend_type: TrendKind::HookImportance,
            description: "First 2 sec mein hook wali reels 60%+ better perform karti hain"
                .to_string(),
            confidence: 0.9,
            action_recommendation: Some(
                "Har clip mein pehle 2 sec mein tagda line daalo".to_string(),
            ),
            data_source: Some("competitor_analysis".to_string()),
        });
    }

    signals
}

/// Fixed day-part observations that hold for this audience.
pub fn posting_time_signals() -> Vec<TrendSignal> {
    vec![
        TrendSignal {
            trend_type: TrendKind::PostingTime,
            description: "Sad gaane subah 6-9 AM best chalte hain".to_string(),
            confidence: 0.75,
            action_recommendation: Some("Dard wali reels morning mein post karo".to_string()),
            data_source: Some("timing_analysis".to_string()),
        },
        TrendSignal {
            trend_type: TrendKind::PostingTime,
            description: "Akad/Party reels evening 7-10 PM best".to_string(),
            confidence: 0.82,
            action_recommendation: Some("Akad wali reels sham ko post karo".to_string()),
            data_source: Some("timing_analysis".to_string()),
        },
    ]
}

/// Full trend analysis: competitor signals plus the fixed posting-time
/// observations, digested into a weekly summary and recommendations.
pub fn analyze(posts: &[CompetitorPost]) -> TrendReport {
    let mut insights = competitor_signals(posts);
    insights.extend(posting_time_signals());

    let confident: Vec<&TrendSignal> = insights
        .iter()
        .filter(|signal| signal.confidence > CONFIDENCE_FLOOR)
        .collect();

    let lines: Vec<String> = confident
        .iter()
        .map(|signal| format!("• {}", signal.description))
        .collect();
    let weekly_summary = format!("Is hafte ki findings:\n{}", lines.join("\n"));

    let recommendations: Vec<String> = confident
        .iter()
        .filter_map(|signal| signal.action_recommendation.clone())
        .collect();

    debug!(signals = insights.len(), "Trend analysis complete");
    TrendReport {
        insights,
        weekly_summary,
        recommendations,
    }
}
