//! Trend signal models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kinds of trend signal the analyzer can produce.
///
/// Only `ContentFormat` signals affect clip ranking; the rest flow
/// through to the strategy artifact for human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrendKind {
    ContentFormat,
    OptimalDuration,
    HookImportance,
    PostingTime,
    #[serde(other)]
    Other,
}

/// One observed trend with a confidence estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrendSignal {
    pub trend_type: TrendKind,

    /// What was observed, in plain language
    pub description: String,

    /// How sure the analyzer is, in [0, 1]
    #[serde(default)]
    pub confidence: f64,

    /// What to do about it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_recommendation: Option<String>,

    /// Where the observation came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

impl TrendSignal {
    /// A content-format signal, the only kind the scheduling brain
    /// consumes directly.
    pub fn content_format(description: impl Into<String>) -> Self {
        Self {
            trend_type: TrendKind::ContentFormat,
            description: description.into(),
            confidence: 0.8,
            action_recommendation: None,
            data_source: None,
        }
    }
}

/// One observed competitor post, the input row of the trend analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompetitorPost {
    /// Post format, "reel" for short vertical video
    #[serde(rename = "type")]
    pub post_type: String,

    /// Video duration in seconds
    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub likes: u64,

    #[serde(default)]
    pub comments: u64,

    /// Whether the post leads with its hook inside the first two seconds
    #[serde(default)]
    pub hook_in_first_2s: bool,

    /// Observed engagement rate in [0, 1]
    #[serde(default)]
    pub engagement_rate: f64,
}

impl CompetitorPost {
    /// A reel-format observation with the fields the analyzer reads.
    pub fn reel(duration: f64, engagement_rate: f64, hook_in_first_2s: bool) -> Self {
        Self {
            post_type: "reel".to_string(),
            duration,
            likes: 0,
            comments: 0,
            hook_in_first_2s,
            engagement_rate,
        }
    }
}

/// Full output of the trend analyzer: signals plus a digest.
///
/// This is the `trends.json` artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TrendReport {
    #[serde(default)]
    pub insights: Vec<TrendSignal>,

    #[serde(default)]
    pub weekly_summary: String,

    #[serde(default)]
    pub recommendations: Vec<String>,
}
