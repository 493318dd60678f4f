//! Historical post performance models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::emotion::Emotion;
use crate::platform::Platform;

/// One published post and its observed metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PostRecord {
    pub content_id: String,
    pub platform: Platform,
    pub emotion: Emotion,

    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
}

impl PostRecord {
    /// Weighted interaction rate. Comments and shares count more than
    /// likes; a post with no views has rate zero.
    pub fn engagement_rate(&self) -> f64 {
        if self.views == 0 {
            return 0.0;
        }
        let interactions = self.likes + self.comments * 2 + self.shares * 3;
        interactions as f64 / self.views as f64
    }
}

/// Aggregate performance of one emotion label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmotionHistory {
    #[serde(default)]
    pub post_count: u64,
    #[serde(default)]
    pub avg_engagement: f64,
    #[serde(default)]
    pub avg_views: f64,
    #[serde(default)]
    pub max_views: u64,
}

/// Per-emotion performance history consumed by the scheduling brain.
///
/// An emotion with no history earns no bonus and no caution; this is
/// never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistorySummary {
    #[serde(default)]
    pub emotion_performance: HashMap<Emotion, EmotionHistory>,
}

impl HistorySummary {
    /// Build a summary from bare average engagement rates. Used for
    /// test fixtures and fallback assumptions when no ledger exists.
    pub fn from_avg_engagement(rates: &[(Emotion, f64)]) -> Self {
        let emotion_performance = rates
            .iter()
            .map(|(emotion, rate)| {
                (
                    *emotion,
                    EmotionHistory {
                        avg_engagement: *rate,
                        ..Default::default()
                    },
                )
            })
            .collect();
        Self {
            emotion_performance,
        }
    }

    pub fn stats(&self, emotion: Emotion) -> Option<&EmotionHistory> {
        self.emotion_performance.get(&emotion)
    }

    /// Average engagement for an emotion, zero when unknown.
    pub fn avg_engagement(&self, emotion: Emotion) -> f64 {
        self.stats(emotion).map(|h| h.avg_engagement).unwrap_or(0.0)
    }

    /// Whether this emotion's recorded average falls below `threshold`.
    /// An emotion with no recorded posts is not underperforming.
    pub fn is_underperforming(&self, emotion: Emotion, threshold: f64) -> bool {
        self.stats(emotion)
            .map(|h| h.avg_engagement < threshold)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_rate_weights() {
        let post = PostRecord {
            content_id: "clip_1".to_string(),
            platform: Platform::InstagramReel,
            emotion: Emotion::Akad,
            views: 1000,
            likes: 50,
            comments: 10,
            shares: 5,
        };
        // (50 + 20 + 15) / 1000
        assert!((post.engagement_rate() - 0.085).abs() < 1e-9);
    }

    #[test]
    fn test_engagement_rate_guards_zero_views() {
        let post = PostRecord {
            content_id: "clip_2".to_string(),
            platform: Platform::Facebook,
            emotion: Emotion::Dard,
            views: 0,
            likes: 100,
            comments: 0,
            shares: 0,
        };
        assert_eq!(post.engagement_rate(), 0.0);
    }

    #[test]
    fn test_underperforming_requires_history() {
        let summary = HistorySummary::from_avg_engagement(&[
            (Emotion::Akad, 0.08),
            (Emotion::Pyaar, 0.01),
        ]);
        assert!(!summary.is_underperforming(Emotion::Akad, 0.02));
        assert!(summary.is_underperforming(Emotion::Pyaar, 0.02));
        // No history at all: no caution
        assert!(!summary.is_underperforming(Emotion::Dard, 0.02));
        assert_eq!(summary.avg_engagement(Emotion::Dard), 0.0);
    }
}
