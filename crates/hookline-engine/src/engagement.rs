//! Post-performance ledger.

use std::collections::HashMap;

use hookline_models::{Emotion, EmotionHistory, HistorySummary, PostRecord};

/// Minimum posts of an emotion before its numbers justify a
/// reduce-frequency call.
const MIN_POSTS_FOR_VERDICT: u64 = 3;

/// Ledger of published posts and their observed metrics.
///
/// The ledger is the write side; [`HistorySummary`] is the read side the
/// scheduling brain consumes.
#[derive(Debug, Default)]
pub struct EngagementLedger {
    records: Vec<PostRecord>,
}

impl EngagementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<PostRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    /// Record a published post.
    pub fn record(&mut self, record: PostRecord) {
        self.records.push(record);
    }

    /// Update observed metrics for a post. Returns false when the id is
    /// unknown.
    pub fn update_metrics(
        &mut self,
        content_id: &str,
        views: u64,
        likes: u64,
        comments: u64,
        shares: u64,
    ) -> bool {
        let Some(record) = self
            .records
            .iter_mut()
            .find(|record| record.content_id == content_id)
        else {
            return false;
        };
        record.views = views;
        record.likes = likes;
        record.comments = comments;
        record.shares = shares;
        true
    }

    /// Aggregate per-emotion performance.
    pub fn report(&self) -> HistorySummary {
        let mut grouped: HashMap<Emotion, Vec<&PostRecord>> = HashMap::new();
        for record in &self.records {
            grouped.entry(record.emotion).or_default().push(record);
        }

        let emotion_performance = grouped
            .into_iter()
            .map(|(emotion, posts)| {
                let count = posts.len();
                let avg_engagement =
                    posts.iter().map(|p| p.engagement_rate()).sum::<f64>() / count as f64;
                let avg_views = posts.iter().map(|p| p.views as f64).sum::<f64>() / count as f64;
                let max_views = posts.iter().map(|p| p.views).max().unwrap_or(0);
                (
                    emotion,
                    EmotionHistory {
                        post_count: count as u64,
                        avg_engagement,
                        avg_views,
                        max_views,
                    },
                )
            })
            .collect();

        HistorySummary {
            emotion_performance,
        }
    }

    /// Plain-language calls from the aggregated numbers.
    pub fn recommendations(&self) -> Vec<String> {
        let summary = self.report();
        if summary.emotion_performance.is_empty() {
            return vec!["Not enough data yet. Post more!".to_string()];
        }

        // Walk labels in a fixed order so ties resolve the same way on
        // every run.
        let mut best: Option<(Emotion, &EmotionHistory)> = None;
        let mut worst: Option<(Emotion, &EmotionHistory)> = None;
        for &emotion in Emotion::ALL {
            let Some(stats) = summary.stats(emotion) else {
                continue;
            };
            if best.map_or(true, |(_, b)| stats.avg_engagement > b.avg_engagement) {
                best = Some((emotion, stats));
            }
            if worst.map_or(true, |(_, w)| stats.avg_engagement < w.avg_engagement) {
                worst = Some((emotion, stats));
            }
        }

        let mut recommendations = Vec::new();
        if let Some((emotion, stats)) = best {
            recommendations.push(format!(
                "Focus on '{}' content (Best Engagement: {:.1}%)",
                emotion,
                stats.avg_engagement * 100.0
            ));
        }
        if let Some((emotion, stats)) = worst {
            if stats.post_count > MIN_POSTS_FOR_VERDICT {
                recommendations.push(format!(
                    "Improve '{}' content or reduce frequency (Low Engagement: {:.1}%)",
                    emotion,
                    stats.avg_engagement * 100.0
                ));
            }
        }
        recommendations
    }
}
