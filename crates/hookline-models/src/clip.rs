//! Clip candidate models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::platform::Platform;

/// Every clip in this pipeline is cut for vertical short-form.
pub const CLIP_ASPECT_RATIO: &str = "9:16";

fn default_aspect_ratio() -> String {
    CLIP_ASPECT_RATIO.to_string()
}

/// A candidate clip proposed by one of the generator strategies.
///
/// Produced by the clip candidate generator; the scheduling brain extends
/// its own copy with `clip_id`, `emotion` and `predicted_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipCandidate {
    /// Window start in seconds
    pub start_time: f64,

    /// Window end in seconds (always greater than start)
    pub end_time: f64,

    /// Display text used to justify the clip
    pub hook_line: String,

    /// Audience label derived from the anchor's emotions
    pub target_audience: String,

    /// Which strategy and anchor produced this candidate
    pub viral_reason: String,

    /// Assigned by the scheduler from clip duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Fixed vertical aspect for this pipeline
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,

    /// Initial ranking score in [0, 1]
    pub score: f64,

    /// Emotions inherited from the anchor segment, if it had any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emotions: Vec<Emotion>,

    /// Stable id, assigned by the scheduling brain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_id: Option<String>,

    /// Dominant emotion, resolved by the scheduling brain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,

    /// Final ranking score, computed by the scheduling brain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_score: Option<f64>,
}

impl ClipCandidate {
    /// Create a candidate with the pipeline's fixed aspect ratio.
    pub fn new(start_time: f64, end_time: f64, hook_line: impl Into<String>, score: f64) -> Self {
        Self {
            start_time,
            end_time,
            hook_line: hook_line.into(),
            target_audience: Emotion::General.target_audience().to_string(),
            viral_reason: String::new(),
            platform: None,
            aspect_ratio: default_aspect_ratio(),
            score,
            emotions: Vec::new(),
            clip_id: None,
            emotion: None,
            predicted_score: None,
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = audience.into();
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.viral_reason = reason.into();
        self
    }

    pub fn with_emotions(mut self, emotions: Vec<Emotion>) -> Self {
        self.emotions = emotions;
        self
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// The clip's first tagged emotion, if any.
    pub fn first_emotion(&self) -> Option<Emotion> {
        self.emotions.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let clip = ClipCandidate::new(10.0, 28.0, "theke pe khade", 0.85);
        assert_eq!(clip.aspect_ratio, CLIP_ASPECT_RATIO);
        assert_eq!(clip.target_audience, "general_haryanvi");
        assert_eq!(clip.platform, None);
        assert_eq!(clip.duration(), 18.0);
    }

    #[test]
    fn test_builder_chain() {
        let clip = ClipCandidate::new(0.0, 20.0, "hook", 0.8)
            .with_audience(Emotion::Akad.target_audience())
            .with_reason("Hook: 'hook'")
            .with_emotions(vec![Emotion::Akad]);
        assert_eq!(clip.target_audience, "ladke_18_30_gaon_shehar");
        assert_eq!(clip.first_emotion(), Some(Emotion::Akad));
    }

    #[test]
    fn test_optional_fields_not_serialized() {
        let clip = ClipCandidate::new(0.0, 10.0, "hook", 0.5);
        let json = serde_json::to_string(&clip).unwrap();
        assert!(!json.contains("clip_id"));
        assert!(!json.contains("predicted_score"));
        assert!(!json.contains("\"platform\""));
        assert!(!json.contains("\"emotions\""));
    }
}
