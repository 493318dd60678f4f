//! Transcript segment models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// An untagged transcript line as supplied by the transcription collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RawSegment {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Transcribed line
    pub text: String,
}

impl RawSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Clamp negative timestamps to zero and reject segments that cannot
    /// anchor a clip.
    ///
    /// Returns `None` when the clamped segment has no positive duration;
    /// such segments are dropped silently at the boundary.
    pub fn sanitized(&self) -> Option<RawSegment> {
        let start = self.start.max(0.0);
        let end = self.end.max(0.0);
        if end <= start {
            return None;
        }
        Some(RawSegment {
            start,
            end,
            text: self.text.clone(),
        })
    }
}

/// A transcript line after emotion tagging.
///
/// Immutable once produced; the clip and frame components read it as a
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds (always greater than start)
    pub end: f64,

    /// Transcribed line
    pub text: String,

    /// Tagged emotions, in tagger match order. Never empty.
    pub emotions: Vec<Emotion>,

    /// Heuristic standalone-appeal score in [0, 1]
    pub viral_potential: f64,
}

impl Segment {
    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `t` falls inside this segment (inclusive on both ends).
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    /// The segment's dominant emotion.
    pub fn first_emotion(&self) -> Option<Emotion> {
        self.emotions.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_negative_timestamps() {
        let seg = RawSegment::new(-2.0, 3.0, "kuch bhi");
        let clean = seg.sanitized().unwrap();
        assert_eq!(clean.start, 0.0);
        assert_eq!(clean.end, 3.0);
    }

    #[test]
    fn test_sanitize_drops_zero_duration() {
        assert!(RawSegment::new(5.0, 5.0, "x").sanitized().is_none());
        assert!(RawSegment::new(5.0, 4.0, "x").sanitized().is_none());
        // Both clamped to zero leaves nothing to keep
        assert!(RawSegment::new(-3.0, -1.0, "x").sanitized().is_none());
    }

    #[test]
    fn test_segment_helpers() {
        let seg = Segment {
            start: 10.0,
            end: 12.0,
            text: "theke pe".to_string(),
            emotions: vec![Emotion::Akad, Emotion::Mauj],
            viral_potential: 0.85,
        };
        assert_eq!(seg.duration(), 2.0);
        assert!(seg.contains(10.0));
        assert!(seg.contains(11.5));
        assert!(!seg.contains(12.5));
        assert_eq!(seg.first_emotion(), Some(Emotion::Akad));
    }
}
