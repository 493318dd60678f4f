//! Beat/onset analysis models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Beat and onset analysis supplied by the audio-analysis collaborator.
///
/// Read-only input; `chorus_times` is filled in by the pipeline from the
/// repeated-line detector when the collaborator did not provide it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BeatAnalysis {
    /// Tempo in beats per minute
    #[serde(default)]
    pub tempo: f64,

    /// Ordered beat timestamps in seconds
    #[serde(default)]
    pub beat_times: Vec<f64>,

    /// Ordered high-onset-energy timestamps in seconds
    #[serde(default, alias = "drop_timestamps")]
    pub drop_times: Vec<f64>,

    /// Ordered timestamps where a repeated line recurs
    #[serde(
        default,
        alias = "chorus_timestamps",
        skip_serializing_if = "Option::is_none"
    )]
    pub chorus_times: Option<Vec<f64>>,
}

impl BeatAnalysis {
    /// Chorus timestamps, empty when none were detected.
    pub fn chorus_starts(&self) -> &[f64] {
        self.chorus_times.as_deref().unwrap_or(&[])
    }

    /// Attach detected chorus timestamps.
    pub fn with_chorus_times(mut self, times: Vec<f64>) -> Self {
        self.chorus_times = Some(times);
        self
    }
}

/// The most-repeated transcript line, as found by the chorus detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChorusLine {
    /// Normalized (trimmed, lower-cased) line text
    pub text: String,

    /// How many times the line occurs
    pub count: usize,

    /// Start timestamps of every occurrence, in transcript order
    pub timestamps: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chorus_starts_default_empty() {
        let analysis = BeatAnalysis::default();
        assert!(analysis.chorus_starts().is_empty());

        let with_chorus = analysis.with_chorus_times(vec![30.0, 75.0]);
        assert_eq!(with_chorus.chorus_starts(), &[30.0, 75.0]);
    }

    #[test]
    fn test_accepts_legacy_field_names() {
        let json = r#"{
            "tempo": 140.0,
            "beat_times": [1.0, 2.0],
            "drop_timestamps": [10.0],
            "chorus_timestamps": [30.0]
        }"#;
        let analysis: BeatAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.drop_times, vec![10.0]);
        assert_eq!(analysis.chorus_starts(), &[30.0]);
    }
}
