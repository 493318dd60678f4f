//! Poster frame models and frame-quality measurements.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// Laplacian-variance cap used when normalizing sharpness.
/// Variance above this reads as fully sharp.
const SHARPNESS_VARIANCE_CAP: f64 = 500.0;

/// Normalize a raw Laplacian variance into a [0, 1] sharpness score.
pub fn sharpness_from_laplacian(variance: f64) -> f64 {
    (variance.max(0.0) / SHARPNESS_VARIANCE_CAP).min(1.0)
}

/// Summary of a frame's pixel-intensity histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LightingSummary {
    /// Fraction of intensity mass in the darkest buckets
    pub dark_fraction: f64,

    /// Fraction of intensity mass in the brightest buckets
    pub bright_fraction: f64,
}

impl LightingSummary {
    /// Lower intensity buckets counted as "dark" (of 256).
    const DARK_BUCKETS: usize = 50;
    /// First bucket counted as "bright" (of 256).
    const BRIGHT_FROM: usize = 200;
    /// A frame is poorly lit when either fraction exceeds this.
    const SKEW_LIMIT: f64 = 0.6;

    pub fn new(dark_fraction: f64, bright_fraction: f64) -> Self {
        Self {
            dark_fraction,
            bright_fraction,
        }
    }

    /// Summarize a 256-bucket intensity histogram.
    ///
    /// Returns `None` for an empty histogram; such a frame carries no
    /// usable lighting information.
    pub fn from_histogram(buckets: &[u64]) -> Option<Self> {
        let total: u64 = buckets.iter().sum();
        if total == 0 {
            return None;
        }
        let dark: u64 = buckets.iter().take(Self::DARK_BUCKETS).sum();
        let bright: u64 = buckets.iter().skip(Self::BRIGHT_FROM).sum();
        Some(Self {
            dark_fraction: dark as f64 / total as f64,
            bright_fraction: bright as f64 / total as f64,
        })
    }

    /// Two-level lighting classifier: a heavily skewed histogram reads as
    /// poorly lit, everything else as balanced.
    pub fn score(&self) -> f64 {
        if self.dark_fraction > Self::SKEW_LIMIT || self.bright_fraction > Self::SKEW_LIMIT {
            0.4
        } else {
            0.8
        }
    }
}

/// Externally measured frame properties at one timestamp.
///
/// Produced by the frame-measurement capability; the selector turns this
/// into a quality score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameMeasurement {
    /// Whether a face was detected in the frame
    pub face_detected: bool,

    /// Histogram summary for the lighting classifier
    pub lighting: LightingSummary,

    /// Normalized sharpness in [0, 1], higher is sharper
    pub sharpness_score: f64,
}

/// A measurement tied to a timestamp, the row format of an external
/// measurement file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimedMeasurement {
    /// Timestamp in seconds
    pub timestamp: f64,

    #[serde(flatten)]
    pub measurement: FrameMeasurement,
}

/// An accepted poster-frame candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameCandidate {
    /// Timestamp in seconds
    pub timestamp: f64,

    /// Weighted quality score in [0, 1]
    pub quality_score: f64,

    /// Whether a face was detected
    pub face_detected: bool,

    /// Lighting classifier output
    pub lighting_score: f64,

    /// Emotion of the anchor that proposed this frame
    pub emotion_match: Emotion,

    /// Text to overlay on the rendered poster, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_text: Option<String>,
}
