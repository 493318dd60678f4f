//! Poster-frame selection.
//!
//! Probes candidate timestamps (strong lyric starts and beat drops),
//! scores each measured frame, and keeps the best-scoring frames with a
//! minimum gap between them.

use hookline_models::{
    BeatAnalysis, Emotion, FrameCandidate, FrameMeasurement, LightingSummary, Segment,
    TimedMeasurement,
};
use tracing::debug;

/// Minimum weighted quality for a frame to be kept. The cut is strict.
pub const QUALITY_THRESHOLD: f64 = 0.6;

/// Default cap on accepted poster frames.
pub const DEFAULT_MAX_FRAMES: usize = 5;

const FACE_WEIGHT: f64 = 0.4;
const LIGHTING_WEIGHT: f64 = 0.3;
const SHARPNESS_WEIGHT: f64 = 0.3;
/// Accepted frames must sit at least this far apart.
const MIN_FRAME_GAP_SECS: f64 = 2.0;
/// Segments above this potential anchor a probe at their start.
const ANCHOR_POTENTIAL_FLOOR: f64 = 0.7;
const DROP_OVERLAY: &str = "Feel the Beat 🔥";

/// Frame measurement capability.
///
/// The selector owns which timestamps to probe and how to score them;
/// implementations own how a frame is actually measured.
pub trait FrameProbe {
    /// Measure the frame at `timestamp`. `None` means no decodable frame
    /// exists there; the anchor is skipped without error.
    fn measure(&self, timestamp: f64) -> Option<FrameMeasurement>;
}

/// Weighted quality of one measured frame.
pub fn quality_score(measurement: &FrameMeasurement) -> f64 {
    let face = if measurement.face_detected { 1.0 } else { 0.0 };
    FACE_WEIGHT * face
        + LIGHTING_WEIGHT * measurement.lighting.score()
        + SHARPNESS_WEIGHT * measurement.sharpness_score.clamp(0.0, 1.0)
}

struct FrameAnchor {
    timestamp: f64,
    emotion: Emotion,
    overlay: Option<String>,
}

fn collect_anchors(segments: &[Segment], beats: &BeatAnalysis) -> Vec<FrameAnchor> {
    let mut anchors = Vec::new();
    for segment in segments {
        if segment.viral_potential > ANCHOR_POTENTIAL_FLOOR {
            anchors.push(FrameAnchor {
                timestamp: segment.start,
                emotion: segment.first_emotion().unwrap_or(Emotion::Neutral),
                overlay: Some(segment.text.clone()),
            });
        }
    }
    for &drop in &beats.drop_times {
        anchors.push(FrameAnchor {
            timestamp: drop,
            emotion: Emotion::Mauj,
            overlay: Some(DROP_OVERLAY.to_string()),
        });
    }
    anchors
}

/// Select up to `max_frames` poster frames, best quality first.
///
/// Anchors the probe cannot measure are skipped silently; an empty
/// result is a valid outcome, not an error.
pub fn select_frames(
    probe: &dyn FrameProbe,
    segments: &[Segment],
    beats: &BeatAnalysis,
    max_frames: usize,
) -> Vec<FrameCandidate> {
    let mut measured: Vec<FrameCandidate> = Vec::new();
    for anchor in collect_anchors(segments, beats) {
        let Some(measurement) = probe.measure(anchor.timestamp) else {
            continue;
        };
        let quality = quality_score(&measurement);
        if quality <= QUALITY_THRESHOLD {
            continue;
        }
        measured.push(FrameCandidate {
            timestamp: anchor.timestamp,
            quality_score: quality,
            face_detected: measurement.face_detected,
            lighting_score: measurement.lighting.score(),
            emotion_match: anchor.emotion,
            overlay_text: anchor.overlay,
        });
    }

    measured.sort_by(|a, b| {
        b.quality_score
            .partial_cmp(&a.quality_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut selected: Vec<FrameCandidate> = Vec::new();
    for frame in measured {
        if selected.len() >= max_frames {
            break;
        }
        let crowded = selected
            .iter()
            .any(|kept| (kept.timestamp - frame.timestamp).abs() < MIN_FRAME_GAP_SECS);
        if !crowded {
            selected.push(frame);
        }
    }

    debug!(selected = selected.len(), "Selected poster frames");
    selected
}

/// Tolerance when matching a probe timestamp to a measurement row.
const MEASUREMENT_TOLERANCE_SECS: f64 = 1.0;

/// Probe backed by a table of externally captured measurements.
///
/// Lookup takes the nearest row within one second of the requested
/// timestamp, so rows do not have to hit anchor times exactly.
#[derive(Debug, Default)]
pub struct MeasurementTable {
    rows: Vec<TimedMeasurement>,
}

impl MeasurementTable {
    pub fn new(rows: Vec<TimedMeasurement>) -> Self {
        Self { rows }
    }
}

impl FrameProbe for MeasurementTable {
    fn measure(&self, timestamp: f64) -> Option<FrameMeasurement> {
        self.rows
            .iter()
            .map(|row| ((row.timestamp - timestamp).abs(), row))
            .filter(|(distance, _)| *distance <= MEASUREMENT_TOLERANCE_SECS)
            .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(_, row)| row.measurement.clone())
    }
}

/// Probe that reports the same measurement at every timestamp. Stands in
/// for a real decoder on dry runs.
#[derive(Debug, Clone)]
pub struct UniformProbe {
    pub measurement: FrameMeasurement,
}

impl Default for UniformProbe {
    fn default() -> Self {
        Self {
            measurement: FrameMeasurement {
                face_detected: true,
                lighting: LightingSummary::new(0.1, 0.1),
                sharpness_score: 0.8,
            },
        }
    }
}

impl FrameProbe for UniformProbe {
    fn measure(&self, _timestamp: f64) -> Option<FrameMeasurement> {
        Some(self.measurement.clone())
    }
}
