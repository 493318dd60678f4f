//! Combined song analysis document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::beat::BeatAnalysis;
use crate::segment::Segment;

/// Tagged transcript plus beat analysis for one song.
///
/// This is the `analysis.json` artifact and the shared input of the clip
/// and frame components.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SongAnalysis {
    /// Tagged transcript segments in time order
    pub lyrics_segments: Vec<Segment>,

    /// Beat/onset analysis
    pub beat_analysis: BeatAnalysis,
}

impl SongAnalysis {
    pub fn new(lyrics_segments: Vec<Segment>, beat_analysis: BeatAnalysis) -> Self {
        Self {
            lyrics_segments,
            beat_analysis,
        }
    }
}
