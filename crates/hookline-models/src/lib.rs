//! Shared data models for the Hookline decision pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Transcript segments and beat analysis
//! - Emotion labels and publishing platforms
//! - Clip and poster-frame candidates
//! - Scheduling decisions and the content calendar
//! - Trend signals and post-performance history

pub mod analysis;
pub mod beat;
pub mod caption;
pub mod clip;
pub mod decision;
pub mod emotion;
pub mod frame;
pub mod history;
pub mod platform;
pub mod report;
pub mod segment;
pub mod trend;

// Re-export common types
pub use analysis::SongAnalysis;
pub use beat::{BeatAnalysis, ChorusLine};
pub use caption::CaptionBundle;
pub use clip::{ClipCandidate, CLIP_ASPECT_RATIO};
pub use decision::{Action, ContentDecision, StopEntry, StrategyPlan};
pub use emotion::{Emotion, EmotionParseError};
pub use frame::{
    sharpness_from_laplacian, FrameCandidate, FrameMeasurement, LightingSummary, TimedMeasurement,
};
pub use history::{EmotionHistory, HistorySummary, PostRecord};
pub use platform::{Platform, PlatformParseError};
pub use report::{PipelineReport, RunStatus, StageStatus};
pub use segment::{RawSegment, Segment};
pub use trend::{CompetitorPost, TrendKind, TrendReport, TrendSignal};
