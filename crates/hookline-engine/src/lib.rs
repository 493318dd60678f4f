//! Decision pipeline for turning song analysis into a publishing plan.
//!
//! The pipeline tags transcript segments with emotions, proposes clip
//! windows around hooks, beat drops, and chorus repeats, selects poster
//! frames, composes captions, folds in trend and history signals, and
//! lays the survivors onto a multi-day posting calendar.

pub mod captions;
pub mod clip_gen;
pub mod engagement;
pub mod error;
pub mod frames;
pub mod logging;
pub mod pipeline;
pub mod strategy;
pub mod tagger;
pub mod trends;

pub use error::{EngineError, EngineResult};
pub use pipeline::{
    run_pipeline, PipelineInput, PipelineOutput, PipelineSettings, PIPELINE_CLIP_LIMIT,
};

// Commonly used entry points
pub use clip_gen::generate_clips;
pub use engagement::EngagementLedger;
pub use frames::{select_frames, FrameProbe, MeasurementTable, UniformProbe};
pub use logging::StageLogger;
pub use strategy::decide;
pub use tagger::{find_repeated_line, tag_segments};
