//! End-to-end run of the decision pipeline.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use hookline_models::{
    BeatAnalysis, CaptionBundle, ClipCandidate, CompetitorPost, FrameCandidate, HistorySummary,
    RawSegment, SongAnalysis, StrategyPlan, TrendReport,
};
use rand::Rng;

use crate::error::EngineResult;
use crate::frames::FrameProbe;
use crate::logging::StageLogger;
use crate::{captions, clip_gen, frames, strategy, tagger, trends};

/// Only the strongest candidates move past generation into captioning
/// and scheduling.
pub const PIPELINE_CLIP_LIMIT: usize = 10;

/// Everything the pipeline consumes.
pub struct PipelineInput {
    pub raw_segments: Vec<RawSegment>,
    pub beat_analysis: BeatAnalysis,

    /// Competitor observations for the trend stage; empty means only the
    /// fixed posting-time signals apply.
    pub competitor_posts: Vec<CompetitorPost>,

    /// Aggregated post history; an empty summary earns no bonuses and
    /// raises no cautions.
    pub history: HistorySummary,
}

/// Run-level knobs.
pub struct PipelineSettings {
    /// Calendar length in days.
    pub schedule_days: u32,

    /// Cap on accepted poster frames.
    pub max_frames: usize,

    /// Scheduling reference time; the calendar starts the next day.
    pub now: NaiveDateTime,
}

/// Everything the pipeline produces, ready to persist as artifacts.
#[derive(Debug)]
pub struct PipelineOutput {
    pub analysis: SongAnalysis,
    pub clips: Vec<ClipCandidate>,
    pub frames: Vec<FrameCandidate>,
    pub captions: HashMap<String, CaptionBundle>,
    pub trends: TrendReport,
    pub plan: StrategyPlan,
}

/// Run tagging, clip generation, frame selection, captioning, trend
/// analysis, and scheduling for one project.
///
/// Only tagging can fail, on a segment with no text. Every later stage
/// degrades to an empty result instead of erroring, so a song with no
/// usable moments still produces a (trivial) plan.
pub fn run_pipeline(
    project: &str,
    input: PipelineInput,
    settings: &PipelineSettings,
    probe: &dyn FrameProbe,
    rng: &mut impl Rng,
) -> EngineResult<PipelineOutput> {
    let logger = StageLogger::new(project, "tagging");
    logger.log_start(&format!("{} raw segments", input.raw_segments.len()));
    let segments = match tagger::tag_segments(&input.raw_segments) {
        Ok(segments) => segments,
        Err(err) => {
            logger.log_error(&err.to_string());
            return Err(err);
        }
    };
    logger.log_completion(&format!("{} segments tagged", segments.len()));

    let mut beat_analysis = input.beat_analysis;
    if beat_analysis.chorus_times.is_none() {
        if let Some(chorus) = tagger::find_repeated_line(&segments) {
            StageLogger::new(project, "chorus").log_progress(&format!(
                "Repeated line '{}' found {} times",
                chorus.text, chorus.count
            ));
            beat_analysis = beat_analysis.with_chorus_times(chorus.timestamps);
        }
    }
    let analysis = SongAnalysis::new(segments, beat_analysis);

    let logger = StageLogger::new(project, "clips");
    let clips = clip_gen::generate_clips(&analysis.lyrics_segments, &analysis.beat_analysis);
    if clips.is_empty() {
        logger.log_warning("No clip candidates generated");
    } else {
        logger.log_completion(&format!("{} candidates", clips.len()));
    }

    let logger = StageLogger::new(project, "frames");
    let frames = frames::select_frames(
        probe,
        &analysis.lyrics_segments,
        &analysis.beat_analysis,
        settings.max_frames,
    );
    logger.log_completion(&format!("{} poster frames", frames.len()));

    // Ids follow generation rank so caption keys and calendar entries
    // line up.
    let top_clips: Vec<ClipCandidate> = clips
        .iter()
        .take(PIPELINE_CLIP_LIMIT)
        .enumerate()
        .map(|(index, clip)| {
            let mut entry = clip.clone();
            entry.clip_id = Some(format!("clip_{}", index + 1));
            entry
        })
        .collect();

    let logger = StageLogger::new(project, "captions");
    let caption_bundles = captions::compose_all(&top_clips, rng);
    logger.log_completion(&format!("{} caption bundles", caption_bundles.len()));

    let logger = StageLogger::new(project, "trends");
    let trend_report = trends::analyze(&input.competitor_posts);
    logger.log_completion(&format!("{} signals", trend_report.insights.len()));

    let logger = StageLogger::new(project, "strategy");
    let plan = strategy::decide(
        &top_clips,
        &trend_report.insights,
        &input.history,
        settings.schedule_days,
        settings.now,
    );
    logger.log_completion(&format!(
        "{} calendar entries over {} days",
        plan.calendar.len(),
        settings.schedule_days
    ));

    Ok(PipelineOutput {
        analysis,
        clips,
        frames,
        captions: caption_bundles,
        trends: trend_report,
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::frames::UniformProbe;
    use chrono::{NaiveDate, NaiveTime};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> PipelineSettings {
        PipelineSettings {
            schedule_days: 7,
            max_frames: 5,
            now: NaiveDateTime::new(
                NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
                NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            ),
        }
    }

    #[test]
    fn test_empty_transcript_is_not_an_error() {
        let input = PipelineInput {
            raw_segments: Vec::new(),
            beat_analysis: BeatAnalysis::default(),
            competitor_posts: Vec::new(),
            history: HistorySummary::default(),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let output =
            run_pipeline("HL_test0000", input, &settings(), &UniformProbe::default(), &mut rng)
                .unwrap();
        assert!(output.clips.is_empty());
        assert!(output.frames.is_empty());
        assert!(output.captions.is_empty());
        assert!(output.plan.is_empty());
        assert_eq!(output.plan.guidance, "Content khatam! Naya banao.");
    }

    #[test]
    fn test_blank_segment_fails_the_run() {
        let input = PipelineInput {
            raw_segments: vec![RawSegment::new(0.0, 2.0, "")],
            beat_analysis: BeatAnalysis::default(),
            competitor_posts: Vec::new(),
            history: HistorySummary::default(),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let err =
            run_pipeline("HL_test0000", input, &settings(), &UniformProbe::default(), &mut rng)
                .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSegment(_)));
    }

    #[test]
    fn test_detected_chorus_fills_missing_times() {
        let input = PipelineInput {
            raw_segments: vec![
                RawSegment::new(0.0, 3.0, "yehi hook line hai"),
                RawSegment::new(30.0, 33.0, "beech ki line"),
                RawSegment::new(60.0, 63.0, "yehi hook line hai"),
            ],
            beat_analysis: BeatAnalysis::default(),
            competitor_posts: Vec::new(),
            history: HistorySummary::default(),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let output =
            run_pipeline("HL_test0000", input, &settings(), &UniformProbe::default(), &mut rng)
                .unwrap();
        assert_eq!(output.analysis.beat_analysis.chorus_starts(), &[0.0, 60.0]);
    }

    #[test]
    fn test_supplied_chorus_times_win() {
        let input = PipelineInput {
            raw_segments: vec![
                RawSegment::new(0.0, 3.0, "same line"),
                RawSegment::new(60.0, 63.0, "same line"),
            ],
            beat_analysis: BeatAnalysis::default().with_chorus_times(vec![42.0]),
            competitor_posts: Vec::new(),
            history: HistorySummary::default(),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let output =
            run_pipeline("HL_test0000", input, &settings(), &UniformProbe::default(), &mut rng)
                .unwrap();
        assert_eq!(output.analysis.beat_analysis.chorus_starts(), &[42.0]);
    }
}
