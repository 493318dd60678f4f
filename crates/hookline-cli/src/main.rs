use std::path::{Path, PathBuf};

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hookline_cli::artifacts::{self, ProjectDirs};
use hookline_cli::{CliResult, HooklineConfig};
use hookline_engine::frames::{FrameProbe, MeasurementTable, UniformProbe};
use hookline_engine::pipeline::{PipelineInput, PipelineSettings};
use hookline_engine::{trends, EngagementLedger};
use hookline_models::{
    BeatAnalysis, CompetitorPost, HistorySummary, PipelineReport, PostRecord, RunStatus,
    StageStatus, TimedMeasurement,
};

const PIPELINE_STAGES: [&str; 7] = [
    "tagging", "chorus", "clips", "frames", "captions", "trends", "strategy",
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter =
        EnvFilter::from_default_env().add_directive("hookline=info".parse().unwrap());

    if json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: {} <transcript.json> <beats.json> [measurements.json]",
            args[0]
        );
        std::process::exit(2);
    }

    info!("Starting hookline runner");

    let config = HooklineConfig::from_env();
    info!("Runner config: {:?}", config);

    let transcript_path = PathBuf::from(&args[1]);
    let beats_path = PathBuf::from(&args[2]);
    let measurements_path = args.get(3).map(PathBuf::from);

    if let Err(e) = run(
        &config,
        &transcript_path,
        &beats_path,
        measurements_path.as_deref(),
    )
    .await
    {
        error!("Pipeline run failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(
    config: &HooklineConfig,
    transcript_path: &Path,
    beats_path: &Path,
    measurements_path: Option<&Path>,
) -> CliResult<()> {
    let project = artifacts::project_key();
    info!(project = %project, "Starting pipeline run");

    let dirs = ProjectDirs::prepare(&config.work_dir, &project).await?;

    let raw_segments = artifacts::read_transcript(transcript_path).await?;
    let beat_analysis: BeatAnalysis = artifacts::read_json(beats_path).await?;

    // Real frame measurements when a collaborator supplied them, otherwise
    // a flat synthetic probe that accepts every anchor.
    let probe: Box<dyn FrameProbe> = match measurements_path {
        Some(path) => {
            let rows: Vec<TimedMeasurement> = artifacts::read_json(path).await?;
            info!(project = %project, rows = rows.len(), "Loaded frame measurements");
            Box::new(MeasurementTable::new(rows))
        }
        None => Box::new(UniformProbe::default()),
    };

    let history = match &config.history_file {
        Some(path) => {
            let records: Option<Vec<PostRecord>> =
                artifacts::read_optional(Path::new(path)).await?;
            match records {
                Some(records) => EngagementLedger::from_records(records).report(),
                None => HistorySummary::default(),
            }
        }
        None => HistorySummary::default(),
    };

    let competitor_posts: Vec<CompetitorPost> = match &config.competitors_file {
        Some(path) => artifacts::read_json(Path::new(path)).await?,
        None => trends::sample_competitor_posts(),
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let input = PipelineInput {
        raw_segments,
        beat_analysis,
        competitor_posts,
        history,
    };
    let settings = PipelineSettings {
        schedule_days: config.schedule_days,
        max_frames: config.max_frames,
        now: Local::now().naive_local(),
    };

    let mut report = PipelineReport::new(&project, transcript_path.display().to_string());

    let output =
        match hookline_engine::run_pipeline(&project, input, &settings, probe.as_ref(), &mut rng)
        {
            Ok(output) => output,
            Err(e) => {
                report.record_stage("tagging", StageStatus::Failed);
                report.record_error(e.to_string());
                report.status = RunStatus::Failed;
                artifacts::write_json(&dirs.artifact(artifacts::RESULT_FILE), &report).await?;
                return Err(e.into());
            }
        };

    for stage in PIPELINE_STAGES {
        report.record_stage(stage, StageStatus::Success);
    }
    report.clips_count = output.clips.len();
    report.posters_count = output.frames.len();
    report.calendar_entries = output.plan.calendar.len();
    if output.clips.is_empty() {
        report.record_error("no clip candidates generated");
    }
    report.finish();

    artifacts::write_outputs(&dirs, &output, &report).await?;

    info!(
        project = %project,
        clips = output.clips.len(),
        posters = output.frames.len(),
        calendar_entries = output.plan.calendar.len(),
        "Pipeline run finished"
    );
    info!(project = %project, "Guidance: {}", output.plan.guidance);
    println!("{}", dirs.root.display());

    Ok(())
}
