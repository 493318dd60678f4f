//! Per-project artifact store.
//!
//! Each run works in an isolated `{work_dir}/{project_key}` directory and
//! leaves one JSON document per pipeline stage behind, so a run can be
//! inspected (or partially re-run) after the fact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use hookline_engine::pipeline::PipelineOutput;
use hookline_models::{PipelineReport, RawSegment};

use crate::error::CliResult;

pub const ANALYSIS_FILE: &str = "analysis.json";
pub const CLIP_SPECS_FILE: &str = "clip_specs.json";
pub const FRAMES_FILE: &str = "frames.json";
pub const CAPTIONS_FILE: &str = "captions.json";
pub const TRENDS_FILE: &str = "trends.json";
pub const STRATEGY_FILE: &str = "strategy.json";
pub const RESULT_FILE: &str = "pipeline_result.json";

/// Short unique key isolating one song's working directory.
pub fn project_key() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("HL_{}", &id[..8])
}

/// Directory layout for one project.
#[derive(Debug, Clone)]
pub struct ProjectDirs {
    pub root: PathBuf,
    pub clips: PathBuf,
    pub posters: PathBuf,
}

impl ProjectDirs {
    /// Create the project tree under `work_dir`, including the `clips/`
    /// and `posters/` subdirectories render tooling writes into.
    pub async fn prepare(work_dir: &str, project: &str) -> CliResult<Self> {
        let root = PathBuf::from(work_dir).join(project);
        let clips = root.join("clips");
        let posters = root.join("posters");
        tokio::fs::create_dir_all(&clips).await?;
        tokio::fs::create_dir_all(&posters).await?;
        Ok(Self {
            root,
            clips,
            posters,
        })
    }

    pub fn artifact(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> CliResult<()> {
    let raw = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, raw).await?;
    Ok(())
}

/// Read an optional input, mapping a missing file to `None`.
pub async fn read_optional<T: DeserializeOwned>(path: &Path) -> CliResult<Option<T>> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Read a transcript file of raw collaborator segments.
pub async fn read_transcript(path: &Path) -> CliResult<Vec<RawSegment>> {
    read_json(path).await
}

/// Persist every stage output plus the final run report.
pub async fn write_outputs(
    dirs: &ProjectDirs,
    output: &PipelineOutput,
    report: &PipelineReport,
) -> CliResult<()> {
    write_json(&dirs.artifact(ANALYSIS_FILE), &output.analysis).await?;
    write_json(&dirs.artifact(CLIP_SPECS_FILE), &output.clips).await?;
    write_json(&dirs.artifact(FRAMES_FILE), &output.frames).await?;
    write_json(&dirs.artifact(CAPTIONS_FILE), &output.captions).await?;
    write_json(&dirs.artifact(TRENDS_FILE), &output.trends).await?;
    write_json(&dirs.artifact(STRATEGY_FILE), &output.plan).await?;
    write_json(&dirs.artifact(RESULT_FILE), report).await?;
    Ok(())
}
