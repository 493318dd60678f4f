//! Pipeline run report models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Terminal status of one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Success,
    Failed,
}

/// Overall status of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Started,
    Completed,
    CompletedWithErrors,
    Failed,
}

/// Summary document for one pipeline run, persisted alongside the stage
/// artifacts so a run can be inspected after the fact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PipelineReport {
    /// Project key the run worked under
    pub project: String,

    /// Input transcript path or label
    pub source: String,

    pub status: RunStatus,

    /// Per-stage outcome
    #[serde(default)]
    pub steps: HashMap<String, StageStatus>,

    /// Stage-level error messages, in occurrence order
    #[serde(default)]
    pub errors: Vec<String>,

    /// Candidate clips produced
    #[serde(default)]
    pub clips_count: usize,

    /// Poster frames accepted
    #[serde(default)]
    pub posters_count: usize,

    /// Calendar entries scheduled
    #[serde(default)]
    pub calendar_entries: usize,
}

impl PipelineReport {
    pub fn new(project: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            source: source.into(),
            status: RunStatus::Started,
            steps: HashMap::new(),
            errors: Vec::new(),
            clips_count: 0,
            posters_count: 0,
            calendar_entries: 0,
        }
    }

    pub fn record_stage(&mut self, stage: &str, status: StageStatus) {
        self.steps.insert(stage.to_string(), status);
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Close out the run: completed, or completed-with-errors when any
    /// stage reported a failure.
    pub fn finish(&mut self) {
        self.status = if self.errors.is_empty() {
            RunStatus::Completed
        } else {
            RunStatus::CompletedWithErrors
        };
    }
}
