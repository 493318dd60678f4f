//! Structured stage logging utilities.
//!
//! Provides consistent, structured logging for pipeline runs with
//! tracing spans and contextual information.

use tracing::{error, info, warn, Span};

/// Stage logger for structured logging with consistent formatting.
///
/// Provides a simple interface for logging stage lifecycle events with
/// automatic contextual information (project key, stage name).
#[derive(Debug, Clone)]
pub struct StageLogger {
    project: String,
    stage: String,
}

impl StageLogger {
    /// Create a new logger for one stage of one project run.
    ///
    /// # Arguments
    /// * `project` - The project key the run works under
    /// * `stage` - The pipeline stage (e.g., "tagging", "strategy")
    pub fn new(project: &str, stage: &str) -> Self {
        Self {
            project: project.to_string(),
            stage: stage.to_string(),
        }
    }

    /// Log the start of a stage.
    pub fn log_start(&self, message: &str) {
        info!(
            project = %self.project,
            stage = %self.stage,
            "Stage started: {}", message
        );
    }

    /// Log a progress update within a stage.
    pub fn log_progress(&self, message: &str) {
        info!(
            project = %self.project,
            stage = %self.stage,
            "Stage progress: {}", message
        );
    }

    /// Log a warning within a stage.
    pub fn log_warning(&self, message: &str) {
        warn!(
            project = %self.project,
            stage = %self.stage,
            "Stage warning: {}", message
        );
    }

    /// Log a stage error.
    pub fn log_error(&self, message: &str) {
        error!(
            project = %self.project,
            stage = %self.stage,
            "Stage error: {}", message
        );
    }

    /// Log the completion of a stage.
    pub fn log_completion(&self, message: &str) {
        info!(
            project = %self.project,
            stage = %self.stage,
            "Stage completed: {}", message
        );
    }

    /// Get the project key.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Get the stage name.
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Create a tracing span for this stage.
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "stage",
            project = %self.project,
            stage = %self.stage
        )
    }
}
