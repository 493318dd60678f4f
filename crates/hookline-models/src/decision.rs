//! Content calendar decision models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::emotion::Emotion;
use crate::platform::Platform;

/// What to do with a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Publish at the scheduled time
    Post,
    /// Keep but do not publish yet (scheduled with a warning)
    Hold,
    /// Re-publish previously successful content
    Repeat,
    /// Drop from the calendar entirely
    Stop,
}

impl Action {
    pub const ALL: &'static [Action] = &[Action::Post, Action::Hold, Action::Repeat, Action::Stop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Post => "post",
            Action::Hold => "hold",
            Action::Repeat => "repeat",
            Action::Stop => "stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "post" => Ok(Action::Post),
            "hold" => Ok(Action::Hold),
            "repeat" => Ok(Action::Repeat),
            "stop" => Ok(Action::Stop),
            _ => Err(ActionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown action: {0}")]
pub struct ActionParseError(String);

/// One scheduled publishing decision.
///
/// This is the externally persisted calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContentDecision {
    pub action: Action,

    /// Id of the clip this decision schedules
    pub content_id: String,

    /// Platform assigned from clip duration
    pub platform: Platform,

    /// Local date and time, formatted "%Y-%m-%d %H:%M"
    pub scheduled_time: String,

    /// Why this slot and platform were chosen
    pub reason: String,

    /// 1 is highest, 2 is normal
    pub priority: u8,

    /// The clip's dominant emotion
    pub emotion: Emotion,

    /// Final ranking score in [0, 1]
    pub predicted_score: f64,
}

/// A clip excluded from posting, or scheduled only with a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StopEntry {
    pub content_id: String,
    pub reason: String,
    pub action: Action,
}

/// Full output of the scheduling brain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StrategyPlan {
    /// Scheduled decisions in chronological order
    pub calendar: Vec<ContentDecision>,

    /// Scheduled item count per platform
    pub platform_distribution: HashMap<Platform, u32>,

    /// Clips excluded from posting or flagged with a warning
    pub stop_list: Vec<StopEntry>,

    /// Human-readable digest of the next few decisions
    pub commands: Vec<String>,

    /// One-line summary of the plan
    pub guidance: String,
}

impl StrategyPlan {
    /// True when nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.calendar.is_empty()
    }
}
