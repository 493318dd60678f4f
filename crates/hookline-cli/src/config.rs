//! Runner configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HooklineConfig {
    /// Root directory for per-project artifacts
    pub work_dir: String,
    /// Days the publishing calendar covers
    pub schedule_days: u32,
    /// Poster frames kept per song
    pub max_frames: usize,
    /// Fixed seed for caption template draws; None uses OS entropy
    pub seed: Option<u64>,
    /// Ledger JSON of published-post records, for the history stage
    pub history_file: Option<String>,
    /// Competitor post JSON for the trend stage; None uses built-in samples
    pub competitors_file: Option<String>,
}

impl Default for HooklineConfig {
    fn default() -> Self {
        Self {
            work_dir: "work".to_string(),
            schedule_days: 7,
            max_frames: 5,
            seed: None,
            history_file: None,
            competitors_file: None,
        }
    }
}

impl HooklineConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            work_dir: std::env::var("HOOKLINE_WORK_DIR").unwrap_or(defaults.work_dir),
            schedule_days: std::env::var("HOOKLINE_SCHEDULE_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.schedule_days),
            max_frames: std::env::var("HOOKLINE_MAX_FRAMES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_frames),
            seed: std::env::var("HOOKLINE_SEED")
                .ok()
                .and_then(|s| s.parse().ok()),
            history_file: std::env::var("HOOKLINE_HISTORY").ok(),
            competitors_file: std::env::var("HOOKLINE_COMPETITORS").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HooklineConfig::default();
        assert_eq!(config.work_dir, "work");
        assert_eq!(config.schedule_days, 7);
        assert_eq!(config.max_frames, 5);
        assert!(config.seed.is_none());
        assert!(config.history_file.is_none());
        assert!(config.competitors_file.is_none());
    }
}
