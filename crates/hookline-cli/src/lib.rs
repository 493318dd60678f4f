//! Pipeline runner.
//!
//! This crate provides:
//! - Env-derived runner configuration
//! - Per-project artifact storage on disk
//! - The `hookline` and `plan-strategy` binaries

pub mod artifacts;
pub mod config;
pub mod error;

pub use config::HooklineConfig;
pub use error::{CliError, CliResult};
