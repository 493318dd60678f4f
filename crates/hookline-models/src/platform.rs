//! Publishing platform definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Platforms a scheduled clip can be posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Short vertical clips, 15 seconds and under
    InstagramReel,
    /// Vertical clips up to a minute
    YoutubeShorts,
    /// Everything longer
    Facebook,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[
        Platform::InstagramReel,
        Platform::YoutubeShorts,
        Platform::Facebook,
    ];

    /// Assign the platform from clip duration in seconds.
    pub fn for_duration(duration_secs: f64) -> Platform {
        if duration_secs <= 15.0 {
            Platform::InstagramReel
        } else if duration_secs <= 60.0 {
            Platform::YoutubeShorts
        } else {
            Platform::Facebook
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::InstagramReel => "instagram_reel",
            Platform::YoutubeShorts => "youtube_shorts",
            Platform::Facebook => "facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instagram_reel" => Ok(Platform::InstagramReel),
            "youtube_shorts" => Ok(Platform::YoutubeShorts),
            "facebook" => Ok(Platform::Facebook),
            _ => Err(PlatformParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown platform: {0}")]
pub struct PlatformParseError(String);
