//! Caption bundle produced for each clip.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ready-to-post caption material for one clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CaptionBundle {
    /// Caption variations, strongest first
    pub captions: Vec<String>,

    /// Question posted to drive comments
    pub engagement_question: String,

    /// Hashtags, capped to the platform limit
    pub hashtags: Vec<String>,
}
