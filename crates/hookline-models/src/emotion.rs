//! Emotion labels and their audience/time-slot mappings.

use chrono::NaiveTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Emotion labels used across tagging, clip selection, and scheduling.
///
/// The set is closed on purpose: audience and time-slot lookups are
/// exhaustive matches, so a new label cannot slip through as a silent
/// string fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// Assertive/attitude lines
    Akad,
    /// Heartbreak lines
    Dard,
    /// Romance lines
    Pyaar,
    /// Village/regional-pride lines
    GaonPride,
    /// Party/fun lines
    Mauj,
    /// No keyword set matched during tagging
    Neutral,
    /// Scheduling-level fallback when a clip carries no tagged emotion
    General,
}

impl Emotion {
    /// All labels, including the two fallback labels.
    pub const ALL: &'static [Emotion] = &[
        Emotion::Akad,
        Emotion::Dard,
        Emotion::Pyaar,
        Emotion::GaonPride,
        Emotion::Mauj,
        Emotion::Neutral,
        Emotion::General,
    ];

    /// Labels the tagger can assign from keyword sets, in match order.
    /// A segment's first tagged emotion depends on this order.
    pub const TAGGABLE: &'static [Emotion] = &[
        Emotion::Akad,
        Emotion::Dard,
        Emotion::Pyaar,
        Emotion::GaonPride,
        Emotion::Mauj,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Akad => "akad",
            Emotion::Dard => "dard",
            Emotion::Pyaar => "pyaar",
            Emotion::GaonPride => "gaon_pride",
            Emotion::Mauj => "mauj",
            Emotion::Neutral => "neutral",
            Emotion::General => "general",
        }
    }

    /// Target audience label for clips anchored on this emotion.
    pub fn target_audience(&self) -> &'static str {
        match self {
            Emotion::Akad => "ladke_18_30_gaon_shehar",
            Emotion::Dard => "all_sad_mood",
            Emotion::Pyaar => "couples_romantic",
            Emotion::GaonPride => "gaon_haryana_specific",
            Emotion::Mauj => "party_mood_youth",
            Emotion::Neutral | Emotion::General => "general_haryanvi",
        }
    }

    /// Fixed publishing time for this emotion, if it has one.
    ///
    /// Dard posts go out in the morning, akad in the evening rush.
    /// Everything else is slotted by position within the day.
    pub fn fixed_time_slot(&self) -> Option<NaiveTime> {
        match self {
            Emotion::Dard => NaiveTime::from_hms_opt(7, 0, 0),
            Emotion::Akad => NaiveTime::from_hms_opt(19, 0, 0),
            Emotion::Pyaar
            | Emotion::GaonPride
            | Emotion::Mauj
            | Emotion::Neutral
            | Emotion::General => None,
        }
    }

    /// Recover an emotion from a target-audience label.
    ///
    /// Used when a clip reaches captioning without tagged emotions and
    /// only its audience string survives.
    pub fn from_audience_hint(audience: &str) -> Emotion {
        if audience.contains("ladke") {
            Emotion::Akad
        } else if audience.contains("sad") {
            Emotion::Dard
        } else if audience.contains("couple") {
            Emotion::Pyaar
        } else if audience.contains("party") {
            Emotion::Mauj
        } else if audience.contains("gaon") {
            Emotion::GaonPride
        } else {
            Emotion::General
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = EmotionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "akad" => Ok(Emotion::Akad),
            "dard" => Ok(Emotion::Dard),
            "pyaar" => Ok(Emotion::Pyaar),
            "gaon_pride" => Ok(Emotion::GaonPride),
            "mauj" => Ok(Emotion::Mauj),
            "neutral" => Ok(Emotion::Neutral),
            "general" => Ok(Emotion::General),
            _ => Err(EmotionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown emotion: {0}")]
pub struct EmotionParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_parse() {
        assert_eq!("akad".parse::<Emotion>().unwrap(), Emotion::Akad);
        assert_eq!("GAON_PRIDE".parse::<Emotion>().unwrap(), Emotion::GaonPride);
        assert!("bhangra".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_round_trip_all_labels() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.as_str().parse::<Emotion>().unwrap(), *emotion);
        }
    }

    #[test]
    fn test_audience_mapping() {
        assert_eq!(Emotion::Akad.target_audience(), "ladke_18_30_gaon_shehar");
        assert_eq!(Emotion::Dard.target_audience(), "all_sad_mood");
        assert_eq!(Emotion::Neutral.target_audience(), "general_haryanvi");
        assert_eq!(Emotion::General.target_audience(), "general_haryanvi");
    }

    #[test]
    fn test_fixed_time_slots() {
        assert_eq!(
            Emotion::Dard.fixed_time_slot(),
            NaiveTime::from_hms_opt(7, 0, 0)
        );
        assert_eq!(
            Emotion::Akad.fixed_time_slot(),
            NaiveTime::from_hms_opt(19, 0, 0)
        );
        assert_eq!(Emotion::Mauj.fixed_time_slot(), None);
        assert_eq!(Emotion::General.fixed_time_slot(), None);
    }

    #[test]
    fn test_audience_hint_inversion() {
        assert_eq!(
            Emotion::from_audience_hint("ladke_18_30_gaon_shehar"),
            Emotion::Akad
        );
        assert_eq!(Emotion::from_audience_hint("all_sad_mood"), Emotion::Dard);
        assert_eq!(
            Emotion::from_audience_hint("couples_romantic"),
            Emotion::Pyaar
        );
        assert_eq!(
            Emotion::from_audience_hint("party_mood_youth"),
            Emotion::Mauj
        );
        assert_eq!(
            Emotion::from_audience_hint("gaon_haryana_specific"),
            Emotion::GaonPride
        );
        assert_eq!(Emotion::from_audience_hint("unknown"), Emotion::General);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Emotion::GaonPride).unwrap();
        assert_eq!(json, "\"gaon_pride\"");
        let back: Emotion = serde_json::from_str("\"gaon_pride\"").unwrap();
        assert_eq!(back, Emotion::GaonPride);
    }
}
