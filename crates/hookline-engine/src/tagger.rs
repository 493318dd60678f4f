//! Emotion tagging and chorus detection over transcript segments.

use std::collections::HashMap;

use hookline_models::{ChorusLine, Emotion, RawSegment, Segment};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Keyword cues per emotion, checked in declaration order. A segment's
/// first tagged emotion follows this order.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Akad,
        &["theke pe", "chhore", "attitude", "na dare", "jaat", "bhai", "yaar"],
    ),
    (
        Emotion::Dard,
        &["roya", "dil", "judai", "yaad", "tanha", "dhoka"],
    ),
    (
        Emotion::Pyaar,
        &["gore", "naina", "ishq", "dil", "sajna", "love"],
    ),
    (
        Emotion::GaonPride,
        &["gaam", "khap", "desi", "haryana", "tau", "khet"],
    ),
    (
        Emotion::Mauj,
        &["party", "daaru", "masti", "yaari", "chakk", "fun"],
    ),
];

/// Informal address words that make a line quotable.
const COLLOQUIAL_TERMS: &[&str] = &["bhai", "yaar", "chhora"];

const BASE_POTENTIAL: f64 = 0.5;
const AKAD_BONUS: f64 = 0.2;
const SHORT_LINE_BONUS: f64 = 0.15;
const COLLOQUIAL_BONUS: f64 = 0.1;
/// Lines under this many characters count as short and punchy.
const SHORT_LINE_CHARS: usize = 50;

/// Tag raw transcript segments with emotions and a viral-potential score.
///
/// Negative timestamps are clamped to zero and segments without positive
/// duration after clamping are dropped silently. A segment with empty
/// text is rejected outright since nothing downstream can anchor on it.
/// Surviving segments keep their input order.
pub fn tag_segments(raw: &[RawSegment]) -> EngineResult<Vec<Segment>> {
    let mut tagged = Vec::with_capacity(raw.len());

    for segment in raw {
        if segment.text.trim().is_empty() {
            return Err(EngineError::invalid_segment(format!(
                "segment at {:.2}s has no text",
                segment.start
            )));
        }

        let Some(clean) = segment.sanitized() else {
            debug!(
                start = segment.start,
                end = segment.end,
                "Dropping segment without positive duration"
            );
            continue;
        };

        let emotions = detect_emotions(&clean.text);
        let viral_potential = viral_potential(&clean.text, &emotions);
        tagged.push(Segment {
            start: clean.start,
            end: clean.end,
            text: clean.text,
            emotions,
            viral_potential,
        });
    }

    debug!(count = tagged.len(), "Tagged transcript segments");
    Ok(tagged)
}

/// All emotions whose keyword set matches the line, `Neutral` when none do.
fn detect_emotions(text: &str) -> Vec<Emotion> {
    let lower = text.to_lowercase();
    let mut found = Vec::new();
    for (emotion, keywords) in EMOTION_KEYWORDS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            found.push(*emotion);
        }
    }
    if found.is_empty() {
        found.push(Emotion::Neutral);
    }
    found
}

/// Heuristic standalone-appeal score for one line, capped at 1.0.
fn viral_potential(text: &str, emotions: &[Emotion]) -> f64 {
    let mut score = BASE_POTENTIAL;
    if emotions.contains(&Emotion::Akad) {
        score += AKAD_BONUS;
    }
    if text.chars().count() < SHORT_LINE_CHARS {
        score += SHORT_LINE_BONUS;
    }
    let lower = text.to_lowercase();
    if COLLOQUIAL_TERMS.iter().any(|term| lower.contains(term)) {
        score += COLLOQUIAL_BONUS;
    }
    score.min(1.0)
}

/// Find the most repeated transcript line, the likely chorus.
///
/// Lines are compared after trimming and lower-casing. Returns `None`
/// unless some line occurs at least twice; ties resolve to the line that
/// appears first in the transcript.
pub fn find_repeated_line(segments: &[Segment]) -> Option<ChorusLine> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for segment in segments {
        let line = normalize_line(&segment.text);
        if line.is_empty() {
            continue;
        }
        *counts.entry(line).or_insert(0) += 1;
    }

    // Walk in transcript order so ties resolve to the earliest line.
    let mut best: Option<(String, usize)> = None;
    for segment in segments {
        let line = normalize_line(&segment.text);
        let Some(&count) = counts.get(&line) else {
            continue;
        };
        if best.as_ref().map_or(true, |(_, best_count)| count > *best_count) {
            best = Some((line, count));
        }
    }

    let (text, count) = best?;
    if count < 2 {
        return None;
    }

    let timestamps = segments
        .iter()
        .filter(|segment| normalize_line(&segment.text) == text)
        .map(|segment| segment.start)
        .collect();

    Some(ChorusLine {
        text,
        count,
        timestamps,
    })
}

fn normalize_line(text: &str) -> String {
    text.trim().to_lowercase()
}
