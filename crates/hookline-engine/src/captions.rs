//! Caption composition for clip candidates.

use std::collections::HashMap;

use hookline_models::{CaptionBundle, ClipCandidate, Emotion};
use rand::prelude::IndexedRandom;
use rand::Rng;

/// Caption variations generated per clip.
const CAPTION_VARIATIONS: usize = 2;
/// Hard cap on hashtags per bundle.
const MAX_HASHTAGS: usize = 15;
/// Hook lines longer than this are shortened with an ellipsis.
const MAX_LINE_CHARS: usize = 40;

const BASE_HASHTAGS: &[&str] = &["#haryanvi", "#haryanvisong", "#desisong", "#haryana"];

/// Placeholders: `{line}` is the (shortened) hook line, `{place}` and
/// `{city}` are fixed locale anchors, `{emotion}` is the label itself.
fn caption_templates(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Akad | Emotion::Neutral | Emotion::General => &[
            "Chhora {place} ka, attitude {city} ka 😏",
            "{line}... aur baat khatam 🔥",
            "Theke pe khade, duniya dekhe 👊",
            "Jaat ka kamaal, {emotion} pe jawab nahi",
            "{line} - ye line sun ke rewind nahi maara? 🧐",
        ],
        Emotion::Dard => &[
            "Dil toota, par chhora nahi jhuka 💔",
            "{line}... samjhe jo samjhe",
            "Yaad teri, raat meri ☕",
            "Koi sunne wala chahiye, bolne wale bahut hain",
        ],
        Emotion::GaonPride => &[
            "Gaam ki mitti, shehar ka sapna 🌾",
            "Beta {place} ka, baaki sab timepass",
            "{line} - apne gaam ki baat alag hai",
            "Desi swag, city lag 🚜",
        ],
        Emotion::Pyaar => &[
            "Gore gaal, kaala dil mera 😂",
            "{line}... ab samjh aaya?",
            "Tere bina chain kahan re 💕",
        ],
        Emotion::Mauj => &[
            "Party chal rahi hai, aaja yaar 🎉",
            "{line} - weekend mood ON",
            "Yaari dosti, baaki sab masti 🍻",
        ],
    }
}

fn question_templates(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Akad => &[
            "Bata chhore, teri bhi aisi koi line hai?",
            "Ye line sunke kiske yaad aaye? 😏 Tag karo",
            "Akad rakhni chahiye ya nahi? Comment karo",
            "Tera gaam kaunsa? Batade bhai",
        ],
        Emotion::Dard => &[
            "Tujhe bhi kisi ne aisa bola hai kya?",
            "Is line pe kitne baar rewind maara? Count batao",
            "Single ho ya complicated? 😅",
        ],
        Emotion::GaonPride => &[
            "Tera gaam kaunsa hai bhai?",
            "Gaam wale tag karo apne aap ko 🙋‍♂️",
            "Shehar better ya gaam? Ladai karo comments mein",
        ],
        Emotion::Pyaar | Emotion::Mauj | Emotion::Neutral | Emotion::General => &[
            "Ye gaana kitni baar suna? Honestly batao",
            "Isko kisne pehle discover kiya? OG fans batao",
            "Aur kaunsa gaana banaun? Request karo",
        ],
    }
}

fn emotion_hashtags(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Akad => &["#attitude", "#akadwala", "#chhora", "#desiboy"],
        Emotion::Dard => &["#sadsong", "#dard", "#dil", "#heartbroken"],
        Emotion::GaonPride => &["#gaam", "#desi", "#village", "#mitti"],
        Emotion::Pyaar => &["#love", "#romance", "#pyaar", "#ishq"],
        Emotion::Mauj => &["#party", "#yaari", "#masti", "#weekend"],
        Emotion::Neutral | Emotion::General => &[],
    }
}

/// Shorten a hook line for caption use; an empty line gets a stock
/// stand-in so templates never render blank.
fn shorten_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return "Yeh line".to_string();
    }
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() <= MAX_LINE_CHARS {
        trimmed.to_string()
    } else {
        let head: String = chars[..MAX_LINE_CHARS - 3].iter().collect();
        format!("{head}...")
    }
}

fn render(template: &str, line: &str, emotion: Emotion) -> String {
    template
        .replace("{line}", line)
        .replace("{place}", "Haryana")
        .replace("{city}", "Delhi")
        .replace("{emotion}", emotion.as_str())
}

/// The emotion captions are written for: tagged emotions win, then the
/// audience label, then general.
fn caption_emotion(clip: &ClipCandidate) -> Emotion {
    clip.first_emotion()
        .unwrap_or_else(|| Emotion::from_audience_hint(&clip.target_audience))
}

/// Compose caption variations, an engagement question, and hashtags for
/// one clip.
///
/// Template choice is sampled from `rng`; pass a seeded generator when
/// reproducible output matters.
pub fn compose(clip: &ClipCandidate, rng: &mut impl Rng) -> CaptionBundle {
    let emotion = caption_emotion(clip);
    let line = shorten_line(&clip.hook_line);

    let templates = caption_templates(emotion);
    let mut captions = Vec::with_capacity(CAPTION_VARIATIONS);
    for _ in 0..CAPTION_VARIATIONS {
        if let Some(template) = templates.choose(rng) {
            captions.push(render(template, &line, emotion));
        }
    }

    let engagement_question = question_templates(emotion)
        .choose(rng)
        .map(|q| (*q).to_string())
        .unwrap_or_default();

    let mut hashtags: Vec<String> = BASE_HASHTAGS.iter().map(|t| t.to_string()).collect();
    hashtags.extend(emotion_hashtags(emotion).iter().map(|t| t.to_string()));
    hashtags.truncate(MAX_HASHTAGS);

    CaptionBundle {
        captions,
        engagement_question,
        hashtags,
    }
}

/// Compose bundles for a batch of clips, keyed `clip_1`, `clip_2`, ...
/// in input order.
pub fn compose_all(clips: &[ClipCandidate], rng: &mut impl Rng) -> HashMap<String, CaptionBundle> {
    clips
        .iter()
        .enumerate()
        .map(|(index, clip)| (format!("clip_{}", index + 1), compose(clip, rng)))
        .collect()
}
