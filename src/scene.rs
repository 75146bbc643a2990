use serde::{Deserialize, Serialize};

use crate::lexicon::{capitalize, clamp};
use crate::profiles::{AspectProfile, MoodProfile};

/// Approximate spoken words per second used for duration estimates.
const SPEAKING_RATE: f64 = 2.7;
/// Per-scene duration clamp, in whole seconds.
const MIN_SCENE_SECONDS: f64 = 4.0;
const MAX_SCENE_SECONDS: f64 = 9.0;
/// Overlay text keeps at most this many leading content words.
const OVERLAY_WORD_LIMIT: usize = 6;
/// Keyword of last resort when the keyword list is empty.
const FALLBACK_KEYWORD: &str = "insight";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: u32,
    pub label: String,
    pub voiceover: String,
    pub duration: String,
    pub visuals: String,
    pub overlay: String,
    pub assets: Vec<String>,
}

/// Everything a planning rule may draw on for one beat.
struct RuleContext<'a> {
    beat_lower: &'a str,
    keyword: &'a str,
    mood: &'a MoodProfile,
    aspect: &'a AspectProfile,
}

/// Ordered substring-trigger rule. First rule whose trigger appears in the
/// lowercased beat wins; evaluation order is the table order.
struct VisualRule {
    triggers: &'static [&'static str],
    render: fn(&RuleContext) -> String,
}

const VISUAL_RULES: &[VisualRule] = &[
    VisualRule {
        triggers: &["data", "patterns"],
        render: |ctx| {
            format!(
                "Animated neural-network lattice pulsing over streams of data, {}, {}.",
                ctx.mood.motion, ctx.mood.lighting
            )
        },
    },
    VisualRule {
        triggers: &["predict", "outcomes"],
        render: |ctx| {
            format!(
                "Forecast dashboard filling with projected outcomes, staged in a {}.",
                ctx.aspect.framing
            )
        },
    },
    VisualRule {
        triggers: &["learn", "training"],
        render: |ctx| {
            format!(
                "Training loop visualized as repeated passes over examples, carried by {}.",
                ctx.mood.motion
            )
        },
    },
    VisualRule {
        triggers: &["experience", "humans"],
        render: |ctx| {
            format!(
                "Split-screen contrast of a person and a machine working the same problem, under {}.",
                ctx.mood.lighting
            )
        },
    },
];

struct AssetRule {
    triggers: &'static [&'static str],
    asset: &'static str,
}

const ASSET_RULES: &[AssetRule] = &[
    AssetRule {
        triggers: &["data"],
        asset: "Overlay graph: animated line chart tracing the data in the narration.",
    },
    AssetRule {
        triggers: &["predict"],
        asset: "HUD-style probability bars ticking toward the predicted outcome.",
    },
    AssetRule {
        triggers: &["adjust", "improves"],
        asset: "Progress bar sweeping upward as the model refines itself.",
    },
];

/// Plan one scene per beat, order preserved, ids 1-based.
pub fn plan_scenes(
    beats: &[String],
    keywords: &[String],
    mood: &MoodProfile,
    aspect: &AspectProfile,
) -> Vec<Scene> {
    beats
        .iter()
        .enumerate()
        .map(|(index, beat)| plan_scene(index, beats.len(), beat, keywords, mood, aspect))
        .collect::<Vec<_>>()
}

fn plan_scene(
    index: usize,
    total: usize,
    beat: &str,
    keywords: &[String],
    mood: &MoodProfile,
    aspect: &AspectProfile,
) -> Scene {
    let beat_lower = beat.to_lowercase();
    let keyword = select_keyword(&beat_lower, keywords, index);
    let ctx = RuleContext {
        beat_lower: &beat_lower,
        keyword: &keyword,
        mood,
        aspect,
    };

    Scene {
        id: (index + 1) as u32,
        label: classify_beat(index, total, &beat_lower),
        voiceover: beat.to_owned(),
        duration: estimate_duration(beat),
        visuals: visual_direction(&ctx),
        overlay: overlay_text(beat, &keyword),
        assets: support_assets(&ctx),
    }
}

/// First keyword (list order) appearing in the beat, else round-robin by
/// beat index, else "insight".
fn select_keyword(beat_lower: &str, keywords: &[String], index: usize) -> String {
    if let Some(found) = keywords
        .iter()
        .find(|keyword| beat_lower.contains(&keyword.to_lowercase()))
    {
        return found.clone();
    }
    if keywords.is_empty() {
        FALLBACK_KEYWORD.to_owned()
    } else {
        keywords[index % keywords.len()].clone()
    }
}

/// Ordered classification, first match wins. The opening rule precedes the
/// closing rule, so a single-beat story is an "Opening Hook".
fn classify_beat(index: usize, total: usize, beat_lower: &str) -> String {
    if index == 0 {
        return "Opening Hook".to_owned();
    }
    if index + 1 == total {
        return "Closing Insight".to_owned();
    }
    if beat_lower.contains("learns") || beat_lower.contains("learning") {
        return "Learning Beat".to_owned();
    }
    if beat_lower.contains("predict") || beat_lower.contains("recognize") {
        return "Application Beat".to_owned();
    }
    format!("Beat {}", index + 1)
}

/// Word count over speaking rate, rounded, clamped to [4, 9] seconds.
fn estimate_duration(beat: &str) -> String {
    let words = beat.split_whitespace().count() as f64;
    let seconds = clamp(
        (words / SPEAKING_RATE).round(),
        MIN_SCENE_SECONDS,
        MAX_SCENE_SECONDS,
    );
    format!("{}s", seconds as u32)
}

fn visual_direction(ctx: &RuleContext) -> String {
    for rule in VISUAL_RULES {
        if rule
            .triggers
            .iter()
            .any(|trigger| ctx.beat_lower.contains(trigger))
        {
            return (rule.render)(ctx);
        }
    }
    format!(
        "Abstract motion graphics built around {}, blending {} into {}.",
        ctx.keyword, ctx.mood.color_palette[0], ctx.mood.color_palette[1]
    )
}

/// Leading content words of the beat, punctuation stripped, capped at six.
/// Falls back to the keyword when nothing survives the filter.
fn overlay_text(beat: &str, keyword: &str) -> String {
    let stripped = beat
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>();
    let overlay = stripped
        .split_whitespace()
        .filter(|word| word.len() > 2)
        .take(OVERLAY_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join(" ");
    if overlay.is_empty() {
        format!("Key idea: {}", capitalize(keyword))
    } else {
        capitalize(&overlay)
    }
}

/// Triggered assets in table order, then the unconditional B-roll entry,
/// so the list is never empty.
fn support_assets(ctx: &RuleContext) -> Vec<String> {
    let mut assets = Vec::new();
    for rule in ASSET_RULES {
        if rule
            .triggers
            .iter()
            .any(|trigger| ctx.beat_lower.contains(trigger))
        {
            assets.push(rule.asset.to_owned());
        }
    }
    assets.push(format!(
        "B-roll: contextual visuals highlighting {}.",
        ctx.keyword
    ));
    assets
}
