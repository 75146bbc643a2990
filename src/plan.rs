use serde::Serialize;

use crate::brief::Brief;
use crate::keywords::derive_keywords;
use crate::lexicon::capitalize;
use crate::profiles::{language_label, AspectRatio, Mood};
use crate::scene::{plan_scenes, Scene};
use crate::segment::segment_story;

/// The assembled production plan. Immutable once produced; regenerating
/// from a new brief replaces it wholesale.
#[derive(Debug, Serialize)]
pub struct Plan {
    pub title: String,
    pub subtitle: String,
    pub mood: &'static str,
    pub aspect_ratio: &'static str,
    pub language: &'static str,
    pub pacing: &'static str,
    pub audio: &'static str,
    pub color_palette: [&'static str; 3],
    pub keywords: Vec<String>,
    pub scenes: Vec<Scene>,
    pub hook: String,
    pub call_to_action: String,
    pub narration_style: String,
    pub production_notes: [String; 3],
}

/// Compile a brief into a plan. Total and deterministic: unknown
/// categorical values resolve to defaults and an empty story resolves to
/// the default narrative, so this never fails.
pub fn generate(brief: &Brief) -> Plan {
    let mood = Mood::from_keyword(&brief.mood);
    let aspect = AspectRatio::from_keyword(&brief.aspect_ratio);
    let mood_profile = mood.profile();
    let aspect_profile = aspect.profile();
    let language = language_label(&brief.language);

    let beats = segment_story(&brief.story);
    let keywords = derive_keywords(&brief.topic, &brief.story, &brief.keywords);
    let scenes = plan_scenes(&beats, &keywords, mood_profile, aspect_profile);

    // segment_story never returns an empty beat set, so indexing is safe.
    let first = &scenes[0];
    let last = &scenes[scenes.len() - 1];

    let total_words: usize = beats.iter().map(|beat| beat.split_whitespace().count()).sum();
    let mean_words = (total_words as f64 / beats.len() as f64).round() as u32;

    let animated_keywords = keywords
        .iter()
        .take(3)
        .map(|keyword| capitalize(keyword))
        .collect::<Vec<_>>()
        .join(", ");

    Plan {
        title: format!("{} — {}", brief.topic, capitalize(mood_profile.voice_tone)),
        subtitle: format!(
            "A {} explainer narrated in {}, framed for {}.",
            mood_profile.pacing,
            language.to_lowercase(),
            aspect.keyword()
        ),
        mood: mood.keyword(),
        aspect_ratio: aspect.keyword(),
        language,
        pacing: mood_profile.pacing,
        audio: mood_profile.audio,
        color_palette: mood_profile.color_palette,
        hook: format!("{} \"{}\"", mood_profile.hook_verb, first.voiceover),
        call_to_action: format!(
            "Close on \"{}\" and invite viewers to follow for the next explainer.",
            last.voiceover
        ),
        narration_style: format!(
            "{} delivery in {}, averaging {} words per beat.",
            capitalize(mood_profile.voice_tone),
            language,
            mean_words
        ),
        production_notes: [
            aspect_profile.safe_zone.to_owned(),
            format!(
                "Audio mix: {}, dialogue normalized to -18 LUFS.",
                mood_profile.audio
            ),
            format!(
                "Animate keywords {} with {}.",
                animated_keywords, mood_profile.motion
            ),
        ],
        keywords,
        scenes,
    }
}
