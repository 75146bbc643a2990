use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Caller-supplied production brief. Every field is free text; categorical
/// fields degrade to documented defaults downstream, so a `Brief` is never
/// rejected once it deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Brief {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub aspect_ratio: String,
    #[serde(default)]
    pub mood: String,
    /// Comma/semicolon/newline separated priority keywords.
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub language: String,
}

impl Brief {
    /// Encode as a URL query string. Empty fields are omitted; decoding an
    /// encoded brief reproduces an equivalent brief either way.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in [
            ("topic", &self.topic),
            ("story", &self.story),
            ("aspect_ratio", &self.aspect_ratio),
            ("mood", &self.mood),
            ("keywords", &self.keywords),
            ("language", &self.language),
        ] {
            if !value.is_empty() {
                serializer.append_pair(name, value);
            }
        }
        serializer.finish()
    }

    /// Decode from a URL query string. Accepts the `aspectRatio` and
    /// `related_keywords` aliases; the first accepted parameter wins when
    /// duplicates are present.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut brief = Brief::default();
        let mut seen_topic = false;
        let mut seen_story = false;
        let mut seen_aspect = false;
        let mut seen_mood = false;
        let mut seen_keywords = false;
        let mut seen_language = false;

        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match name.as_ref() {
                "topic" if !seen_topic => {
                    brief.topic = value;
                    seen_topic = true;
                }
                "story" if !seen_story => {
                    brief.story = value;
                    seen_story = true;
                }
                "aspect_ratio" | "aspectRatio" if !seen_aspect => {
                    brief.aspect_ratio = value;
                    seen_aspect = true;
                }
                "mood" if !seen_mood => {
                    brief.mood = value;
                    seen_mood = true;
                }
                "keywords" | "related_keywords" if !seen_keywords => {
                    brief.keywords = value;
                    seen_keywords = true;
                }
                "language" if !seen_language => {
                    brief.language = value;
                    seen_language = true;
                }
                _ => {}
            }
        }
        brief
    }
}

/// Load a brief from a YAML (or JSON, a YAML subset) file, reporting the
/// parse location on failure.
pub fn load_brief(path: &Path) -> Result<Brief> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read brief {}", path.display()))?;
    serde_yaml::from_str(&contents).map_err(|error| {
        let location = error
            .location()
            .map(|location| format!("line {}, column {}", location.line(), location.column()))
            .unwrap_or_else(|| "unknown location".to_owned());
        anyhow!(
            "failed to parse yaml in {} at {}: {}",
            path.display(),
            location,
            error
        )
    })
}
