//! Small lexical helpers shared by the keyword deriver and scene planner.
//! English-only on purpose: the `language` option changes a display label,
//! never tokenization.

/// Fixed closed set of common English function words, sorted for
/// binary_search. Not locale-aware.
const STOP_WORDS: &[&str] = &[
    "a", "about", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "if",
    "in", "into", "is", "it", "its", "of", "on", "or", "over", "so", "that", "the", "then",
    "these", "this", "those", "to", "was", "we", "were", "with", "you",
];

/// Lowercases, strips everything outside `[a-z0-9]` and whitespace, then
/// splits on whitespace. Empty tokens are dropped; "don't" tokenizes as
/// "dont".
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>();
    cleaned
        .split_whitespace()
        .map(str::to_owned)
        .collect::<Vec<_>>()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Uppercases the first character only. Empty input stays empty.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
