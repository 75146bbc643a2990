use std::collections::HashMap;

use crate::lexicon::{is_stop_word, tokenize};

const MAX_DERIVED_KEYWORDS: usize = 8;

/// Split the caller's raw keyword field on commas, semicolons, and
/// newlines into a lowercased, order-preserving unique list.
pub fn split_raw_keywords(raw: &str) -> Vec<String> {
    let mut keywords = Vec::new();
    for piece in raw.split(|c| c == ',' || c == ';' || c == '\n') {
        let piece = piece.trim().to_lowercase();
        if !piece.is_empty() && !keywords.contains(&piece) {
            keywords.push(piece);
        }
    }
    keywords
}

/// Merge caller keywords (priority, original order) with keywords derived
/// from the narrative text (fallback, frequency order). De-duplicated
/// case-insensitively, first occurrence wins, so a caller keyword
/// suppresses a derived duplicate.
pub fn derive_keywords(topic: &str, story: &str, raw_keywords: &str) -> Vec<String> {
    let mut merged = split_raw_keywords(raw_keywords);
    for derived in frequency_keywords(topic, story) {
        if !merged.iter().any(|k| k.eq_ignore_ascii_case(&derived)) {
            merged.push(derived);
        }
    }
    merged.iter().map(|k| normalize_ai(k)).collect::<Vec<_>>()
}

/// Top content words of `topic + ". " + story` by descending frequency,
/// ties broken by first encounter. Stop words and tokens of one or two
/// characters are excluded.
fn frequency_keywords(topic: &str, story: &str) -> Vec<String> {
    let text = format!("{topic}. {story}");
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order = Vec::new();
    for token in tokenize(&text) {
        if token.len() <= 2 || is_stop_word(&token) {
            continue;
        }
        if !counts.contains_key(&token) {
            order.push(token.clone());
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    // Stable sort keeps first-encounter order within equal counts.
    let mut ranked = order;
    ranked.sort_by_key(|token| std::cmp::Reverse(counts[token]));
    ranked.truncate(MAX_DERIVED_KEYWORDS);
    ranked
}

/// Rewrite the word "ai" to "AI" wherever it stands alone inside an entry,
/// case-insensitively.
fn normalize_ai(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|word| {
            if word.eq_ignore_ascii_case("ai") {
                "AI"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_keywords_come_first_in_original_order() {
        let keywords = derive_keywords("", "", "Robots, vision; speech\nrobots");
        assert_eq!(keywords, vec!["robots", "vision", "speech"]);
    }

    #[test]
    fn derived_keywords_rank_by_frequency_then_first_seen() {
        let keywords = derive_keywords("", "data beats data. models need data. models win.", "");
        assert_eq!(keywords[0], "data");
        assert_eq!(keywords[1], "models");
        // "beats", "need", "win" all occur once; first-seen order holds.
        assert_eq!(&keywords[2..], ["beats", "need", "win"]);
    }

    #[test]
    fn caller_entry_suppresses_derived_duplicate() {
        let keywords = derive_keywords("Neural Networks", "networks networks networks", "Networks");
        assert_eq!(keywords, vec!["networks", "neural"]);
    }

    #[test]
    fn ai_is_normalized_everywhere() {
        let keywords = derive_keywords("", "", "AI, ai, ai ethics, Machine Learning");
        assert_eq!(keywords, vec!["AI", "AI ethics", "machine learning"]);
    }

    #[test]
    fn at_most_eight_derived_keywords() {
        let story = "alpha bravo charlie delta echo foxtrot golf hotel india juliet";
        assert_eq!(derive_keywords("", story, "").len(), 8);
    }

    #[test]
    fn short_tokens_and_stop_words_are_excluded() {
        let keywords = derive_keywords("The AI of Oz", "it is an ox", "");
        assert!(keywords.is_empty());
    }
}
