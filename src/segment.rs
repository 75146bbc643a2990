use std::sync::OnceLock;

use regex::Regex;

/// Fallback narrative used when the story is empty or whitespace-only.
/// Guarantees the pipeline never runs on an empty beat set.
pub const DEFAULT_NARRATIVE: [&str; 3] = [
    "AI learns patterns from large amounts of data.",
    "It uses that experience to predict outcomes in new situations.",
    "Feedback loops help the system adjust and improve over time.",
];

/// Sentence boundary: terminal punctuation, whitespace, then an ASCII
/// uppercase letter. Deliberately naive; it mis-splits abbreviations and
/// under-splits lowercase continuations, and callers depend on exactly
/// this behavior.
fn boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+[A-Z]").expect("static regex must compile"))
}

/// Split a story into ordered narration beats, one sentence each.
pub fn segment_story(story: &str) -> Vec<String> {
    let normalized = story.replace("\r\n", "\n").replace('\r', "\n");
    let lines = normalized
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    if lines.is_empty() {
        return DEFAULT_NARRATIVE.iter().map(|s| (*s).to_owned()).collect();
    }

    let mut beats = Vec::new();
    for line in lines {
        for sentence in split_sentences(line) {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                beats.push(sentence.to_owned());
            }
        }
    }
    beats
}

/// Cut at each boundary match, keeping the punctuation with the preceding
/// sentence. The regex crate has no lookahead, so the next sentence start
/// is recovered from the match end (the uppercase letter is one ASCII byte).
fn split_sentences(line: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for found in boundary_regex().find_iter(line) {
        let cut = found.start() + 1;
        sentences.push(&line[start..cut]);
        start = found.end() - 1;
    }
    sentences.push(&line[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_story_yields_default_narrative() {
        assert_eq!(segment_story(""), DEFAULT_NARRATIVE.to_vec());
        assert_eq!(segment_story("  \n\n  "), DEFAULT_NARRATIVE.to_vec());
    }

    #[test]
    fn splits_on_punctuation_before_uppercase() {
        assert_eq!(
            segment_story("AI learns from data. It predicts outcomes."),
            vec!["AI learns from data.", "It predicts outcomes."]
        );
    }

    #[test]
    fn keeps_lowercase_continuations_joined() {
        assert_eq!(
            segment_story("it works. mostly fine."),
            vec!["it works. mostly fine."]
        );
    }

    #[test]
    fn splits_abbreviations_as_documented() {
        // Known limitation, kept on purpose.
        assert_eq!(
            segment_story("Ask Dr. Smith about it."),
            vec!["Ask Dr.", "Smith about it."]
        );
    }

    #[test]
    fn lines_flatten_in_document_order() {
        assert_eq!(
            segment_story("First line here.\n\nSecond! Third one?\n"),
            vec!["First line here.", "Second!", "Third one?"]
        );
    }

    #[test]
    fn question_and_exclamation_are_boundaries() {
        assert_eq!(
            segment_story("Really? Yes! Sure."),
            vec!["Really?", "Yes!", "Sure."]
        );
    }
}
