//! # Topic Extraction
//!
//! File: cli/src/chat/topics.rs
//!
//! Pulls a topic phrase out of a sentence with a fixed, ordered list of
//! patterns. The first pattern that matches anywhere in the lowercased text
//! wins, so more specific phrasings must come before general ones.
//!
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Ordered topic patterns; each captures the topic in group 1.
const TOPIC_PATTERNS: &[&str] = &[
    r"i like (.+)",
    r"i adore (.+)",
    r"i love (.+)",
    r"my favorite color is (.+)",
    r"my favorite movie is (.+)",
    r"i find (.+) interesting",
    r"i am learning about (.+)",
    r"i'm learning about (.+)",
];

static TOPIC_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    TOPIC_PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Returns the topic of `text`, or `None` when no pattern applies.
pub fn extract_topic(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    let lowered = lowered.trim();

    TOPIC_REGEXES.iter().find_map(|regex| {
        let captured = regex.captures(lowered)?.get(1)?.as_str().trim();
        let topic = captured
            .strip_suffix(|c: char| matches!(c, '.' | '!' | '?'))
            .unwrap_or(captured)
            .to_string();
        debug!("Topic pattern '{}' matched: '{}'", regex.as_str(), topic);
        Some(topic)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_compiles() {
        assert_eq!(TOPIC_REGEXES.len(), TOPIC_PATTERNS.len());
    }

    #[test]
    fn test_extract_like_strips_period() {
        assert_eq!(extract_topic("I like turtles.").as_deref(), Some("turtles"));
    }

    #[test]
    fn test_extract_find_interesting() {
        assert_eq!(
            extract_topic("I find quantum physics interesting").as_deref(),
            Some("quantum physics")
        );
    }

    #[test]
    fn test_extract_adore() {
        assert_eq!(extract_topic("I adore painting").as_deref(), Some("painting"));
    }

    #[test]
    fn test_extract_no_topic() {
        assert_eq!(extract_topic("hello there"), None);
        assert_eq!(extract_topic(""), None);
    }

    #[test]
    fn test_extract_only_one_trailing_mark_removed() {
        assert_eq!(extract_topic("I love pizza!!").as_deref(), Some("pizza!"));
    }

    #[test]
    fn test_extract_earlier_pattern_wins() {
        // "i like" is tried before "my favorite color is".
        assert_eq!(
            extract_topic("My favorite color is blue and I like green").as_deref(),
            Some("green")
        );
    }

    #[test]
    fn test_extract_favorite_movie_and_learning() {
        assert_eq!(
            extract_topic("  My favorite movie is Alien?  ").as_deref(),
            Some("alien")
        );
        assert_eq!(
            extract_topic("I am learning about Rust lifetimes").as_deref(),
            Some("rust lifetimes")
        );
    }

    #[test]
    fn test_extract_matches_mid_sentence() {
        assert_eq!(
            extract_topic("well, i love long walks").as_deref(),
            Some("long walks")
        );
    }
}
