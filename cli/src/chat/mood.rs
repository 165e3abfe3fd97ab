//! # Personality Selector
//!
//! File: cli/src/chat/mood.rs
//!
//! Picks a mood for the reply from what the user typed and decorates the
//! reply with the matching suffix. Rules are checked in priority order:
//! sadness, then humor, then a question mark.
//!
use std::fmt;

const SAD_KEYWORDS: &[&str] = &["sad", "upset", "depressed", "unhappy", "lonely"];
const HUMOR_KEYWORDS: &[&str] = &["joke", "haha", "lol", "funny", "kkk"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Caring,
    Funny,
    Curious,
    Serious,
}

impl Mood {
    /// Suffix appended to every reply given in this mood.
    pub fn suffix(self) -> &'static str {
        match self {
            Mood::Caring => " 💙",
            Mood::Funny => " 😂",
            Mood::Curious => " 🤔",
            Mood::Serious => "",
        }
    }

    /// Returns `text` with this mood's suffix.
    pub fn apply(self, text: &str) -> String {
        format!("{}{}", text, self.suffix())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Mood::Caring => "caring",
            Mood::Funny => "funny",
            Mood::Curious => "curious",
            Mood::Serious => "serious",
        };
        f.write_str(tag)
    }
}

/// Classifies `text`. Keywords match as substrings of the lowercased text.
pub fn detect_mood(text: &str) -> Mood {
    let lowered = text.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

    if contains_any(SAD_KEYWORDS) {
        Mood::Caring
    } else if contains_any(HUMOR_KEYWORDS) {
        Mood::Funny
    } else if text.contains('?') {
        Mood::Curious
    } else {
        Mood::Serious
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sadness_beats_humor() {
        assert_eq!(detect_mood("I'm SAD but that joke was funny"), Mood::Caring);
    }

    #[test]
    fn test_humor() {
        assert_eq!(detect_mood("haha tell me a joke?"), Mood::Funny);
    }

    #[test]
    fn test_question_is_curious() {
        assert_eq!(detect_mood("What time is it?"), Mood::Curious);
    }

    #[test]
    fn test_plain_statement_is_serious() {
        assert_eq!(detect_mood("The train leaves at noon."), Mood::Serious);
    }

    #[test]
    fn test_apply_suffixes() {
        assert_eq!(Mood::Caring.apply("Hi"), "Hi 💙");
        assert_eq!(Mood::Funny.apply("Hi"), "Hi 😂");
        assert_eq!(Mood::Curious.apply("Hi"), "Hi 🤔");
        assert_eq!(Mood::Serious.apply("Hi"), "Hi");
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(Mood::Caring.to_string(), "caring");
        assert_eq!(Mood::Serious.to_string(), "serious");
    }
}
