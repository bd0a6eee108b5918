//! Maps free-text feelings onto a Spotify search phrase.
//!
//! Rules are checked in table order and the first rule with a keyword
//! contained in the lowercased text wins, so "happy but crying" resolves to
//! the joy phrase. Text that matches nothing is searched as-is, cut down to
//! its first few words.

/// Words kept from unmatched input.
const FALLBACK_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Joy,
    Sadness,
    Anger,
    Calm,
    Romance,
}

#[derive(Debug)]
pub struct MoodRule {
    pub mood: Mood,
    pub keywords: &'static [&'static str],
    pub phrase: &'static str,
}

impl MoodRule {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

pub const MOOD_RULES: &[MoodRule] = &[
    MoodRule {
        mood: Mood::Joy,
        keywords: &["happy", "joy", "excited"],
        phrase: "feel good upbeat",
    },
    MoodRule {
        mood: Mood::Sadness,
        keywords: &["sad", "down", "tear"],
        phrase: "sad mellow",
    },
    MoodRule {
        mood: Mood::Anger,
        keywords: &["angry", "rage", "mad"],
        phrase: "angry heavy intense",
    },
    MoodRule {
        mood: Mood::Calm,
        keywords: &["relax", "calm", "chill"],
        phrase: "chill acoustic calm",
    },
    MoodRule {
        mood: Mood::Romance,
        keywords: &["romantic", "love"],
        phrase: "romantic love slow",
    },
];

/// First matching rule for `text`, if any.
pub fn classify(text: &str) -> Option<&'static MoodRule> {
    let lowered = text.to_lowercase();
    MOOD_RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Resolves `text` to the search query sent to Spotify.
///
/// Never empty for non-blank input.
pub fn resolve(text: &str) -> String {
    if let Some(rule) = classify(text) {
        return rule.phrase.to_string();
    }

    text.to_lowercase()
        .split_whitespace()
        .take(FALLBACK_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}
