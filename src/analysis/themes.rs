//! Frequent-token theme extraction

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Number of themes kept after ranking
pub const TOP_THEMES: usize = 5;

/// A token and how often it occurred across the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub token: String,
    pub count: usize,
}

impl Theme {
    /// Mention tokens start with `@` and name another user
    pub fn is_mention(&self) -> bool {
        self.token.starts_with('@')
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Token counter that remembers first-seen order for tie-breaking
#[derive(Debug, Default)]
pub struct ThemeExtractor {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl ThemeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase the reply, split on whitespace and count every token as-is
    pub fn add_reply(&mut self, reply: &str) {
        let lowered = reply.to_lowercase();
        for token in lowered.split(is_separator).filter(|t| !t.is_empty()) {
            if let Some(&slot) = self.index.get(token) {
                self.counts[slot].1 += 1;
            } else {
                self.index.insert(token.to_string(), self.counts.len());
                self.counts.push((token.to_string(), 1));
            }
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    /// Top tokens by descending count; `sort_by` is stable so ties keep first-seen order
    pub fn top(self, limit: usize) -> Vec<Theme> {
        let mut sorted = self.counts;
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
            .into_iter()
            .take(limit)
            .map(|(token, count)| Theme { token, count })
            .collect()
    }
}

/// Top five themes across the whole collection
pub fn extract_themes<S: AsRef<str>>(replies: &[S]) -> Vec<Theme> {
    let mut extractor = ThemeExtractor::new();
    for reply in replies {
        extractor.add_reply(reply.as_ref());
    }
    extractor.top(TOP_THEMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(themes: &[Theme]) -> Vec<(&str, usize)> {
        themes.iter().map(|t| (t.token.as_str(), t.count)).collect()
    }

    #[test]
    fn test_descending_frequency() {
        let themes = extract_themes(&["a a a", "b b"]);
        assert_eq!(pairs(&themes), vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let themes = extract_themes(&["zeta alpha", "mid zeta alpha mid"]);
        assert_eq!(pairs(&themes), vec![("zeta", 2), ("alpha", 2), ("mid", 2)]);
    }

    #[test]
    fn test_limits_to_five() {
        let themes = extract_themes(&["one two three four five six seven"]);
        assert_eq!(themes.len(), TOP_THEMES);
        assert_eq!(themes[0].token, "one");
        assert_eq!(themes[4].token, "five");
    }

    #[test]
    fn test_lowercases_without_stripping_punctuation() {
        let themes = extract_themes(&["Hello, hello HELLO,"]);
        assert_eq!(pairs(&themes), vec![("hello,", 2), ("hello", 1)]);
    }

    #[test]
    fn test_empty_collection() {
        let themes = extract_themes::<&str>(&[]);
        assert!(themes.is_empty());
    }

    #[test]
    fn test_whitespace_only_reply_adds_nothing() {
        let mut extractor = ThemeExtractor::new();
        extractor.add_reply("  \t\n ");
        assert_eq!(extractor.vocabulary_size(), 0);
    }

    #[test]
    fn test_ascii_separators_split_tokens() {
        let themes = extract_themes(&["c\x1cd", "d\x1fe\x1d\x1e c"]);
        assert_eq!(pairs(&themes), vec![("c", 2), ("d", 2), ("e", 1)]);
    }

    #[test]
    fn test_mention_detection() {
        let theme = Theme {
            token: "@alice".to_string(),
            count: 1,
        };
        assert!(theme.is_mention());
        assert!(!Theme {
            token: "alice@".to_string(),
            count: 1
        }
        .is_mention());
    }
}
