//! Keyword lexicons used for substring sentiment detection

/// Stock positive keywords, in scan order
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "awesome",
    "fantastic",
    "incredible",
    "wonderful",
    "brilliant",
    "outstanding",
    "thank",
    "appreciate",
    "grateful",
    "love",
    "admire",
    "respect",
    "support",
    "happy",
    "proud",
    "inspiring",
    "encouraging",
    "hopeful",
    "positive",
    "motivated",
    "excited",
    "yay",
    "wow",
    "fun",
    "enjoy",
    "laugh",
    "like",
    "thrilled",
    "helpful",
    "insightful",
    "informative",
    "useful",
    "educational",
    "clear",
    "simple",
    "effective",
    "innovative",
    "creative",
    "clever",
    "advanced",
    "futuristic",
    "revolutionary",
    "fast",
    "reliable",
    "responsive",
    "friendly",
    "patient",
    "accommodating",
    "healthy",
    "safe",
    "secure",
    "caring",
    "beneficial",
];

/// Stock negative keywords, in scan order. Multi-word entries match as plain substrings.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "terrible",
    "horrible",
    "awful",
    "poor",
    "worse",
    "worst",
    "hate",
    "dislike",
    "annoyed",
    "frustrating",
    "disappointing",
    "upset",
    "angry",
    "irritated",
    "sad",
    "sorry",
    "regret",
    "pity",
    "hurt",
    "unfortunate",
    "worried",
    "depressed",
    "useless",
    "unhelpful",
    "unnecessary",
    "pointless",
    "boring",
    "irrelevant",
    "problem",
    "issue",
    "fail",
    "failure",
    "broken",
    "wrong",
    "misleading",
    "unclear",
    "mistake",
    "unsafe",
    "harmful",
    "side effects",
    "risky",
    "not effective",
    "slow",
    "lag",
    "crash",
    "error",
    "bug",
    "glitch",
    "outdated",
    "incompatible",
    "rude",
    "unresponsive",
    "long wait",
    "unresolved",
    "unprofessional",
];

/// An immutable, ordered set of lowercase keywords.
///
/// Order is preserved because scans stop at the first hit. Duplicates are dropped on
/// construction, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    keywords: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon, lowercasing and trimming every keyword
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() || out.contains(&keyword) {
                continue;
            }
            out.push(keyword);
        }
        Self { keywords: out }
    }

    pub fn default_positive() -> Self {
        Self::new(POSITIVE_KEYWORDS)
    }

    pub fn default_negative() -> Self {
        Self::new(NEGATIVE_KEYWORDS)
    }

    /// First keyword (in scan order) contained in `normalized`, which must already be lowercase
    pub fn first_match(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| normalized.contains(keyword))
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.first_match(normalized).is_some()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
