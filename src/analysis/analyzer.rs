//! Reply analysis: sentiment tallies plus top themes

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use super::sentiment::SentimentClassifier;
use super::sentiment::SentimentSignal;
use super::themes::Theme;
use super::themes::ThemeExtractor;
use super::themes::TOP_THEMES;

/// Aggregate result of one analysis call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Up to five themes ranked by descending frequency
    pub themes: Vec<Theme>,
}

impl AnalysisResult {
    /// Total tally increments. Exceeds the reply count by the number of replies that hit
    /// both lexicons.
    pub fn total_increments(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Mention tokens among the top themes, in rank order
    pub fn mentions(&self) -> Vec<&str> {
        self.themes
            .iter()
            .filter(|theme| theme.is_mention())
            .map(|theme| theme.token.as_str())
            .collect()
    }
}

/// Drives the classifier and the theme extractor over a reply collection
#[derive(Debug, Clone, Copy)]
pub struct ReplyAnalyzer<'a> {
    classifier: &'a SentimentClassifier,
}

impl<'a> ReplyAnalyzer<'a> {
    pub fn new(classifier: &'a SentimentClassifier) -> Self {
        Self { classifier }
    }

    pub fn analyze<S: AsRef<str>>(&self, replies: &[S]) -> AnalysisResult {
        let mut result = AnalysisResult::default();
        let mut extractor = ThemeExtractor::new();

        for reply in replies {
            let reply = reply.as_ref();
            tally(&mut result, self.classifier.signal(reply));
            extractor.add_reply(reply);
        }

        result.themes = extractor.top(TOP_THEMES);

        debug!(
            replies = replies.len(),
            positive = result.positive,
            negative = result.negative,
            neutral = result.neutral,
            themes = result.themes.len(),
            "Analyzed replies"
        );

        result
    }
}

/// Non-exclusive increment: a reply hitting both lexicons counts on both sides
fn tally(result: &mut AnalysisResult, signal: SentimentSignal) {
    if signal.positive {
        result.positive += 1;
    }
    if signal.negative {
        result.negative += 1;
    }
    if signal.is_neutral() {
        result.neutral += 1;
    }
}
