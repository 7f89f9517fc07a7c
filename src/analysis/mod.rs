//! Reply categorization and summarization engine
//!
//! Pipeline: [`SentimentClassifier`] and [`ThemeExtractor`] feed [`ReplyAnalyzer`], whose
//! [`AnalysisResult`] is rendered by [`NarrativeSummarizer`]. Everything here is synchronous and
//! pure; the lexicons are the only shared data and are never mutated.

pub mod analyzer;
pub mod lexicon;
pub mod narrative;
pub mod sentiment;
pub mod themes;

pub use analyzer::AnalysisResult;
pub use analyzer::ReplyAnalyzer;
pub use lexicon::Lexicon;
pub use narrative::NarrativeSummarizer;
pub use narrative::Tone;
pub use narrative::NO_REPLIES_MESSAGE;
pub use sentiment::SentimentClassifier;
pub use sentiment::SentimentLabel;
pub use sentiment::SentimentSignal;
pub use themes::extract_themes;
pub use themes::Theme;
pub use themes::ThemeExtractor;

/// Summarize replies with the stock lexicons. Total over every input, including empty.
pub fn summarize_replies<S: AsRef<str>>(replies: &[S]) -> String {
    let classifier = SentimentClassifier::default();
    NarrativeSummarizer::new(&classifier).summarize(replies)
}

/// Categorize replies with the stock lexicons
pub fn categorize_replies<S: AsRef<str>>(replies: &[S]) -> AnalysisResult {
    let classifier = SentimentClassifier::default();
    ReplyAnalyzer::new(&classifier).analyze(replies)
}
