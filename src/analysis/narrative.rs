//! Narrative summary rendering
//!
//! The summary is a fixed lead-in, one of three prose templates chosen by comparing the
//! positive and negative tallies, and an optional clause listing the `@` mentions that made it
//! into the top themes.

use serde::Deserialize;
use serde::Serialize;

use super::analyzer::AnalysisResult;
use super::analyzer::ReplyAnalyzer;
use super::sentiment::SentimentClassifier;

/// Returned for an empty or absent reply collection
pub const NO_REPLIES_MESSAGE: &str = "No replies to summarize.";

/// Prefix of every non-empty summary. The template body follows with no separator.
pub const SUMMARY_LEAD_IN: &str = "The overall tone of the comments appears ";

pub const TOPICS_LEAD_IN: &str = "The main topics of discussion include: ";

const POSITIVE_TEMPLATE: &str = "The sentiment is largely positive, with many replies appreciating the content or providing supportive feedback. \
A significant number of commenters expressed admiration and approval for the subject matter, highlighting aspects they found impressive or inspiring. \
Users have praised the post for its quality, clarity, or overall impact, and many have left encouraging comments, showing their satisfaction and encouraging others to engage with the content. \
There’s a clear sense of appreciation and positivity toward the content, with users expressing their excitement and support. ";

const CRITICAL_TEMPLATE: &str = "The sentiment is mostly critical, with concerns or negative opinions raised by several commenters. \
A large portion of replies conveyed dissatisfaction or disagreement with the content, raising issues or concerns related to its accuracy, approach, or implications. \
Commenters have voiced frustration, disappointment, or even anger, criticizing certain aspects or expressing doubts about the validity or relevance of the content. \
This critical feedback often suggests areas for improvement or calls for further clarification, reflecting a negative overall sentiment from the majority of the replies. ";

const MIXED_TEMPLATE: &str = "The sentiment is mixed, with both supportive and critical viewpoints equally expressed. \
The replies exhibit a blend of approval and disapproval, where users both praise and criticize the content. \
Some commenters have expressed positive opinions, highlighting what they liked or appreciated, while others have raised concerns or pointed out flaws. \
This balance of sentiments creates a diverse conversation, where users share different perspectives and engage in debates, with both constructive feedback and critiques. \
It reflects a situation where the content has sparked a wide range of reactions, from admiration to skepticism or disagreement ";

/// Overall tone of a reply collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Critical,
    Mixed,
}

impl Tone {
    /// Compare raw tallies; neutral replies never influence the tone
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Self::Positive,
            std::cmp::Ordering::Less => Self::Critical,
            std::cmp::Ordering::Equal => Self::Mixed,
        }
    }

    pub fn from_analysis(analysis: &AnalysisResult) -> Self {
        Self::from_counts(analysis.positive, analysis.negative)
    }

    pub fn template(self) -> &'static str {
        match self {
            Self::Positive => POSITIVE_TEMPLATE,
            Self::Critical => CRITICAL_TEMPLATE,
            Self::Mixed => MIXED_TEMPLATE,
        }
    }
}

/// Render the narrative for an already computed analysis
pub fn render(analysis: &AnalysisResult) -> String {
    let mut summary = String::from(SUMMARY_LEAD_IN);
    summary.push_str(Tone::from_analysis(analysis).template());

    let mentions = analysis.mentions();
    if !mentions.is_empty() {
        summary.push_str(TOPICS_LEAD_IN);
        summary.push_str(&mentions.join(", "));
        summary.push('.');
    }

    summary
}

/// Summarizes reply collections with a shared classifier
#[derive(Debug, Clone, Copy)]
pub struct NarrativeSummarizer<'a> {
    analyzer: ReplyAnalyzer<'a>,
}

impl<'a> NarrativeSummarizer<'a> {
    pub fn new(classifier: &'a SentimentClassifier) -> Self {
        Self {
            analyzer: ReplyAnalyzer::new(classifier),
        }
    }

    pub fn summarize<S: AsRef<str>>(&self, replies: &[S]) -> String {
        self.summarize_with_analysis(replies).0
    }

    /// Summary plus the analysis it was rendered from; no analysis runs for empty input
    pub fn summarize_with_analysis<S: AsRef<str>>(
        &self,
        replies: &[S],
    ) -> (String, Option<AnalysisResult>) {
        if replies.is_empty() {
            return (NO_REPLIES_MESSAGE.to_string(), None);
        }
        let analysis = self.analyzer.analyze(replies);
        (render(&analysis), Some(analysis))
    }

    /// Absent input behaves like an empty collection
    pub fn summarize_optional<S: AsRef<str>>(&self, replies: Option<&[S]>) -> String {
        replies.map_or_else(|| NO_REPLIES_MESSAGE.to_string(), |r| self.summarize(r))
    }
}
