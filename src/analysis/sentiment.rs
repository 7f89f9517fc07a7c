//! Keyword-based reply sentiment classification

use serde::Deserialize;
use serde::Serialize;

use super::lexicon::Lexicon;

/// Sentiment label for a single reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Raw lexicon hits for one reply.
///
/// Both flags may be set at once: the positive and negative scans are independent, so a reply
/// such as "great video but the audio is bad" is tallied on both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentSignal {
    pub positive: bool,
    pub negative: bool,
}

impl SentimentSignal {
    pub fn is_neutral(self) -> bool {
        !self.positive && !self.negative
    }

    pub fn is_mixed(self) -> bool {
        self.positive && self.negative
    }

    /// Single label view. The negative scan runs last, so it wins when both lexicons hit.
    pub fn label(self) -> SentimentLabel {
        if self.negative {
            SentimentLabel::Negative
        } else if self.positive {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Classifier over two injected lexicons
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    positive: Lexicon,
    negative: Lexicon,
}

impl SentimentClassifier {
    pub fn new(positive: Lexicon, negative: Lexicon) -> Self {
        Self { positive, negative }
    }

    /// Scan both lexicons against the lowercased reply
    pub fn signal(&self, reply: &str) -> SentimentSignal {
        let normalized = reply.to_lowercase();
        SentimentSignal {
            positive: self.positive.matches(&normalized),
            negative: self.negative.matches(&normalized),
        }
    }

    pub fn classify(&self, reply: &str) -> SentimentLabel {
        self.signal(reply).label()
    }

    pub fn positive_lexicon(&self) -> &Lexicon {
        &self.positive
    }

    pub fn negative_lexicon(&self) -> &Lexicon {
        &self.negative
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Lexicon::default_positive(), Lexicon::default_negative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_positive() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify("This is AMAZING and wonderful"),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn test_classify_negative() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify("terrible awful bug"),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_classify_neutral() {
        let classifier = SentimentClassifier::default();
        let signal = classifier.signal("hello world");
        assert!(signal.is_neutral());
        assert_eq!(signal.label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_both_lexicons_hit() {
        let classifier = SentimentClassifier::default();
        let signal = classifier.signal("Great video but the audio is bad");
        assert!(signal.positive);
        assert!(signal.negative);
        assert!(signal.is_mixed());
        assert_eq!(signal.label(), SentimentLabel::Negative);
    }

    #[test]
    fn test_substring_false_positive() {
        // "badge" contains "bad"
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify("got my badge today"),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_injected_lexicons() {
        let classifier = SentimentClassifier::new(Lexicon::new(["moon"]), Lexicon::new(["rug"]));
        assert_eq!(classifier.classify("to the MOON"), SentimentLabel::Positive);
        assert_eq!(classifier.classify("great stuff"), SentimentLabel::Neutral);
        assert_eq!(classifier.classify("rugpull incoming"), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }
}
