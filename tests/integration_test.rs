use echopulse::analysis::extract_themes;
use echopulse::analysis::Lexicon;
use echopulse::analysis::NarrativeSummarizer;
use echopulse::analysis::ReplyAnalyzer;
use echopulse::analysis::SentimentClassifier;
use echopulse::analysis::NO_REPLIES_MESSAGE;
use echopulse::categorize_replies;
use echopulse::summarize_replies;
use echopulse::Platform;
use echopulse::ReplyCollection;
use echopulse::Result;
use serde_json::json;

const LEAD_IN: &str = "The overall tone of the comments appears ";

#[test]
fn test_empty_and_absent_replies() {
    let classifier = SentimentClassifier::default();
    let summarizer = NarrativeSummarizer::new(&classifier);

    assert_eq!(summarize_replies::<String>(&[]), "No replies to summarize.");
    assert_eq!(summarizer.summarize_optional::<String>(None), NO_REPLIES_MESSAGE);
    assert_eq!(
        summarizer.summarize(ReplyCollection::default().as_slice()),
        NO_REPLIES_MESSAGE
    );
}

#[test]
fn test_positive_duplicates() {
    let replies = ["This is amazing and wonderful", "This is amazing and wonderful"];
    let analysis = categorize_replies(&replies);
    assert_eq!((analysis.positive, analysis.negative, analysis.neutral), (2, 0, 0));

    let summary = summarize_replies(&replies);
    assert!(summary.starts_with(
        "The overall tone of the comments appears The sentiment is largely positive"
    ));
    assert!(!summary.contains("The main topics of discussion include"));
}

#[test]
fn test_balanced_counts_select_mixed() {
    let replies = ["terrible awful bug", "great job"];
    let analysis = categorize_replies(&replies);
    assert_eq!((analysis.positive, analysis.negative, analysis.neutral), (1, 1, 0));
    assert!(summarize_replies(&replies).starts_with(&format!("{LEAD_IN}The sentiment is mixed")));
}

#[test]
fn test_negative_majority_selects_critical() {
    let summary = summarize_replies(&["the app keeps crashing", "so slow", "love the colors"]);
    assert!(summary.starts_with(&format!("{LEAD_IN}The sentiment is mostly critical")));
}

#[test]
fn test_mentions_clause() {
    let summary = summarize_replies(&["hello world", "@alice said hello", "@bob agrees"]);
    assert!(summary.ends_with("The main topics of discussion include: @alice, @bob."));
}

#[test]
fn test_non_exclusive_sentiment_tally() {
    // One reply hits both lexicons and counts on both sides; no reply is skipped
    let replies = ["Love the idea but the execution is bad", "ok", "nice"];
    let analysis = categorize_replies(&replies);

    assert_eq!(analysis.positive, 1);
    assert_eq!(analysis.negative, 1);
    assert_eq!(analysis.neutral, 2);
    assert_eq!(analysis.total_increments(), replies.len() + 1);
}

#[test]
fn test_themes_order() {
    let themes = extract_themes(&["a a a", "b b"]);
    let pairs: Vec<(&str, usize)> = themes.iter().map(|t| (t.token.as_str(), t.count)).collect();
    assert_eq!(pairs, vec![("a", 3), ("b", 2)]);
}

#[test]
fn test_idempotent_summaries() {
    let replies = vec![
        "@carol this is helpful".to_string(),
        "@carol the audio has an issue".to_string(),
        "@dan thanks".to_string(),
    ];
    assert_eq!(summarize_replies(&replies), summarize_replies(&replies));
}

#[test]
fn test_parallel_callers_share_classifier() {
    let classifier = std::sync::Arc::new(SentimentClassifier::new(
        Lexicon::default_positive(),
        Lexicon::default_negative(),
    ));
    let replies = ["great stream @host", "bad audio @host", "@host @host"];
    let expected = NarrativeSummarizer::new(&classifier).summarize(&replies);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let classifier = classifier.clone();
            std::thread::spawn(move || NarrativeSummarizer::new(&classifier).summarize(&replies))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert!(expected.ends_with("The main topics of discussion include: @host."));
}

#[test]
fn test_platform_payload_to_summary() -> Result<()> {
    let payload = json!({
        "items": [{
            "snippet": {"topLevelComment": {"snippet": {"textOriginal": "Great tutorial @maker"}}},
            "replies": {"comments": [
                {"snippet": {"textOriginal": "@maker agreed, very clear"}}
            ]}
        }]
    });

    let mut replies = ReplyCollection::from_platform_payload(Platform::YouTube, &payload);
    replies.truncate_to(100);
    assert_eq!(replies.len(), 2);

    let classifier = SentimentClassifier::default();
    let analysis = ReplyAnalyzer::new(&classifier).analyze(replies.as_slice());
    assert_eq!(analysis.positive, 2);

    let summary = NarrativeSummarizer::new(&classifier).summarize(replies.as_slice());
    assert!(summary.ends_with("The main topics of discussion include: @maker."));

    let id = echopulse::source::extract_post_id(Platform::YouTube, "https://youtu.be/dQw4w9WgXcQ")?;
    assert_eq!(id, "dQw4w9WgXcQ");
    Ok(())
}
