//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `echopulse` CLI

use crate::analysis::AnalysisResult;
use crate::analysis::Tone;
use crate::AppConfig;

/// Safely truncate a string at character boundary (not byte boundary)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Share of `count` in `total` as a percentage, zero for an empty total
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Render the analysis table as text
pub fn format_analysis(analysis: &AnalysisResult, reply_count: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Replies analyzed: {reply_count}\n"));

    let tone = if reply_count == 0 {
        "n/a".to_string()
    } else {
        format!("{:?}", Tone::from_analysis(analysis)).to_lowercase()
    };
    out.push_str(&format!("Overall tone:     {tone}\n\n"));

    out.push_str("Sentiment:\n");
    for (label, count) in [
        ("positive", analysis.positive),
        ("negative", analysis.negative),
        ("neutral", analysis.neutral),
    ] {
        out.push_str(&format!(
            "  {label:<9} {count:>5}  ({:.1}%)\n",
            percentage(count, reply_count)
        ));
    }

    let double_counted = analysis.total_increments().saturating_sub(reply_count);
    if double_counted > 0 {
        out.push_str(&format!(
            "  ({double_counted} replies matched both positive and negative keywords)\n"
        ));
    }

    out.push_str("\nTop themes:\n");
    if analysis.themes.is_empty() {
        out.push_str("  (none)\n");
    }
    for (rank, theme) in analysis.themes.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} ({})\n",
            rank + 1,
            truncate_str(&theme.token, 40),
            theme.count
        ));
    }

    out
}

/// Print the analysis table
pub fn print_analysis(analysis: &AnalysisResult, reply_count: usize) {
    print!("{}", format_analysis(analysis, reply_count));
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("EchoPulse Configuration:");
    println!("  Logging:");
    println!("    Level: {}", config.logging.level);
    println!("    Backtrace: {}", config.logging.backtrace);
    println!("  Server:");
    println!("    Bind: {}", config.bind_address());
    println!("    CORS: {}", config.server.enable_cors);
    println!("  Analysis:");
    println!("    Max replies: {}", config.max_replies());

    let classifier = config.build_classifier();
    let source = |custom: bool| if custom { "custom" } else { "default" };
    println!(
        "    Positive keywords: {} ({})",
        classifier.positive_lexicon().len(),
        source(config.analysis.positive_keywords.is_some())
    );
    println!(
        "    Negative keywords: {} ({})",
        classifier.negative_lexicon().len(),
        source(config.analysis.negative_keywords.is_some())
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::categorize_replies;

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn test_format_analysis_reports_double_counts() {
        let replies = ["great but bad", "hello"];
        let output = format_analysis(&categorize_replies(&replies), replies.len());
        assert!(output.contains("Overall tone:     mixed"));
        assert!(output.contains("1 replies matched both"));
        assert!(output.contains("1. great (1)"));
    }

    #[test]
    fn test_format_analysis_empty() {
        let output = format_analysis(&AnalysisResult::default(), 0);
        assert!(output.contains("Overall tone:     n/a"));
        assert!(output.contains("(none)"));
    }
}
