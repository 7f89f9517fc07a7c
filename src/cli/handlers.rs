//! CLI command handlers
//!
//! This module contains all the command handlers for the EchoPulse CLI

use std::io::Read;
use std::path::Path;

use tracing::debug;
use tracing::info;

use crate::analysis::NarrativeSummarizer;
use crate::analysis::ReplyAnalyzer;
use crate::cli::commands::ReplyInput;
use crate::cli::output::*;
use crate::models::Platform;
use crate::models::ReplyCollection;
use crate::source;
use crate::AppConfig;
use crate::EchoPulseError;
use crate::Result;

/// Handle summarize command
pub fn handle_summarize_command(config: &AppConfig, input: &ReplyInput) -> Result<()> {
    let replies = collect_replies(input, config.max_replies())?;
    info!("Summarizing {} replies", replies.len());

    let classifier = config.build_classifier();
    let summary = NarrativeSummarizer::new(&classifier).summarize(replies.as_slice());
    println!("{summary}");
    Ok(())
}

/// Handle analyze command
pub fn handle_analyze_command(config: &AppConfig, input: &ReplyInput, json: bool) -> Result<()> {
    let replies = collect_replies(input, config.max_replies())?;
    info!("Analyzing {} replies", replies.len());

    let classifier = config.build_classifier();
    let analysis = ReplyAnalyzer::new(&classifier).analyze(replies.as_slice());

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis, replies.len());
    }
    Ok(())
}

/// Handle parse-url command
pub fn handle_parse_url_command(url: &str, platform: Platform) -> Result<()> {
    let id = source::extract_post_id(platform, url)?;
    println!("{id}");
    Ok(())
}

/// Handle config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}

/// Gather replies from arguments, file and stdin, capped at `max_replies`.
/// Fails with `EmptyReplies` when every source came up empty.
pub fn collect_replies(input: &ReplyInput, max_replies: usize) -> Result<ReplyCollection> {
    let mut replies = input.replies.clone();

    if let Some(path) = &input.file {
        replies.extend(read_replies_file(path)?);
    }

    if input.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        replies.extend(parse_replies(&buffer)?);
    }

    if replies.is_empty() {
        return Err(EchoPulseError::EmptyReplies);
    }

    let mut collection = ReplyCollection::new(replies);
    if collection.len() > max_replies {
        debug!(
            "Truncating {} replies to the configured maximum of {}",
            collection.len(),
            max_replies
        );
        collection.truncate_to(max_replies);
    }
    Ok(collection)
}

/// Read a replies file; see [`parse_replies`] for the accepted formats
pub fn read_replies_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    parse_replies(&content)
}

/// A JSON array of strings when the content starts with `[`, otherwise one reply per
/// non-blank line
pub fn parse_replies(content: &str) -> Result<Vec<String>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
