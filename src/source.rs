//! Offline helpers for the platform fetch collaborators
//!
//! These only parse post URLs and format reply text; no network access happens here.

use url::Url;

use crate::models::Platform;
use crate::EchoPulseError;
use crate::Result;

/// Shown by the dashboard when a fetch came back empty
pub const NO_REPLIES_FOUND: &str = "No replies found.";

const VIDEO_ID_LEN: usize = 11;

/// Newline-joined replies, or a placeholder when there are none
pub fn format_replies<S: AsRef<str>>(replies: &[S]) -> String {
    if replies.is_empty() {
        return NO_REPLIES_FOUND.to_string();
    }
    replies
        .iter()
        .map(|reply| reply.as_ref())
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Extract the numeric status id from a post URL (`.../status/<digits>`)
pub fn extract_tweet_id(url: &str) -> Result<String> {
    let parsed = parse(url)?;
    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.collect())
        .unwrap_or_default();

    segments
        .windows(2)
        .find(|pair| pair[0] == "status")
        .map(|pair| {
            pair[1]
                .chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>()
        })
        .filter(|id| !id.is_empty())
        .ok_or_else(|| EchoPulseError::InvalidUrl(url.to_string()))
}

/// `host` is `domain` itself or one of its subdomains
fn on_domain(host: &str, domain: &str) -> bool {
    host.strip_suffix(domain)
        .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
}

/// Extract the 11 character video id from watch, short-link, embed, shorts and live URLs
pub fn extract_video_id(url: &str) -> Result<String> {
    let parsed = parse(url)?;
    let host = parsed.host_str().unwrap_or_default().trim_start_matches("www.");

    let candidate = if host == "youtu.be" {
        parsed.path_segments().and_then(|mut s| s.next()).map(str::to_string)
    } else if on_domain(host, "youtube.com") || on_domain(host, "youtube-nocookie.com") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .or_else(|| {
                let segments: Vec<&str> = parsed.path_segments()?.collect();
                segments
                    .windows(2)
                    .find(|pair| matches!(pair[0], "embed" | "shorts" | "live" | "v"))
                    .map(|pair| pair[1].to_string())
            })
    } else {
        None
    };

    candidate
        .filter(|id| is_video_id(id))
        .ok_or_else(|| EchoPulseError::InvalidUrl(url.to_string()))
}

/// Platform-dispatching id extraction
pub fn extract_post_id(platform: Platform, url: &str) -> Result<String> {
    match platform {
        Platform::YouTube => extract_video_id(url),
        Platform::Twitter => extract_tweet_id(url),
    }
}

fn parse(url: &str) -> Result<Url> {
    Url::parse(url.trim()).map_err(|_| EchoPulseError::InvalidUrl(url.to_string()))
}

fn is_video_id(id: &str) -> bool {
    id.len() == VIDEO_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
