use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Social platforms whose reply payloads can be normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Video comment threads (top-level comments plus their replies)
    #[value(name = "youtube")]
    YouTube,
    /// Short-message replies in a conversation
    Twitter,
}

/// Ordered reply texts for one post or video. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplyCollection {
    replies: Vec<String>,
}

impl ReplyCollection {
    pub fn new(replies: Vec<String>) -> Self {
        Self { replies }
    }

    /// Flatten a comment-thread listing: each top-level comment followed by its replies.
    ///
    /// Items missing the expected text fields are skipped rather than rejected.
    pub fn from_comment_threads(listing: &Value) -> Self {
        let mut replies = Vec::new();
        let items = listing["items"].as_array().map_or(&[][..], Vec::as_slice);

        for thread in items {
            if let Some(text) =
                thread["snippet"]["topLevelComment"]["snippet"]["textOriginal"].as_str()
            {
                replies.push(text.to_string());
            }
            if let Some(comments) = thread["replies"]["comments"].as_array() {
                replies.extend(
                    comments
                        .iter()
                        .filter_map(|c| c["snippet"]["textOriginal"].as_str())
                        .map(str::to_string),
                );
            }
        }

        Self { replies }
    }

    /// Collect `data[].text` from a recent-search response
    pub fn from_tweet_search(response: &Value) -> Self {
        let replies = response["data"]
            .as_array()
            .map(|tweets| {
                tweets
                    .iter()
                    .filter_map(|t| t["text"].as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Self { replies }
    }

    /// Normalize a raw platform payload
    pub fn from_platform_payload(platform: Platform, payload: &Value) -> Self {
        match platform {
            Platform::YouTube => Self::from_comment_threads(payload),
            Platform::Twitter => Self::from_tweet_search(payload),
        }
    }

    /// Keep only the first `max` replies
    pub fn truncate_to(&mut self, max: usize) {
        self.replies.truncate(max);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.replies
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.replies.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.replies
    }
}

impl From<Vec<String>> for ReplyCollection {
    fn from(replies: Vec<String>) -> Self {
        Self::new(replies)
    }
}

impl<'a> FromIterator<&'a str> for ReplyCollection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}

impl FromIterator<String> for ReplyCollection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReplyCollection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.replies.iter()
    }
}
