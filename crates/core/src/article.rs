//! Resolved article output type.
//!
//! A [`ResolvedArticle`] is the value handed to the summarizer: plain,
//! length-bounded text plus the entry metadata with defaults filled in.

use serde::{Deserialize, Serialize};

use crate::entry::RawEntry;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Unknown";
pub const DEFAULT_SOURCE: &str = "Unknown";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// An entry ready for summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArticle {
    /// Identifier of the source entry.
    pub id: i64,
    pub title: String,
    /// Article URL, empty when the entry had none.
    pub url: String,
    /// Publication timestamp, passed through as given by the feed reader.
    pub published_at: Option<String>,
    /// Plain text content, at most the configured maximum length.
    pub content: String,
    /// Whether `content` was shortened to fit the maximum length.
    pub truncated: bool,
    /// Title of the source feed.
    pub source: String,
    pub author: String,
    /// Category label of the source feed.
    pub category: String,
    pub feed_id: i64,
}

impl ResolvedArticle {
    /// Builds an article from an entry and its final content, filling in
    /// defaults for every absent metadata field.
    pub fn from_entry(entry: &RawEntry, content: String, truncated: bool) -> Self {
        Self {
            id: entry.id,
            title: entry.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            url: entry.url.clone().unwrap_or_default(),
            published_at: entry.published_at.clone(),
            content,
            truncated,
            source: entry.source_title().unwrap_or(DEFAULT_SOURCE).to_string(),
            author: entry.author.clone().unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            category: entry.category_title().unwrap_or(DEFAULT_CATEGORY).to_string(),
            feed_id: entry.feed_id,
        }
    }

    /// Number of characters in `content`.
    pub fn length(&self) -> usize {
        self.content.chars().count()
    }
}

/// Groups articles by category label.
///
/// Groups appear in the order their category is first seen, and articles keep
/// input order within a group.
pub fn group_by_category(articles: &[ResolvedArticle]) -> Vec<(&str, Vec<&ResolvedArticle>)> {
    let mut groups: Vec<(&str, Vec<&ResolvedArticle>)> = Vec::new();
    for article in articles {
        let category = article.category.as_str();
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, group)) => group.push(article),
            None => groups.push((category, vec![article])),
        }
    }
    groups
}
