//! Raw feed entries as delivered by the feed reader.
//!
//! The shapes follow the Miniflux entries API. Decoding is forgiving: unknown
//! keys are ignored and every optional attribute may be missing or `null`.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Category a feed is filed under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
}

/// The feed an entry was published in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

/// One syndicated article record.
///
/// Entries are never modified after they are loaded; resolution produces a
/// separate [`crate::ResolvedArticle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub feed_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Entry content as HTML.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub feed: Option<Feed>,
}

impl RawEntry {
    /// Title of the owning feed, if the feed metadata was included and titled.
    pub fn source_title(&self) -> Option<&str> {
        self.feed.as_ref().and_then(|feed| feed.title.as_deref())
    }

    /// Title of the owning feed's category, if present and non-null.
    pub fn category_title(&self) -> Option<&str> {
        self.feed
            .as_ref()
            .and_then(|feed| feed.category.as_ref())
            .and_then(|category| category.title.as_deref())
    }
}

/// Response body of the entries listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntriesResponse {
    #[serde(default)]
    pub total: usize,
    pub entries: Vec<RawEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntriesPayload {
    Response(EntriesResponse),
    Bare(Vec<RawEntry>),
}

impl EntriesResponse {
    /// Decodes an entries listing.
    ///
    /// Accepts either the API envelope (`{"total": .., "entries": [..]}`) or a
    /// bare JSON array of entries. A bare array gets `total` set to its length.
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: EntriesPayload = serde_json::from_str(json)?;
        Ok(match payload {
            EntriesPayload::Response(response) => response,
            EntriesPayload::Bare(entries) => Self { total: entries.len(), entries },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ignores_unknown_fields() {
        let json = r#"{
            "id": 7,
            "user_id": 1,
            "feed_id": 3,
            "title": "Hello",
            "status": "unread",
            "reading_time": 4,
            "enclosures": []
        }"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.title.as_deref(), Some("Hello"));
        assert!(entry.url.is_none());
        assert!(entry.feed.is_none());
    }

    #[test]
    fn test_entry_nulls_are_none() {
        let json = r#"{"id": 1, "feed_id": 2, "title": null, "url": null, "author": null, "content": null}"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert!(entry.title.is_none());
        assert!(entry.content.is_none());
    }

    #[test]
    fn test_category_title_lookup() {
        let json = r#"{
            "id": 1,
            "feed_id": 2,
            "feed": {"id": 2, "user_id": 1, "title": "Tech Blog", "category": {"id": 5, "user_id": 1, "title": "Technology"}}
        }"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.source_title(), Some("Tech Blog"));
        assert_eq!(entry.category_title(), Some("Technology"));
    }

    #[test]
    fn test_category_without_title() {
        let json = r#"{"id": 1, "feed_id": 2, "feed": {"id": 2, "title": "Feed", "category": {"id": 5, "title": null}}}"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category_title(), None);
    }

    #[test]
    fn test_feed_without_title() {
        let json = r#"{"id": 1, "feed_id": 2, "feed": {"id": 2, "category": {"id": 5, "title": "News"}}}"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.source_title(), None);
        assert_eq!(entry.category_title(), Some("News"));
    }

    #[test]
    fn test_entries_response_envelope() {
        let json = r#"{"total": 2, "entries": [{"id": 1}, {"id": 2}]}"#;
        let response = EntriesResponse::from_json(json).unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.entries.len(), 2);
    }

    #[test]
    fn test_entries_response_bare_array() {
        let response = EntriesResponse::from_json(r#"[{"id": 10}, {"id": 11}, {"id": 12}]"#).unwrap();
        assert_eq!(response.total, 3);
        assert_eq!(response.entries[2].id, 12);
    }

    #[test]
    fn test_entries_response_invalid() {
        assert!(EntriesResponse::from_json("not json").is_err());
    }
}
