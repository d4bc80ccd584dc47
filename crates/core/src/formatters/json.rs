use serde::Serialize;

use crate::ResolvedArticle;
use crate::{FeedbriefError, Result};

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Envelope written around a list of resolved articles
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Number of articles in the output
    pub total: usize,
    /// Number of articles whose content was truncated
    pub truncated: usize,
    pub articles: &'a [ResolvedArticle],
}

/// JSON formatter for resolved articles
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, articles: &[ResolvedArticle]) -> Result<String> {
        convert_to_json(articles, &self.config)
    }
}

/// Serialize resolved articles as a JSON document
pub fn convert_to_json(articles: &[ResolvedArticle], config: &JsonConfig) -> Result<String> {
    let output = JsonOutput {
        total: articles.len(),
        truncated: articles.iter().filter(|article| article.truncated).count(),
        articles,
    };

    let json = if config.pretty { serde_json::to_string_pretty(&output) } else { serde_json::to_string(&output) };
    json.map_err(FeedbriefError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawEntry;

    fn article(id: i64, truncated: bool) -> ResolvedArticle {
        let entry = RawEntry { id, title: Some(format!("Article {id}")), ..Default::default() };
        ResolvedArticle::from_entry(&entry, "Body".to_string(), truncated)
    }

    #[test]
    fn test_json_envelope() {
        let articles = vec![article(1, false), article(2, true)];
        let json = convert_to_json(&articles, &JsonConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total"], 2);
        assert_eq!(value["truncated"], 1);
        assert_eq!(value["articles"][1]["title"], "Article 2");
        assert_eq!(value["articles"][0]["category"], "Uncategorized");
    }

    #[test]
    fn test_json_pretty() {
        let formatter = JsonFormatter::new(JsonConfig { pretty: true });
        let json = formatter.format(&[article(1, false)]).unwrap();
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_json_round_trips_articles() {
        let articles = vec![article(7, false)];
        let json = convert_to_json(&articles, &JsonConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let decoded: Vec<ResolvedArticle> = serde_json::from_value(value["articles"].clone()).unwrap();
        assert_eq!(decoded, articles);
    }
}
