use std::sync::LazyLock;

use regex::Regex;

/// Elements whose text never belongs to an article body.
pub const NON_CONTENT_TAGS: [&str; 5] = ["script", "style", "nav", "header", "footer"];

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Configuration for HTML preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Tag names removed together with everything inside them
    pub remove_tags: Vec<String>,
    /// Whether to remove HTML comments
    pub remove_comments: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { remove_tags: NON_CONTENT_TAGS.iter().map(|tag| tag.to_string()).collect(), remove_comments: true }
    }
}

/// Preprocess fetched HTML by dropping elements that pollute text extraction
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> String {
    let mut processed = if config.remove_tags.is_empty() {
        html.to_string()
    } else {
        remove_unwanted_tags(html, &config.remove_tags)
    };

    if config.remove_comments {
        processed = COMMENT.replace_all(&processed, "").into_owned();
    }

    processed
}

/// Remove the given tags and their content from HTML.
///
/// Falls back to the untouched input only if the rewriter rejects the
/// document. Invalid tag names are skipped. A document made up entirely of
/// removed tags yields an empty string.
fn remove_unwanted_tags(html: &str, tags: &[String]) -> String {
    let mut handlers = Vec::with_capacity(tags.len());
    for tag in tags {
        if tag.parse::<lol_html::Selector>().is_err() {
            tracing::warn!(tag = %tag, "skipping invalid tag selector");
            continue;
        }
        handlers.push(lol_html::element!(tag.as_str(), |el| {
            el.remove();
            Ok(())
        }));
    }

    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings { element_content_handlers: handlers, ..Default::default() },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() || rewriter.end().is_err() {
        return html.to_string();
    }

    output
}
