use crate::parse::{Document, Element};
use crate::preprocess::{PreprocessConfig, preprocess_html};
use crate::{FeedbriefError, Result};

/// Content region selectors, most specific first.
pub const CONTENT_SELECTORS: [&str; 8] = [
    "article",
    r#"[role="main"]"#,
    ".content",
    ".post-content",
    ".article-content",
    ".entry-content",
    "main",
    ".main-content",
];

/// Extracted text must be longer than this to count as an article.
pub const MIN_ARTICLE_CHARS: usize = 200;

/// Configuration for main content extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Selectors tried in order; the first one matching any element wins
    pub selectors: Vec<String>,
    /// Fall back to `<body>` when no selector matches
    pub body_fallback: bool,
    /// Minimum number of characters the extracted text must exceed
    pub min_chars: usize,
    /// Pre-processing applied before the document is parsed
    pub preprocess: PreprocessConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            selectors: CONTENT_SELECTORS.iter().map(|s| s.to_string()).collect(),
            body_fallback: true,
            min_chars: MIN_ARTICLE_CHARS,
            preprocess: PreprocessConfig::default(),
        }
    }
}

/// Picks the element most likely to hold the article body.
///
/// Selectors are tried in priority order and the first selector with any
/// match wins, even if a later selector would match a larger region.
fn select_content_region<'a>(doc: &'a Document, config: &ExtractConfig) -> Result<Option<Element<'a>>> {
    for selector in &config.selectors {
        if let Some(element) = doc.select_first(selector)? {
            tracing::trace!(selector = %selector, tag = element.tag_name(), "content region matched");
            return Ok(Some(element));
        }
    }

    if config.body_fallback {
        tracing::trace!("no content selector matched, falling back to body");
        return Ok(doc.body());
    }

    Ok(None)
}

/// Extracts the main article text from a full HTML page.
///
/// Non-content elements are stripped first, then the content region is chosen
/// by selector priority and its visible text returned with whitespace collapsed.
///
/// # Errors
///
/// - [`FeedbriefError::HtmlParseError`] for an invalid configured selector
/// - [`FeedbriefError::NoContent`] when no region could be selected
/// - [`FeedbriefError::ContentTooShort`] when the text is not longer than
///   [`ExtractConfig::min_chars`]
///
/// ```rust
/// use feedbrief_core::{ExtractConfig, extract_main_text};
///
/// let body = "Paragraph text. ".repeat(20);
/// let html = format!("<html><body><nav>Menu</nav><article><p>{body}</p></article></body></html>");
/// let text = extract_main_text(&html, &ExtractConfig::default()).unwrap();
/// assert!(text.starts_with("Paragraph text."));
/// assert!(!text.contains("Menu"));
/// ```
pub fn extract_main_text(html: &str, config: &ExtractConfig) -> Result<String> {
    let cleaned = preprocess_html(html, &config.preprocess);
    let doc = Document::parse(&cleaned);

    let element = select_content_region(&doc, config)?.ok_or(FeedbriefError::NoContent)?;
    let text = element.text();
    let length = text.chars().count();

    if length > config.min_chars {
        Ok(text)
    } else {
        Err(FeedbriefError::ContentTooShort { length, minimum: config.min_chars })
    }
}
