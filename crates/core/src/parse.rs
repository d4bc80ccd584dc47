//! HTML parsing and selector queries.
//!
//! This module provides the [`Document`] and [`Element`] types used to locate
//! the main content region of a fetched page and read its visible text.
//!
//! # Example
//!
//! ```rust
//! use feedbrief_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let content = doc.select_first("p.content").unwrap().unwrap();
//! assert_eq!(content.text(), "Paragraph");
//! ```

use scraper::{Html, Selector};

use crate::normalize::collapse_whitespace;
use crate::{FeedbriefError, Result};

/// Represents a parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient and never fails; malformed markup is repaired the
    /// way a browser would.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects all elements matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbriefError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(|element| Element { element }).collect())
    }

    /// Selects the first element, in document order, matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbriefError::HtmlParseError`] if the selector is invalid.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).next().map(|element| Element { element }))
    }

    /// The `<body>` element, if the document has one.
    pub fn body(&'_ self) -> Option<Element<'_>> {
        self.select_first("body").ok().flatten()
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| FeedbriefError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl Element<'_> {
    /// Gets the tag name of this element.
    pub fn tag_name(&self) -> &str {
        self.element.value().name()
    }

    /// Visible text of this element and its descendants.
    ///
    /// Each text node is trimmed, empty nodes are skipped, the rest are joined
    /// with single spaces and any remaining whitespace runs are collapsed.
    pub fn text(&self) -> String {
        let joined = self
            .element
            .text()
            .map(str::trim)
            .filter(|node| !node.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        collapse_whitespace(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_multiple() {
        let doc = Document::parse(r#"<p class="content">First</p><p class="content">Second</p>"#);
        let elements = doc.select("p.content").unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].text(), "Second");
    }

    #[test]
    fn test_select_first_none() {
        let doc = Document::parse("<div>Nothing here</div>");
        assert!(doc.select_first("article").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse("<p>Hi</p>");
        assert!(matches!(doc.select("p[[["), Err(FeedbriefError::HtmlParseError(_))));
    }

    #[test]
    fn test_text_joins_nodes_with_spaces() {
        let doc = Document::parse("<div id=\"x\"><h1>Title</h1><p>One<b>Two</b></p>\n\n<p>  Three   four </p></div>");
        let el = doc.select_first("#x").unwrap().unwrap();
        assert_eq!(el.text(), "Title One Two Three four");
    }

    #[test]
    fn test_body_always_present_for_documents() {
        let doc = Document::parse("just text");
        let body = doc.body().unwrap();
        assert_eq!(body.tag_name(), "body");
        assert_eq!(body.text(), "just text");
    }
}
