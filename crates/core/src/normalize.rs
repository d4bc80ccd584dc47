//! HTML to plain text normalization for entry content.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+([.!?,:;])").unwrap());

/// Strips markup from entry HTML and tidies the remaining text.
///
/// Tags become a single space so words on either side of a tag boundary
/// stay apart, whitespace runs collapse, and whitespace in front of
/// `. ! ? , : ;` is dropped.
///
/// ```rust
/// use feedbrief_core::normalize;
///
/// assert_eq!(normalize(Some("<p>Hello <b>world</b>!</p>")), "Hello world!");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize(html: Option<&str>) -> String {
    let Some(html) = html.filter(|html| !html.is_empty()) else {
        return String::new();
    };

    let text = TAG.replace_all(html, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    SPACE_BEFORE_PUNCT.replace_all(text.trim(), "$1").into_owned()
}

/// Collapses whitespace runs to single spaces and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize(Some("<p>Hello <b>world</b>!</p>")), "Hello world!");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("   \n\t ")), "");
    }

    #[test]
    fn test_normalize_plain_text_unchanged() {
        assert_eq!(normalize(Some("Just plain text")), "Just plain text");
    }

    #[test]
    fn test_normalize_complex_markup() {
        let html = r#"
            <div class="content">
                <h1>Title</h1>
                <p>This is a <a href="link">link</a> and <em>emphasis</em>.</p>
                <ul>
                    <li>Item 1</li>
                    <li>Item 2</li>
                </ul>
            </div>
        "#;
        let text = normalize(Some(html));
        assert_eq!(text, "Title This is a link and emphasis. Item 1 Item 2");
        assert!(!text.contains('<'));
        assert!(!text.contains('>'));
    }

    #[test]
    fn test_normalize_keeps_words_apart_across_tags() {
        assert_eq!(normalize(Some("one<br>two<br/>three")), "one two three");
    }

    #[test]
    fn test_normalize_punctuation_spacing() {
        assert_eq!(normalize(Some("word . next , then ; done !")), "word. next, then; done!");
        assert_eq!(normalize(Some("<p>Question</p>?")), "Question?");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\n b\t c  "), "a b c");
    }
}
