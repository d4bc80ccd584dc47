//! Detects feed content that is only a teaser of the real article.
//!
//! Feeds frequently publish a sentence or two instead of the full text. The
//! heuristics here decide when entry content is too thin to summarize and the
//! source page should be fetched instead. The thresholds are empirical and are
//! kept as they are for compatibility with existing digests.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::normalize;

/// Words that mark content as a self-described partial.
pub const SUMMARY_KEYWORDS: [&str; 5] = ["summary", "excerpt", "brief", "overview", "abstract"];

/// Inputs with fewer trimmed characters than this are not analyzed at all.
pub const MIN_ANALYZABLE_CHARS: usize = 20;
/// Anything shorter than this is always a teaser.
pub const SHORT_CHARS: usize = 100;
/// Two sentences or fewer below this length is a teaser.
pub const FEW_SENTENCES_CHARS: usize = 300;
/// Sentence count at or below which [`FEW_SENTENCES_CHARS`] applies.
pub const FEW_SENTENCES: usize = 2;
/// Keyword-bearing content below this length is a teaser.
pub const KEYWORD_CHARS: usize = 400;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+(?:\s|$)").unwrap());

/// Counts runs of sentence-ending punctuation followed by whitespace or the
/// end of the text.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END.find_iter(text).count()
}

/// Returns `true` when `text` looks like a summary rather than a full article.
///
/// `text` may still contain markup; it is normalized before analysis.
///
/// ```rust
/// use feedbrief_core::is_summary_only;
///
/// assert!(is_summary_only(None));
/// assert!(is_summary_only(Some("A single forty character sentence here.")));
/// ```
pub fn is_summary_only(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return true;
    };

    if text.trim().chars().count() < MIN_ANALYZABLE_CHARS {
        return true;
    }

    let clean = normalize(Some(text));
    let length = clean.chars().count();
    let sentences = count_sentences(&clean);
    let lowered = clean.to_lowercase();
    let has_keyword = SUMMARY_KEYWORDS.iter().any(|keyword| lowered.contains(keyword));

    length < SHORT_CHARS
        || (sentences <= FEW_SENTENCES && length < FEW_SENTENCES_CHARS)
        || (has_keyword && length < KEYWORD_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const LONG_ARTICLE: &str = "The city council met on Tuesday to debate the new transit plan for the \
        coming decade. Residents packed the chamber and many spoke for more than the allotted three minutes. \
        Council members questioned the projected ridership numbers presented by the consultants at length. \
        The mayor promised a revised proposal before the end of the fiscal year and thanked everyone present. \
        A final vote is now expected in early spring after further public hearings in every district.";

    #[test]
    fn test_missing_and_empty_are_summaries() {
        assert!(is_summary_only(None));
        assert!(is_summary_only(Some("")));
        assert!(is_summary_only(Some("   ")));
    }

    #[test]
    fn test_short_single_sentence() {
        let text = "A single forty character sentence here.";
        assert_eq!(text.chars().count(), 39);
        assert!(is_summary_only(Some(text)));
    }

    #[test]
    fn test_long_article_is_not_summary() {
        assert!(LONG_ARTICLE.chars().count() > 400);
        assert_eq!(count_sentences(LONG_ARTICLE), 5);
        assert!(!is_summary_only(Some(LONG_ARTICLE)));
    }

    #[test]
    fn test_markup_is_stripped_before_measuring() {
        let html = format!("<div><p>{}</p><script></script></div>", LONG_ARTICLE.replace(". ", ".</p><p>"));
        assert!(!is_summary_only(Some(html.as_str())));
    }

    #[rstest]
    #[case("One. Two! Three? ", 3)]
    #[case("Wait... what?!", 2)]
    #[case("No terminal punctuation", 0)]
    #[case("Version 1.2 shipped.", 1)]
    fn test_count_sentences(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(count_sentences(text), expected);
    }

    #[test]
    fn test_two_sentences_under_300_chars() {
        let text = format!("{}. {}.", "a".repeat(120), "b".repeat(120));
        assert!(text.chars().count() < 300);
        assert!(is_summary_only(Some(text.as_str())));
    }

    #[test]
    fn test_two_sentences_over_300_chars() {
        let text = format!("{}. {}.", "a".repeat(160), "b".repeat(160));
        assert!(text.chars().count() >= 300);
        assert!(!is_summary_only(Some(text.as_str())));
    }

    #[test]
    fn test_keyword_under_400_chars() {
        let body = "This is a sentence about the topic. ".repeat(9);
        let text = format!("Executive Summary: {body}");
        let length = text.trim().chars().count();
        assert!((300..400).contains(&length));
        assert!(is_summary_only(Some(text.as_str())));
    }

    #[test]
    fn test_keyword_over_400_chars() {
        let body = "This is a sentence about the topic. ".repeat(12);
        let text = format!("An overview: {body}");
        assert!(text.trim().chars().count() >= 400);
        assert!(!is_summary_only(Some(text.as_str())));
    }

    #[test]
    fn test_many_sentences_between_100_and_300_chars() {
        let text = "Short one. Another here. And a third. Then a fourth. Finally fifth. Plus sixth one too.";
        let padded = format!("{text} {text}");
        let length = padded.chars().count();
        assert!((100..300).contains(&length));
        assert!(!is_summary_only(Some(padded.as_str())));
    }
}
