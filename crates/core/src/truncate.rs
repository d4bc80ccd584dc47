//! Length bounding for resolved article text.

/// Marker appended to truncated text. Counts as one character.
pub const ELLIPSIS: char = '\u{2026}';

/// Bounds `text` to `max_length` characters.
///
/// Returns the text unchanged with `false` when it already fits. Otherwise
/// keeps the first `max_length - 1` characters, appends [`ELLIPSIS`] and
/// returns `true`, so a truncated result is always exactly `max_length`
/// characters long. With `max_length == 0` there is no room for the marker
/// and the result is empty.
///
/// ```rust
/// use feedbrief_core::truncate;
///
/// assert_eq!(truncate("Exact", 5), ("Exact".to_string(), false));
/// assert_eq!(truncate("Too long", 4), ("Too\u{2026}".to_string(), true));
/// ```
pub fn truncate(text: &str, max_length: usize) -> (String, bool) {
    // Byte offset of the character at `max_length`, if there is one.
    let Some((cut, _)) = text.char_indices().nth(max_length) else {
        return (text.to_string(), false);
    };

    if max_length == 0 {
        return (String::new(), true);
    }

    let keep = text[..cut].char_indices().last().map_or(0, |(index, _)| index);
    let mut truncated = String::with_capacity(keep + ELLIPSIS.len_utf8());
    truncated.push_str(&text[..keep]);
    truncated.push(ELLIPSIS);
    (truncated, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_no_truncation() {
        let (text, truncated) = truncate("Short content", 100);
        assert_eq!(text, "Short content");
        assert!(!truncated);
    }

    #[test]
    fn test_truncation() {
        let content = "This is a very long piece of content that needs to be truncated";
        let (text, truncated) = truncate(content, 20);
        assert_eq!(text.chars().count(), 20);
        assert!(text.ends_with(ELLIPSIS));
        assert_eq!(text, "This is a very long\u{2026}");
        assert!(truncated);
    }

    #[test]
    fn test_exact_length() {
        let (text, truncated) = truncate("Exact", 5);
        assert_eq!(text, "Exact");
        assert!(!truncated);
    }

    #[test]
    fn test_multibyte_characters() {
        let (text, truncated) = truncate("héllo wörld ünïcode", 8);
        assert_eq!(text, "héllo w\u{2026}");
        assert_eq!(text.chars().count(), 8);
        assert!(truncated);
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(truncate("", 0), (String::new(), false));
        assert_eq!(truncate("abc", 0), (String::new(), true));
    }

    #[test]
    fn test_one_length() {
        assert_eq!(truncate("abc", 1), (ELLIPSIS.to_string(), true));
    }

    #[rstest]
    #[case("", 10)]
    #[case("short", 10)]
    #[case("exactly ten", 11)]
    #[case("a considerably longer sentence than the bound", 10)]
    #[case("日本語のテキストです", 4)]
    fn test_length_is_min_and_idempotent(#[case] input: &str, #[case] max: usize) {
        let (once, _) = truncate(input, max);
        assert_eq!(once.chars().count(), input.chars().count().min(max));

        let (twice, truncated_again) = truncate(&once, max);
        assert_eq!(twice, once);
        assert!(!truncated_again);
    }
}
