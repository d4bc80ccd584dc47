use crate::ResolvedArticle;
use crate::article::group_by_category;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap content lines at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Include the article URL under each title
    pub include_urls: bool,
}

/// Plain text formatter producing a digest grouped by category
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, articles: &[ResolvedArticle]) -> String {
        convert_to_text(articles, &self.config)
    }
}

/// Render resolved articles as a plain text digest, one section per category
pub fn convert_to_text(articles: &[ResolvedArticle], config: &TextConfig) -> String {
    let mut output = String::new();

    for (category, group) in group_by_category(articles) {
        let heading = format!("{} ({})", category, group.len());
        output.push_str(&heading);
        output.push('\n');
        output.push_str(&"=".repeat(heading.chars().count()));
        output.push_str("\n\n");

        for article in group {
            output.push_str(&generate_header(article, config));
            let content = if config.line_width > 0 {
                wrap_text(&article.content, config.line_width)
            } else {
                article.content.clone()
            };
            output.push_str(&content);
            output.push_str("\n\n");
        }
    }

    output.trim_end().to_string()
}

/// Title line plus a "By: .. | Source: .. | Date: .." line
fn generate_header(article: &ResolvedArticle, config: &TextConfig) -> String {
    let mut header = format!("{}\n", article.title);

    let mut meta_parts = vec![format!("By: {}", article.author), format!("Source: {}", article.source)];
    if let Some(date) = &article.published_at {
        meta_parts.push(format!("Date: {}", date));
    }
    header.push_str(&meta_parts.join(" | "));
    header.push('\n');

    if config.include_urls && !article.url.is_empty() {
        header.push_str(&article.url);
        header.push('\n');
    }

    header
}

/// Greedy word wrap at `width` characters
fn wrap_text(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
