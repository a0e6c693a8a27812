//! Minimal markdown for prose blocks
//!
//! Supports what the dashboard text uses: paragraphs separated by blank lines,
//! `- ` bullet lists and `**bold**` spans. Everything else is escaped text.

use crate::chart::svg::escape;

/// Convert a markdown block to HTML
pub fn to_html(text: &str) -> String {
    let mut out = String::new();

    for block in blocks(text) {
        let is_list = block.iter().all(|line| line.starts_with("- "));
        if is_list {
            out.push_str("<ul>");
            for line in &block {
                out.push_str("<li>");
                out.push_str(&inline(line.trim_start_matches("- ").trim()));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        } else {
            out.push_str("<p>");
            out.push_str(&inline(&block.join(" ")));
            out.push_str("</p>");
        }
    }

    out
}

/// Split text into groups of non-blank trimmed lines
fn blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Escape a line and render `**bold**` spans
fn inline(text: &str) -> String {
    let parts: Vec<&str> = text.split("**").collect();
    // Unbalanced markers are left as literal text
    if parts.len() % 2 == 0 {
        return escape(text);
    }

    parts
        .iter()
        .enumerate()
        .map(|(idx, part)| {
            if idx % 2 == 1 {
                format!("<strong>{}</strong>", escape(part))
            } else {
                escape(part)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        assert_eq!(
            to_html("\nWelcome to the\ndashboard.\n"),
            "<p>Welcome to the dashboard.</p>"
        );
    }

    #[test]
    fn test_bullet_list_with_bold() {
        let html = to_html("- **Teagasc** – Agriculture\n- **Bord Bia** – Irish Food Board");
        assert_eq!(
            html,
            "<ul><li><strong>Teagasc</strong> – Agriculture</li><li><strong>Bord Bia</strong> – Irish Food Board</li></ul>"
        );
    }

    #[test]
    fn test_escapes_markup() {
        assert_eq!(to_html("a < b & c"), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_unbalanced_bold_is_literal() {
        assert_eq!(to_html("**open"), "<p>**open</p>");
    }

    #[test]
    fn test_multiple_blocks() {
        let html = to_html("First.\n\n- one\n- two\n\nLast.");
        assert_eq!(html, "<p>First.</p><ul><li>one</li><li>two</li></ul><p>Last.</p>");
    }
}
