//! Text normalization applied by callers before analysis.
//!
//! The engine tolerates raw text; normalizing first removes noise (URLs,
//! email addresses, exotic punctuation) while keeping the symbols that carry
//! meaning in skill names (`.+#/-_`). Line breaks survive normalization:
//! section detection is line-based, so only horizontal whitespace collapses.

use regex::Regex;
use std::sync::OnceLock;

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+|www\.\S+").unwrap())
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b").unwrap())
}

fn horizontal_whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\S\n]+").unwrap())
}

fn line_edge_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" *\n *").unwrap())
}

fn blank_lines_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

/// Lowercase, strip URLs and emails, drop characters that never appear in
/// skill names, collapse horizontal whitespace. Newlines are kept (runs of
/// blank lines squeeze to one) so downstream section detection still sees
/// the document's line structure.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text = raw.to_lowercase();
    text = url_regex().replace_all(&text, "").into_owned();
    text = email_regex().replace_all(&text, "").into_owned();

    let filtered: String = text
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '.' | '+' | '#' | '/' | '-' | '_' | '\n' => c,
            c if c.is_whitespace() => c,
            _ => ' ',
        })
        .collect();

    let collapsed = horizontal_whitespace_regex().replace_all(&filtered, " ");
    let trimmed_lines = line_edge_regex().replace_all(&collapsed, "\n");
    blank_lines_regex()
        .replace_all(&trimmed_lines, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses() {
        assert_eq!(normalize("  Python   AND    AWS "), "python and aws");
    }

    #[test]
    fn test_strips_urls_and_emails() {
        let text = "see https://example.com or mail jane@example.com about python";
        let normalized = normalize(text);
        assert!(!normalized.contains("example.com"));
        assert!(normalized.contains("python"));
    }

    #[test]
    fn test_keeps_skill_symbols() {
        let normalized = normalize("C++ / C# / Node.js");
        assert!(normalized.contains("c++"));
        assert!(normalized.contains("c#"));
        assert!(normalized.contains("node.js"));
    }

    #[test]
    fn test_preserves_line_structure() {
        let text = "Skills\nPython   and AWS\n\n\n\nWork Experience\nBuilt pipelines";
        assert_eq!(
            normalize(text),
            "skills\npython and aws\n\nwork experience\nbuilt pipelines"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
