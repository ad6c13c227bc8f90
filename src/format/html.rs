// HTML formatter - wraps each acronym in <abbr> and appends the meaning

use super::{splice, Expansion, Formatter};
use crate::scanner::{MatchCandidate, ScanStats};

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn format(&self, original: &str, matches: &[MatchCandidate], _stats: &ScanStats) -> Expansion {
        Expansion::Text(splice(original, matches, |m| {
            let meaning = escape_html(&m.meaning);
            format!(
                "<abbr title=\"{}\">{}</abbr> ({})",
                meaning,
                escape_html(&m.acronym),
                meaning
            )
        }))
    }
}

/// Escape `& < > " '` for use in HTML text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
