// Protected-context detection (URLs, emails, markdown code)
//
// Heuristics only look at a bounded window around the candidate span, never at
// the global document structure. False positives are acceptable; missing the
// common URL/email shapes of legal texts is not.

use std::sync::LazyLock;

use regex::Regex;

/// Characters inspected on each side of a span for URL detection
const URL_WINDOW: usize = 100;
/// Characters inspected on each side of a span for email detection
const EMAIL_WINDOW: usize = 50;

static URL_SCHEME_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S*$").expect("valid regex"));
static WWW_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"www\.\S*$").expect("valid regex"));
static DOMAIN_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+\.\S+$").expect("valid regex"));
static NON_SPACE_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+").expect("valid regex"));
static EMAIL_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s@]+@[^\s@]+\.[^\s@]+").expect("valid regex"));

/// Kind of protected context a span was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialContext {
    Url,
    Email,
    CodeBlock,
    InlineCode,
}

/// Up to `chars` characters ending at byte offset `pos`
fn window_before(text: &str, pos: usize, chars: usize) -> &str {
    let head = &text[..pos];
    let start = head
        .char_indices()
        .rev()
        .nth(chars.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    &head[start..]
}

/// Up to `chars` characters starting at byte offset `pos`
fn window_after(text: &str, pos: usize, chars: usize) -> &str {
    let tail = &text[pos..];
    let end = tail
        .char_indices()
        .nth(chars)
        .map_or(tail.len(), |(i, _)| i);
    &tail[..end]
}

/// Detect a span that is part of a URL
///
/// Flags the span when the text before it ends with a scheme (`http://`,
/// `https://`) or a `www.` prefix without intervening whitespace, or when it
/// ends with a domain-like `x.y` run and the span is immediately followed by
/// more non-space text (`boe.es/AEAT/...`).
pub fn is_inside_url(text: &str, start: usize, end: usize) -> bool {
    let before = window_before(text, start, URL_WINDOW);
    let after = window_after(text, end, URL_WINDOW);

    if URL_SCHEME_TAIL.is_match(before) || WWW_TAIL.is_match(before) {
        return true;
    }

    DOMAIN_TAIL.is_match(before) && NON_SPACE_HEAD.is_match(after)
}

/// Detect a span that is part of an email address
///
/// Rebuilds the whitespace-free token around the span (bounded by the window)
/// and checks whether an address `local@domain.tld` inside it covers the span.
pub fn is_inside_email(text: &str, start: usize, end: usize) -> bool {
    let before = window_before(text, start, EMAIL_WINDOW);
    let after = window_after(text, end, EMAIL_WINDOW);

    let left = before.rsplit(char::is_whitespace).next().unwrap_or("");
    let right = after.split(char::is_whitespace).next().unwrap_or("");

    let span_start = left.len();
    let span_end = span_start + (end - start);
    let token = format!("{}{}{}", left, &text[start..end], right);

    EMAIL_ADDRESS
        .find_iter(&token)
        .any(|m| m.start() < span_end && m.end() > span_start)
}

/// Odd number of ``` fences before `pos` means we're inside a fenced block
pub fn is_inside_fenced_code_block(text: &str, pos: usize) -> bool {
    text[..pos].matches("```").count() % 2 == 1
}

/// Odd number of single backticks before `pos` means we're inside inline code
///
/// Fence markers are removed first so a ``` isn't counted as three inline
/// markers.
pub fn is_inside_inline_code(text: &str, pos: usize) -> bool {
    text[..pos].replace("```", "").matches('`').count() % 2 == 1
}

/// Classify the protected context of a span, if any
///
/// Checks run in a fixed order (URL, email, code block, inline code) and the
/// first hit wins.
pub fn special_context(text: &str, start: usize, end: usize) -> Option<SpecialContext> {
    if is_inside_url(text, start, end) {
        Some(SpecialContext::Url)
    } else if is_inside_email(text, start, end) {
        Some(SpecialContext::Email)
    } else if is_inside_fenced_code_block(text, start) {
        Some(SpecialContext::CodeBlock)
    } else if is_inside_inline_code(text, start) {
        Some(SpecialContext::InlineCode)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
