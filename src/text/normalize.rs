// Acronym normalization and word-character classification

/// Side of a span used for boundary checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

/// Fold an acronym for case and punctuation insensitive comparison
///
/// Lowercases, then drops every `.` and every whitespace character.
/// `"A.E.A.T."` and `"a e a t"` both become `"aeat"`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Escape every regex metacharacter so the string matches literally
pub fn escape_for_regex(text: &str) -> String {
    regex::escape(text)
}

/// True for characters that belong to a word
///
/// ASCII letters and digits plus the Spanish letters á é í ó ú ñ ü in both
/// cases. Dots and spaces are deliberately left out so dotted acronyms keep
/// their edges.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | 'ü' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ñ' | 'Ü'
        )
}

/// Check whether `pos` is a word boundary looking at the given side
///
/// String edges are always boundaries.
pub fn is_word_boundary(text: &str, pos: usize, side: Side) -> bool {
    let adjacent = match side {
        Side::Before => text[..pos].chars().next_back(),
        Side::After => text[pos..].chars().next(),
    };
    adjacent.map_or(true, |c| !is_word_char(c))
}

/// True when the span `[start, end)` is glued to a longer alphanumeric run
///
/// Prevents "EAT" from matching inside "CREATION".
pub fn is_part_of_larger_token(text: &str, start: usize, end: usize) -> bool {
    !is_word_boundary(text, start, Side::Before) || !is_word_boundary(text, end, Side::After)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
