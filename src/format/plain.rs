// Plain text formatter: "AEAT (Agencia Estatal de Administración Tributaria)"

use super::{splice, Expansion, Formatter};
use crate::scanner::{MatchCandidate, ScanStats};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn render(&self, original: &str, matches: &[MatchCandidate]) -> String {
        splice(original, matches, |m| format!("{} ({})", m.acronym, m.meaning))
    }
}

impl Formatter for PlainTextFormatter {
    fn format(&self, original: &str, matches: &[MatchCandidate], _stats: &ScanStats) -> Expansion {
        Expansion::Text(self.render(original, matches))
    }
}

#[cfg(test)]
#[path = "plain_test.rs"]
mod tests;
