// Tests for the formatter registry and shared splicing

use super::*;

/// Test formatter that upper-cases meanings
struct ShoutingFormatter;

impl Formatter for ShoutingFormatter {
    fn format(&self, original: &str, matches: &[MatchCandidate], _stats: &ScanStats) -> Expansion {
        Expansion::Text(splice(original, matches, |m| m.meaning.to_uppercase()))
    }
}

fn candidate(text: &str, surface: &str, meaning: &str) -> MatchCandidate {
    let start = text.find(surface).unwrap();
    MatchCandidate {
        surface: surface.to_string(),
        acronym: surface.to_string(),
        meaning: meaning.to_string(),
        start,
        end: start + surface.len(),
        has_multiple_meanings: false,
        all_meanings: None,
    }
}

#[test]
fn test_builtin_formatters_registered() {
    let registry = FormatterRegistry::new();
    assert_eq!(registry.names(), vec!["plain", "html", "structured"]);
    assert!(registry.get("html").is_ok());
}

#[test]
fn test_unknown_format_lists_available() {
    let registry = FormatterRegistry::new();
    let err = match registry.get("markdown") {
        Err(err) => err,
        Ok(_) => panic!("markdown should not be registered"),
    };

    assert_eq!(
        err.to_string(),
        "Unknown format: markdown. Available formats: plain, html, structured"
    );
}

#[test]
fn test_register_custom_formatter() {
    let registry = FormatterRegistry::new();
    registry.register("shout", Arc::new(ShoutingFormatter));

    let text = "El BOE";
    let matches = vec![candidate(text, "BOE", "Boletín Oficial del Estado")];
    let output = registry
        .get("shout")
        .unwrap()
        .format(text, &matches, &ScanStats::default());

    assert_eq!(output.as_text(), Some("El BOLETÍN OFICIAL DEL ESTADO"));
    assert_eq!(registry.names().last().map(String::as_str), Some("shout"));
}

#[test]
fn test_register_replaces_existing_name() {
    let registry = FormatterRegistry::new();
    registry.register("plain", Arc::new(ShoutingFormatter));

    let text = "El BOE";
    let matches = vec![candidate(text, "BOE", "Boletín")];
    let output = registry
        .get("plain")
        .unwrap()
        .format(text, &matches, &ScanStats::default());

    assert_eq!(output.expanded_text(), "El BOLETÍN");
    assert_eq!(registry.names().len(), 3);
}

#[test]
fn test_splice_keeps_text_between_matches() {
    let text = "AEAT, IVA.";
    let matches = vec![candidate(text, "AEAT", "a"), candidate(text, "IVA", "b")];

    assert_eq!(splice(text, &matches, |m| format!("[{}]", m.meaning)), "[a], [b].");
    assert_eq!(splice(text, &[], |m| m.meaning.clone()), text);
}
