// Tests for the variant pattern
// Test cases:
// - Longest variant wins at a position
// - Variants glued to word chars are skipped, shorter flanked variants still match
// - Empty dictionaries never match

use super::*;
use crate::dictionary::{CompiledDictionary, DictionaryBuilder};

fn pattern_for(rows: &[(&str, &str)]) -> VariantPattern {
    let builder = rows
        .iter()
        .fold(DictionaryBuilder::new(), |builder, (a, m)| builder.row(*a, *m));
    let index = DictionaryIndex::new(builder.build()).unwrap();
    VariantPattern::new(&index).unwrap()
}

fn surfaces<'a>(text: &'a str, spans: &[(usize, usize)]) -> Vec<&'a str> {
    spans.iter().map(|(s, e)| &text[*s..*e]).collect()
}

#[test]
fn test_variants_sorted_longest_first() {
    let pattern = pattern_for(&[("art.", "artículo"), ("AEAT", "Agencia Estatal")]);
    let lengths: Vec<usize> = pattern.variants().iter().map(String::len).collect();
    assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    assert!(pattern.variants().contains(&"A.E.A.T.".to_string()));
}

#[test]
fn test_longest_variant_wins() {
    let pattern = pattern_for(&[
        ("LEC", "Ley de Enjuiciamiento Civil"),
        ("LECrim", "Ley de Enjuiciamiento Criminal"),
        ("art.", "artículo"),
    ]);
    let text = "según el art. 5 de la LECrim y la LEC";
    let spans = pattern.find_spans(text);
    assert_eq!(surfaces(text, &spans), vec!["art.", "LECrim", "LEC"]);
}

#[test]
fn test_word_glued_occurrences_are_skipped() {
    let pattern = pattern_for(&[("EAT", "no importa")]);
    assert!(pattern.find_spans("CREATION").is_empty());
    assert!(pattern.find_spans("EATS").is_empty());
    assert!(pattern.find_spans("ÁEAT").is_empty());

    let text = "(EAT)";
    assert_eq!(pattern.find_spans(text), vec![(1, 4)]);
}

#[test]
fn test_shorter_variant_used_when_longer_is_glued() {
    let pattern = pattern_for(&[("art.", "artículo")]);
    let text = "art.x";
    assert_eq!(surfaces(text, &pattern.find_spans(text)), vec!["art"]);
}

#[test]
fn test_dotted_variant_at_end_of_text() {
    let pattern = pattern_for(&[("AEAT", "Agencia Estatal de Administración Tributaria")]);
    let text = "Lo dice la A.E.A.T.";
    assert_eq!(surfaces(text, &pattern.find_spans(text)), vec!["A.E.A.T."]);
}

#[test]
fn test_spans_follow_multibyte_text() {
    let pattern = pattern_for(&[("IVA", "Impuesto sobre el Valor Añadido")]);
    let text = "Según año, el IVA";
    let spans = pattern.find_spans(text);
    assert_eq!(surfaces(text, &spans), vec!["IVA"]);
    assert_eq!(spans[0].1, text.len());
}

#[test]
fn test_empty_dictionary_never_matches() {
    let index = DictionaryIndex::new(CompiledDictionary::default()).unwrap();
    let pattern = VariantPattern::new(&index).unwrap();
    assert!(pattern.variants().is_empty());
    assert!(pattern.find_spans("AEAT y BOE").is_empty());
}
