// Tests for the scanner
// Test cases:
// - Plain text without acronyms yields nothing
// - Offsets always slice back to the surface
// - Ambiguous acronyms: rejected by default, auto resolved, manually resolved
// - Protected contexts, exclude/include filters, first occurrence only
// - Case handling of the output form
// - Query operations and dictionary stats

use std::collections::BTreeMap;

use super::*;
use crate::dictionary::{DictionaryBuilder, DictionaryEntry, VariantIndex};
use crate::scanner::ScanStats;

fn test_scanner() -> Scanner {
    let dictionary = DictionaryBuilder::new()
        .row("AEAT", "Agencia Estatal de Administración Tributaria")
        .row("IVA", "Impuesto sobre el Valor Añadido")
        .row("BOE", "Boletín Oficial del Estado")
        .row("CE", "Constitución Española")
        .row("CE", "Comunidad Europea")
        .row("art.", "artículo")
        .row("LEC", "Ley de Enjuiciamiento Civil")
        .row("LECrim", "Ley de Enjuiciamiento Criminal")
        .build();
    Scanner::new(dictionary).unwrap()
}

fn reasons(outcome: &ScanOutcome) -> Vec<OmissionReason> {
    outcome.omitted.iter().map(|o| o.reason).collect()
}

#[test]
fn test_text_without_acronyms() {
    let scanner = test_scanner();
    let outcome = scanner.scan_detailed("Texto sin nada que expandir", &ResolvedOptions::default());

    assert!(outcome.matches.is_empty());
    assert!(outcome.omitted.is_empty());
    assert_eq!(outcome.stats, ScanStats::default());
}

#[test]
fn test_blank_input_returns_immediately() {
    let scanner = test_scanner();
    assert_eq!(
        scanner.scan_detailed("  \n\t ", &ResolvedOptions::default()),
        ScanOutcome::default()
    );
    assert_eq!(scanner.scan("", &ResolvedOptions::default()), ScanOutcome::default());
}

#[test]
fn test_matches_in_text_order_with_valid_offsets() {
    let scanner = test_scanner();
    let text = "Señoría, la AEAT gestiona el IVA según el art. 5 de la LECrim";
    let outcome = scanner.scan(text, &ResolvedOptions::default());

    let found: Vec<&str> = outcome.matches.iter().map(|m| m.surface.as_str()).collect();
    assert_eq!(found, vec!["AEAT", "IVA", "art.", "LECrim"]);
    for candidate in &outcome.matches {
        assert_eq!(&text[candidate.start..candidate.end], candidate.surface);
    }
    assert_eq!(outcome.matches[3].meaning, "Ley de Enjuiciamiento Criminal");
    assert_eq!(outcome.stats.total_expanded, 4);
    assert_eq!(outcome.stats.total_found, 4);
}

#[test]
fn test_ambiguous_acronym_is_rejected_by_default() {
    let scanner = test_scanner();
    let outcome = scanner.scan_detailed("La CE protege", &ResolvedOptions::default());

    assert!(outcome.matches.is_empty());
    assert_eq!(reasons(&outcome), vec![OmissionReason::AmbiguousUnresolved]);
    let details = outcome.omitted[0].details.as_deref().unwrap();
    assert!(details.contains("Constitución Española"));
    assert!(details.contains("Comunidad Europea"));
    assert_eq!(
        outcome.stats,
        ScanStats {
            total_found: 1,
            total_expanded: 0,
            ambiguous_not_expanded: 1,
        }
    );
}

#[test]
fn test_ambiguity_counted_without_diagnostics() {
    let scanner = test_scanner();
    let outcome = scanner.scan("La CE protege", &ResolvedOptions::default());

    assert!(outcome.omitted.is_empty());
    assert_eq!(outcome.stats.ambiguous_not_expanded, 1);
}

#[test]
fn test_auto_resolve_uses_highest_priority_meaning() {
    let scanner = test_scanner();
    let options = ResolvedOptions {
        auto_resolve_duplicates: true,
        ..ResolvedOptions::default()
    };
    let outcome = scanner.scan("La CE protege", &options);

    assert_eq!(outcome.matches.len(), 1);
    let candidate = &outcome.matches[0];
    assert_eq!(candidate.meaning, "Constitución Española");
    assert!(candidate.has_multiple_meanings);
    assert_eq!(
        candidate.all_meanings,
        Some(vec![
            "Constitución Española".to_string(),
            "Comunidad Europea".to_string()
        ])
    );
}

#[test]
fn test_manual_resolution_wins_over_auto_resolve() {
    let scanner = test_scanner();
    let mut resolution = BTreeMap::new();
    resolution.insert("c.e.".to_string(), "Comunidad Europea".to_string());
    let options = ResolvedOptions {
        auto_resolve_duplicates: true,
        duplicate_resolution: resolution,
        ..ResolvedOptions::default()
    };

    let outcome = scanner.scan("Normativa de la CE", &options);
    assert_eq!(outcome.matches[0].meaning, "Comunidad Europea");
}

#[test]
fn test_unambiguous_match_has_no_meaning_list() {
    let scanner = test_scanner();
    let outcome = scanner.scan("El BOE publica", &ResolvedOptions::default());

    assert!(!outcome.matches[0].has_multiple_meanings);
    assert!(outcome.matches[0].all_meanings.is_none());
}

#[test]
fn test_protected_contexts() {
    let scanner = test_scanner();
    let text = "Visita https://aeat.es y escribe a info@boe.es y usa `AEAT` fuera AEAT";
    let outcome = scanner.scan_detailed(text, &ResolvedOptions::default());

    assert_eq!(
        reasons(&outcome),
        vec![
            OmissionReason::InsideUrl,
            OmissionReason::InsideEmail,
            OmissionReason::InsideInlineCode
        ]
    );
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].start, text.rfind("AEAT").unwrap());
    // Context rejections don't count as found acronyms
    assert_eq!(outcome.stats.total_found, 1);
}

#[test]
fn test_fenced_code_block_is_protected() {
    let scanner = test_scanner();
    let text = "```\nIVA = 21\n```\nEl IVA sube";
    let outcome = scanner.scan_detailed(text, &ResolvedOptions::default());

    assert_eq!(reasons(&outcome), vec![OmissionReason::InsideCodeBlock]);
    assert_eq!(outcome.matches.len(), 1);
}

#[test]
fn test_expand_only_first() {
    let scanner = test_scanner();
    let options = ResolvedOptions {
        expand_only_first: true,
        ..ResolvedOptions::default()
    };
    let text = "AEAT y AEAT";
    let outcome = scanner.scan_detailed(text, &options);

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].start, 0);
    assert_eq!(reasons(&outcome), vec![OmissionReason::ExpandOnlyFirst]);
    assert_eq!(outcome.omitted[0].start, 7);
}

#[test]
fn test_expand_only_first_treats_variants_as_one_acronym() {
    let scanner = test_scanner();
    let options = ResolvedOptions {
        expand_only_first: true,
        ..ResolvedOptions::default()
    };
    let outcome = scanner.scan("La A.E.A.T. o la AEAT", &options);

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].surface, "A.E.A.T.");
}

#[test]
fn test_exclude_filter_is_normalized() {
    let scanner = test_scanner();
    let options = ResolvedOptions {
        exclude: vec!["a.e.a.t.".to_string()],
        ..ResolvedOptions::default()
    };
    let outcome = scanner.scan_detailed("La AEAT y el IVA", &options);

    assert_eq!(reasons(&outcome), vec![OmissionReason::Excluded]);
    assert_eq!(outcome.matches[0].surface, "IVA");
}

#[test]
fn test_include_filter_is_normalized() {
    let scanner = test_scanner();
    let options = ResolvedOptions {
        include: Some(vec!["aeat".to_string()]),
        ..ResolvedOptions::default()
    };
    let outcome = scanner.scan_detailed("La AEAT y el IVA", &options);

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].surface, "AEAT");
    assert_eq!(reasons(&outcome), vec![OmissionReason::NotInInclude]);
}

#[test]
fn test_empty_include_means_no_filter() {
    let scanner = test_scanner();
    let options = ResolvedOptions {
        include: Some(Vec::new()),
        ..ResolvedOptions::default()
    };
    assert_eq!(scanner.scan("La AEAT y el IVA", &options).matches.len(), 2);
}

#[test]
fn test_output_form_follows_preserve_case() {
    let scanner = test_scanner();
    let text = "la aeat notifica";

    let preserved = scanner.scan(text, &ResolvedOptions::default());
    assert_eq!(preserved.matches[0].acronym, "aeat");

    let options = ResolvedOptions {
        preserve_case: false,
        ..ResolvedOptions::default()
    };
    let canonical = scanner.scan(text, &options);
    assert_eq!(canonical.matches[0].acronym, "AEAT");
    assert_eq!(canonical.matches[0].surface, "aeat");
}

#[test]
fn test_token_boundary_guard() {
    let scanner = Scanner::new(DictionaryBuilder::new().row("EAT", "no importa").build()).unwrap();
    let outcome = scanner.scan_detailed("CREATION", &ResolvedOptions::default());

    assert!(outcome.matches.is_empty());
    assert!(outcome.omitted.is_empty());
}

#[test]
fn test_unindexed_variant_is_not_found() {
    let dictionary = CompiledDictionary {
        entries: vec![DictionaryEntry {
            id: "e1".to_string(),
            original: "XYZ".to_string(),
            meaning: "Sin índice".to_string(),
            variants: vec!["XYZ".to_string()],
            priority: 100,
        }],
        index: VariantIndex::default(),
        ..CompiledDictionary::default()
    };
    let scanner = Scanner::new(dictionary).unwrap();
    let outcome = scanner.scan_detailed("ver XYZ", &ResolvedOptions::default());

    assert!(outcome.matches.is_empty());
    assert_eq!(reasons(&outcome), vec![OmissionReason::NotFound]);
}

#[test]
fn test_malformed_dictionary_fails_fast() {
    let mut dictionary = DictionaryBuilder::new()
        .row("CE", "Constitución Española")
        .row("CE", "Comunidad Europea")
        .build();
    dictionary.conflicts[0].candidates[0].entry_id = "missing".to_string();

    assert!(matches!(
        Scanner::new(dictionary),
        Err(DictionaryError::DanglingConflictReference { .. })
    ));
}

#[test]
fn test_find_acronym() {
    let scanner = test_scanner();

    let ce = scanner.find_acronym("CE").unwrap();
    assert_eq!(ce.acronym, "CE");
    assert!(ce.has_duplicates);
    assert_eq!(ce.meanings.len(), 2);

    let aeat = scanner.find_acronym("A.E.A.T.").unwrap();
    assert_eq!(aeat.acronym, "AEAT");
    assert_eq!(
        aeat.meanings,
        vec!["Agencia Estatal de Administración Tributaria"]
    );
    assert!(!aeat.has_duplicates);

    assert!(scanner.find_acronym("NOEXISTE").is_none());
}

#[test]
fn test_list_acronyms_and_stats() {
    let scanner = test_scanner();

    let acronyms = scanner.list_acronyms();
    assert_eq!(
        acronyms,
        vec!["AEAT", "IVA", "BOE", "CE", "art.", "LEC", "LECrim"]
    );

    assert_eq!(
        scanner.stats(),
        DictionaryStats {
            total_acronyms: 8,
            acronyms_with_duplicates: 2,
            acronyms_with_punctuation: 1,
        }
    );
}

/// CE and C.E. rows form one conflict group keyed by "CE"; the computed
/// priority of "C.E." beats the manual one of "CE", so the default entry
/// is not the one the group is keyed by.
fn mixed_spelling_scanner() -> Scanner {
    let dictionary = DictionaryBuilder::new()
        .row("CE", "Constitución Española")
        .row("C.E.", "Comunidad Europea")
        .build();
    assert_eq!(dictionary.conflicts.len(), 1);
    assert_eq!(dictionary.conflicts[0].acronym_key, "CE");
    assert_eq!(dictionary.conflicts[0].candidates[0].meaning, "Comunidad Europea");
    Scanner::new(dictionary).unwrap()
}

#[test]
fn test_conflict_with_mixed_spellings_stays_ambiguous() {
    let scanner = mixed_spelling_scanner();
    let outcome = scanner.scan_detailed("CE y C.E.", &ResolvedOptions::default());

    assert!(outcome.matches.is_empty());
    assert_eq!(
        reasons(&outcome),
        vec![
            OmissionReason::AmbiguousUnresolved,
            OmissionReason::AmbiguousUnresolved
        ]
    );
    assert_eq!(outcome.stats.ambiguous_not_expanded, 2);
}

#[test]
fn test_conflict_with_mixed_spellings_auto_resolves() {
    let scanner = mixed_spelling_scanner();
    let options = ResolvedOptions {
        auto_resolve_duplicates: true,
        ..ResolvedOptions::default()
    };
    let outcome = scanner.scan("CE y C.E.", &options);

    assert_eq!(outcome.matches.len(), 2);
    for candidate in &outcome.matches {
        assert_eq!(candidate.meaning, "Comunidad Europea");
        assert!(candidate.has_multiple_meanings);
        assert_eq!(candidate.all_meanings.as_ref().map(Vec::len), Some(2));
    }
}

#[test]
fn test_queries_with_mixed_spellings_report_duplicates() {
    let scanner = mixed_spelling_scanner();

    let info = scanner.find_acronym("CE").unwrap();
    assert!(info.has_duplicates);
    assert_eq!(info.meanings, vec!["Comunidad Europea", "Constitución Española"]);

    assert_eq!(scanner.stats().acronyms_with_duplicates, 2);
}
