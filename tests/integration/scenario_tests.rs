//! The documented end-to-end parsing scenarios.

use glossia_foundation::{ErrorKind, Literal, RoleValue, SemanticRole};
use glossia_stdlib::standard_parser;

#[test]
fn english_set_binds_destination_and_patient() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set x to 5", "en").unwrap();

    assert_eq!(node.action(), "set");
    assert_eq!(node.source_language(), "en");
    assert_eq!(
        node.role(SemanticRole::Destination),
        Some(&RoleValue::Reference("x".to_string()))
    );
    assert_eq!(
        node.role(SemanticRole::Patient),
        Some(&RoleValue::Literal(Literal::Int(5)))
    );
}

#[test]
fn chinese_set_binds_selector_destination() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("設置 #box 为 5", "zh").unwrap();

    assert_eq!(node.action(), "set");
    assert_eq!(
        node.role(SemanticRole::Destination),
        Some(&RoleValue::Selector("#box".to_string()))
    );
    assert_eq!(
        node.role(SemanticRole::Patient),
        Some(&RoleValue::Literal(Literal::Int(5)))
    );
}

#[test]
fn english_on_binds_event_source_and_body() {
    let parser = standard_parser().unwrap();
    let node = parser
        .parse("on click from #btn toggle .active", "en")
        .unwrap();

    assert_eq!(node.action(), "on");
    assert_eq!(
        node.role(SemanticRole::Event),
        Some(&RoleValue::Reference("click".to_string()))
    );
    assert_eq!(
        node.role(SemanticRole::Source),
        Some(&RoleValue::Selector("#btn".to_string()))
    );
    assert_eq!(
        node.role(SemanticRole::Body),
        Some(&RoleValue::Expression("toggle .active".to_string()))
    );
}

#[test]
fn profile_only_language_parses_through_the_generator() {
    let parser = standard_parser().unwrap();

    // German registers no hand-authored patterns at all.
    let authored: Vec<_> = parser
        .registry()
        .patterns("de")
        .unwrap()
        .into_iter()
        .filter(|p| p.source == glossia_language::PatternSource::Authored)
        .collect();
    assert!(authored.is_empty());

    let node = parser.parse("setze x auf 5", "de").unwrap();
    assert_eq!(node.action(), "set");
    assert_eq!(
        node.role(SemanticRole::Destination),
        Some(&RoleValue::Reference("x".to_string()))
    );
    assert_eq!(
        node.role(SemanticRole::Patient),
        Some(&RoleValue::Literal(Literal::Int(5)))
    );
}

#[test]
fn competing_on_phrasings_resolve_to_the_higher_priority_pattern() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("when clicked toggle .active", "en").unwrap();

    assert_eq!(node.action(), "on");
    assert_eq!(
        node.role(SemanticRole::Event),
        Some(&RoleValue::Reference("clicked".to_string()))
    );
    assert_eq!(
        node.role(SemanticRole::Body),
        Some(&RoleValue::Expression("toggle .active".to_string()))
    );
}

#[test]
fn morphological_keyword_variants_parse_in_generator_languages() {
    let parser = standard_parser().unwrap();

    // Turkish imperative plural, expanded by the profile's morph rule.
    let node = parser.parse("x üzerine 5 olarak ayarlayın", "tr").unwrap();
    assert_eq!(node.action(), "set");
}

#[test]
fn every_standard_language_parses_its_canonical_set_sentence() {
    let parser = standard_parser().unwrap();

    for (language, input) in [
        ("en", "set x to 5"),
        ("es", "establecer x a 5"),
        ("zh", "设置 x 为 5"),
        ("ja", "x を 5 に 設定"),
        ("de", "setze x auf 5"),
        ("fr", "définir x à 5"),
        ("ru", "установить x в 5"),
        ("tr", "x üzerine 5 olarak ayarla"),
        ("ko", "x 에 5 를 설정"),
        ("hi", "x को 5 पर सेट"),
    ] {
        let node = parser
            .parse(input, language)
            .unwrap_or_else(|err| panic!("{language}: {err}"));
        assert_eq!(node.action(), "set", "{language}");
        assert_eq!(
            node.role(SemanticRole::Patient),
            Some(&RoleValue::Literal(Literal::Int(5))),
            "{language}"
        );
    }
}

#[test]
fn unregistered_language_fails_with_language_not_loaded() {
    let parser = standard_parser().unwrap();
    let err = parser.parse("set x to 5", "tlh").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LanguageNotLoaded { .. }));
}

#[test]
fn unmatchable_input_fails_with_no_pattern_match() {
    let parser = standard_parser().unwrap();
    let err = parser.parse("colorless green ideas sleep", "en").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoPatternMatch { .. }));
}

#[test]
fn invalid_destination_fails_with_semantic_mapping() {
    let parser = standard_parser().unwrap();
    // A literal is not assignable: every matching candidate is rejected by
    // the AST builder, and that rejection surfaces.
    let err = parser.parse("set 5 to 6", "en").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SemanticMapping { .. }));
}

#[test]
fn optional_source_group_is_truly_optional() {
    let parser = standard_parser().unwrap();

    let with_source = parser.parse("on click from #btn hide #modal", "en").unwrap();
    assert!(with_source.has_role(SemanticRole::Source));

    let without_source = parser.parse("on click hide #modal", "en").unwrap();
    assert!(!without_source.has_role(SemanticRole::Source));
    assert_eq!(
        without_source.role(SemanticRole::Body),
        Some(&RoleValue::Expression("hide #modal".to_string()))
    );
}
