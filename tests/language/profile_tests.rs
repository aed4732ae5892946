//! Language profile tests.

use glossia_foundation::SemanticRole;
use glossia_language::{AdpositionOrder, LanguageProfile, WordOrder};

#[test]
fn markers_and_keywords_are_independent_namespaces() {
    let profile = LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(SemanticRole::Patient, "to", Vec::<String>::new())
        .with_keyword("to", "to", Vec::<String>::new());

    assert!(profile.marker(SemanticRole::Patient).is_some());
    assert!(profile.keyword("to").is_some());
    assert!(profile.keyword("set").is_none());
}

#[test]
fn morph_rules_apply_to_keywords_and_markers() {
    let profile = LanguageProfile::new(WordOrder::Sov, AdpositionOrder::Postposition)
        .with_morph_rule("를", ["을"])
        .with_marker(SemanticRole::Patient, "를", Vec::<String>::new())
        .with_keyword("set", "설정를", Vec::<String>::new());

    assert!(profile.marker(SemanticRole::Patient).unwrap().matches("을"));
    assert!(profile.keyword("set").unwrap().matches("설정을"));
}

#[test]
fn morph_rules_expand_explicit_alternatives_too() {
    let profile = LanguageProfile::new(WordOrder::Sov, AdpositionOrder::Postposition)
        .with_morph_rule("ın", ["in"])
        .with_keyword("remove", "sil", ["kaldırın"]);

    let aliases = profile.keyword("remove").unwrap();
    assert!(aliases.matches("sil"));
    assert!(aliases.matches("kaldirin"));
}

#[test]
fn later_marker_registration_replaces_earlier() {
    let profile = LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(SemanticRole::Patient, "to", Vec::<String>::new())
        .with_marker(SemanticRole::Patient, "into", Vec::<String>::new());

    let aliases = profile.marker(SemanticRole::Patient).unwrap();
    assert!(aliases.matches("into"));
    assert!(!aliases.matches("to"));
}
