//! Matching and disambiguation tests over the shipped pattern tables.

use glossia_parser::PatternMatcher;
use glossia_stdlib::{empty_registry, register_standard_languages};

#[test]
fn competing_on_patterns_resolve_by_priority() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    let stream = registry.tokenize("when clicked toggle .active", "en").unwrap();
    let candidates = registry.patterns_for("en", "on").unwrap();
    let results = PatternMatcher::match_all(&stream, &candidates);

    // Both authored "on" patterns match ("on" accepts "when" as an
    // alternative); the higher-priority past-participle pattern wins.
    assert!(results.len() >= 2);
    assert_eq!(results[0].pattern.id, "en:on:2");
    assert_eq!(results[0].pattern.priority, 105);
}

#[test]
fn authored_patterns_rank_above_generated_for_same_command() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    let stream = registry.tokenize("set x to 5", "en").unwrap();
    let candidates = registry.patterns_for("en", "set").unwrap();
    let results = PatternMatcher::match_all(&stream, &candidates);

    assert!(results.len() >= 2, "authored and generated should both match");
    assert_eq!(
        results[0].pattern.source,
        glossia_language::PatternSource::Authored
    );
    assert!(
        results
            .iter()
            .skip_while(|r| r.pattern.source == glossia_language::PatternSource::Authored)
            .all(|r| r.pattern.source == glossia_language::PatternSource::Generated),
        "generated matches must all sort after authored ones"
    );
}

#[test]
fn optional_group_inclusion_raises_specificity() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();
    let candidates = registry.patterns_for("en", "toggle").unwrap();

    let with_target = registry.tokenize("toggle .active on #menu", "en").unwrap();
    let with_results = PatternMatcher::match_all(&with_target, &candidates);

    let without_target = registry.tokenize("toggle .active", "en").unwrap();
    let without_results = PatternMatcher::match_all(&without_target, &candidates);

    let spec_with = with_results
        .iter()
        .find(|r| r.pattern.id == "en:toggle:1")
        .unwrap()
        .specificity;
    let spec_without = without_results
        .iter()
        .find(|r| r.pattern.id == "en:toggle:1")
        .unwrap()
        .specificity;

    assert!(spec_with > spec_without);
}

#[test]
fn no_candidate_match_is_empty_not_error() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    let stream = registry.tokenize("completely unrelated words", "en").unwrap();
    let candidates = registry.patterns("en").unwrap();
    assert!(PatternMatcher::match_all(&stream, &candidates).is_empty());
}
