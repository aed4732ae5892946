//! Registry publication, isolation, and concurrency tests.

use std::sync::Arc;
use std::thread;

use glossia_foundation::SemanticRole;
use glossia_language::{
    AdpositionOrder, LanguagePattern, LanguageProfile, PatternSource, TemplateToken, WordOrder,
};
use glossia_parser::{SemanticParser, SpaceDelimited};
use glossia_stdlib::{empty_registry, register_standard_languages, standard_parser};

fn authored_set(id: &str, priority: i32) -> LanguagePattern {
    LanguagePattern::authored(
        id,
        "en",
        "set",
        priority,
        vec![
            TemplateToken::literal("set"),
            TemplateToken::role(SemanticRole::Destination),
            TemplateToken::literal("to"),
            TemplateToken::role(SemanticRole::Patient),
        ],
    )
}

#[test]
fn registries_are_isolated_instances() {
    let loaded = empty_registry();
    register_standard_languages(&loaded).unwrap();
    let empty = empty_registry();

    assert!(loaded.is_registered("en"));
    assert!(!empty.is_registered("en"));
    assert!(empty.registered_languages().is_empty());
}

#[test]
fn try_profile_mirrors_profile() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    assert!(registry.try_profile("en").is_some());
    assert!(registry.try_profile("xx").is_none());
    assert!(registry.profile("xx").is_err());
}

#[test]
fn patterns_for_unknown_command_is_empty_not_error() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    let patterns = registry.patterns_for("en", "frobnicate").unwrap();
    assert!(patterns.is_empty());
}

#[test]
fn whole_set_publish_is_never_partially_visible() {
    let registry = Arc::new(empty_registry());
    registry.register_language(
        "en",
        Arc::new(SpaceDelimited::new()),
        LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition),
    );

    // Writers alternate between a two-pattern set and a one-pattern set;
    // readers must only ever observe one of the two complete sets.
    let two = vec![authored_set("en:set:a", 100), authored_set("en:set:b", 90)];
    let one = vec![authored_set("en:set:c", 80)];

    thread::scope(|scope| {
        let writer_registry = Arc::clone(&registry);
        scope.spawn(move || {
            for i in 0..200 {
                let set = if i % 2 == 0 { two.clone() } else { one.clone() };
                writer_registry.register_patterns("en", set).unwrap();
            }
        });

        for _ in 0..4 {
            let reader_registry = Arc::clone(&registry);
            scope.spawn(move || {
                for _ in 0..200 {
                    let authored: Vec<String> = reader_registry
                        .patterns_for("en", "set")
                        .unwrap()
                        .into_iter()
                        .filter(|p| p.source == PatternSource::Authored)
                        .map(|p| p.id.clone())
                        .collect();

                    let ok = authored.is_empty()
                        || authored == ["en:set:a", "en:set:b"]
                        || authored == ["en:set:c"];
                    assert!(ok, "observed a partial pattern set: {authored:?}");
                }
            });
        }
    });
}

#[test]
fn parses_keep_working_during_reregistration() {
    let parser = Arc::new(standard_parser().unwrap());

    thread::scope(|scope| {
        let writer = Arc::clone(&parser);
        scope.spawn(move || {
            for i in 0..100 {
                writer
                    .registry()
                    .register_patterns("en", vec![authored_set("en:set:swap", 100 + i)])
                    .unwrap();
            }
        });

        for _ in 0..4 {
            let reader = Arc::clone(&parser);
            scope.spawn(move || {
                for _ in 0..100 {
                    let node = reader.parse("set x to 5", "en").unwrap();
                    assert_eq!(node.action(), "set");
                }
            });
        }
    });
}

#[test]
fn parser_over_shared_registry_sees_late_registrations() {
    let registry = Arc::new(empty_registry());
    let parser = SemanticParser::new(Arc::clone(&registry));

    assert!(parser.parse("set x to 5", "en").is_err());
    register_standard_languages(&registry).unwrap();
    assert!(parser.parse("set x to 5", "en").is_ok());
}
