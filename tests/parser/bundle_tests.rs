//! Language bundle loading tests.

use std::fs;

use glossia_foundation::{ErrorKind, RoleValue, SemanticRole};
use glossia_parser::{SemanticParser, load_bundle_path, load_bundle_str};
use glossia_stdlib::empty_registry;

const PORTUGUESE_BUNDLE: &str = r#"{
    "code": "pt",
    "tokenizer": { "strategy": "space-delimited" },
    "profile": {
        "word_order": "svo",
        "adpositions": "preposition",
        "markers": {
            "patient": { "primary": "para", "alternatives": ["como"] },
            "source": { "primary": "de" }
        },
        "keywords": {
            "set": { "primary": "definir", "alternatives": ["define"] },
            "show": { "primary": "mostrar", "alternatives": ["mostra"] }
        }
    },
    "patterns": [
        {
            "id": "pt:set:1",
            "command": "set",
            "priority": 100,
            "template": [
                { "type": "literal", "value": "definir", "alternatives": ["define"] },
                { "type": "role", "role": "destination" },
                { "type": "literal", "value": "para", "alternatives": ["como"] },
                { "type": "role", "role": "patient" }
            ],
            "extraction": {
                "destination": { "rule": "position", "index": 1 },
                "patient": { "rule": "marker", "marker": "para", "alternatives": ["como"], "side": "after" }
            }
        }
    ]
}"#;

#[test]
fn loaded_bundle_is_immediately_parseable() {
    let registry = std::sync::Arc::new(empty_registry());
    let code = load_bundle_str(&registry, PORTUGUESE_BUNDLE, "pt.json").unwrap();
    assert_eq!(code, "pt");

    let parser = SemanticParser::new(registry);
    let node = parser.parse("definir x para 5", "pt").unwrap();
    assert_eq!(node.action(), "set");
    assert_eq!(
        node.role(SemanticRole::Destination),
        Some(&RoleValue::Reference("x".to_string()))
    );
}

#[test]
fn bundle_keywords_feed_the_generator() {
    let registry = std::sync::Arc::new(empty_registry());
    load_bundle_str(&registry, PORTUGUESE_BUNDLE, "pt.json").unwrap();

    // "show" has a keyword but no authored pattern: generated fallback only.
    let parser = SemanticParser::new(registry);
    let node = parser.parse("mostrar #modal", "pt").unwrap();
    assert_eq!(node.action(), "show");
}

#[test]
fn bundle_file_round_trip() {
    let path = std::env::temp_dir().join("glossia-bundle-test-pt.json");
    fs::write(&path, PORTUGUESE_BUNDLE).unwrap();

    let registry = empty_registry();
    let code = load_bundle_path(&registry, &path).unwrap();
    assert_eq!(code, "pt");
    assert!(registry.is_registered("pt"));

    fs::remove_file(&path).ok();
}

#[test]
fn load_failure_names_code_source_and_cause() {
    let registry = empty_registry();
    let truncated = &PORTUGUESE_BUNDLE[..80];
    let err = load_bundle_str(&registry, truncated, "pt.json").unwrap_err();

    let ErrorKind::LanguageLoad { source, cause, .. } = &err.kind else {
        panic!("expected LanguageLoad, got {err}");
    };
    assert_eq!(source, "pt.json");
    assert!(!cause.is_empty());
    assert!(!registry.is_registered("pt"));
}

#[test]
fn reloading_a_bundle_replaces_the_language() {
    let registry = empty_registry();
    load_bundle_str(&registry, PORTUGUESE_BUNDLE, "pt.json").unwrap();

    let replacement = PORTUGUESE_BUNDLE.replace("\"priority\": 100", "\"priority\": 60");
    load_bundle_str(&registry, &replacement, "pt-v2.json").unwrap();

    let patterns = registry.patterns_for("pt", "set").unwrap();
    let authored = patterns
        .iter()
        .find(|p| p.id == "pt:set:1")
        .expect("authored pattern survives reload");
    assert_eq!(authored.priority, 60);
}
