//! Rendering and translation tests.

use glossia_stdlib::standard_parser;

#[test]
fn renders_node_in_its_own_language() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set x to 5", "en").unwrap();
    assert_eq!(parser.render(&node, "en").unwrap(), "set x to 5");
}

#[test]
fn renders_node_into_other_languages() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set x to 5", "en").unwrap();

    assert_eq!(parser.render(&node, "es").unwrap(), "establecer x a 5");
    assert_eq!(parser.render(&node, "zh").unwrap(), "设置 x 为 5");
    assert_eq!(parser.render(&node, "ja").unwrap(), "x を 5 に 設定");
}

#[test]
fn render_uses_generated_patterns_for_profile_only_languages() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set x to 5", "en").unwrap();

    // German ships no authored patterns; the generated template renders.
    assert_eq!(parser.render(&node, "de").unwrap(), "setze x auf 5");
}

#[test]
fn optional_groups_render_only_when_bound() {
    let parser = standard_parser().unwrap();

    let with_target = parser.parse("toggle .active on #menu", "en").unwrap();
    assert_eq!(
        parser.render(&with_target, "en").unwrap(),
        "toggle .active on #menu"
    );

    let without_target = parser.parse("toggle .active", "en").unwrap();
    assert_eq!(parser.render(&without_target, "en").unwrap(), "toggle .active");
}

#[test]
fn render_fails_for_unregistered_language() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set x to 5", "en").unwrap();
    let err = parser.render(&node, "xx").unwrap_err();
    assert!(matches!(
        err.kind,
        glossia_foundation::ErrorKind::LanguageNotLoaded { .. }
    ));
}

#[test]
fn quoted_string_values_render_requoted() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set greeting to \"hello world\"", "en").unwrap();
    assert_eq!(
        parser.render(&node, "en").unwrap(),
        "set greeting to \"hello world\""
    );
}
