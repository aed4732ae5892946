//! The round-trip law: rendering a parsed node and re-parsing the result
//! reproduces the same role bindings.

use proptest::prelude::*;

use glossia_stdlib::standard_parser;

/// Canonical sentences, one per (language, command) worth checking.
const CANONICAL: &[(&str, &str)] = &[
    ("en", "set x to 5"),
    ("en", "put 5 into #box"),
    ("en", "toggle .active on #menu"),
    ("en", "toggle .active"),
    ("en", "add .hot to #nav"),
    ("en", "remove .hot from #nav"),
    ("en", "show #modal"),
    ("en", "hide #modal"),
    ("en", "wait 2"),
    ("en", "on click from #btn toggle .active"),
    ("en", "when clicked toggle .active"),
    ("es", "establecer x a 5"),
    ("es", "alternar .activo en #menu"),
    ("es", "mostrar #modal"),
    ("zh", "设置 #box 为 5"),
    ("zh", "切换 .active"),
    ("zh", "显示 #modal"),
    ("ja", "#box を 5 に 設定"),
    ("ja", ".active を 切り替える"),
    ("ja", "#modal を 表示"),
    ("de", "setze x auf 5"),
    ("fr", "définir x à 5"),
    ("ru", "установить x в 5"),
    ("tr", "x üzerine 5 olarak ayarla"),
    ("ko", "x 에 5 를 설정"),
    ("hi", "x को 5 पर सेट"),
];

#[test]
fn canonical_sentences_round_trip() {
    let parser = standard_parser().unwrap();

    for (language, input) in CANONICAL {
        let node = parser
            .parse(input, language)
            .unwrap_or_else(|err| panic!("parse {language} {input:?}: {err}"));
        let surface = parser
            .render(&node, language)
            .unwrap_or_else(|err| panic!("render {language} {input:?}: {err}"));
        let reparsed = parser
            .parse(&surface, language)
            .unwrap_or_else(|err| panic!("re-parse {language} {surface:?}: {err}"));

        assert_eq!(reparsed, node, "{language}: {input:?} → {surface:?}");
    }
}

#[test]
fn translation_round_trips_through_every_authored_language() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set x to 5", "en").unwrap();

    for language in ["en", "es", "zh", "ja"] {
        let surface = parser.render(&node, language).unwrap();
        let reparsed = parser.parse(&surface, language).unwrap();

        assert_eq!(reparsed.action(), node.action());
        for (role, value) in node.roles() {
            assert_eq!(reparsed.role(role), Some(value), "{language}: {role}");
        }
    }
}

proptest! {
    #[test]
    fn english_set_round_trips_for_arbitrary_bindings(
        destination in "[a-z][a-z0-9_]{0,8}",
        value in -1_000_000i64..1_000_000,
    ) {
        let parser = standard_parser().unwrap();

        let input = format!("set {destination} to {value}");
        let node = parser.parse(&input, "en").unwrap();
        let surface = parser.render(&node, "en").unwrap();
        let reparsed = parser.parse(&surface, "en").unwrap();

        prop_assert_eq!(reparsed, node);
    }

    #[test]
    fn english_toggle_round_trips_for_arbitrary_selectors(
        class in "[a-z][a-z0-9-]{0,10}",
        target in "[a-z][a-z0-9-]{0,10}",
    ) {
        let parser = standard_parser().unwrap();

        let input = format!("toggle .{class} on #{target}");
        let node = parser.parse(&input, "en").unwrap();
        let surface = parser.render(&node, "en").unwrap();
        let reparsed = parser.parse(&surface, "en").unwrap();

        prop_assert_eq!(reparsed, node);
    }
}
