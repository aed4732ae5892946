//! Tokenizer integration tests, driven through registered languages.

use glossia_parser::TokenKind;
use glossia_stdlib::{empty_registry, register_standard_languages};

#[test]
fn english_tokens_carry_offsets_into_source() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    let input = "set user.name to \"Ada Lovelace\"";
    let stream = registry.tokenize(input, "en").unwrap();

    for token in stream.tokens() {
        assert_eq!(&input[token.start..token.end], token.text);
    }
    assert_eq!(stream.len(), 4);
    assert_eq!(stream.tokens()[3].kind, TokenKind::Quoted);
}

#[test]
fn chinese_tokenizes_without_spaces() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    let stream = registry.tokenize("設置#box为5", "zh").unwrap();
    let texts: Vec<&str> = stream.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["設置", "#box", "为", "5"]);
}

#[test]
fn japanese_keeps_katakana_event_names_whole() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    let stream = registry.tokenize("クリックしたら#modalを表示", "ja").unwrap();
    let texts: Vec<&str> = stream.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["クリック", "したら", "#modal", "を", "表示"]);
}

#[test]
fn unregistered_language_is_language_not_loaded() {
    let registry = empty_registry();
    let err = registry.tokenize("set x to 5", "xx").unwrap_err();
    assert!(matches!(
        err.kind,
        glossia_foundation::ErrorKind::LanguageNotLoaded { .. }
    ));
}

#[test]
fn selector_kinds_survive_all_tokenizers() {
    let registry = empty_registry();
    register_standard_languages(&registry).unwrap();

    for (input, language) in [("toggle .active on #menu", "en"), ("切换.active", "zh")] {
        let stream = registry.tokenize(input, language).unwrap();
        assert!(
            stream
                .tokens()
                .iter()
                .any(|t| t.kind == TokenKind::ClassSelector),
            "no class selector in {language} stream"
        );
    }
}
