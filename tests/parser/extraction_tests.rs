//! Extraction tests across marker styles and scripts.

use glossia_foundation::{Literal, RoleValue, SemanticRole};
use glossia_stdlib::standard_parser;

#[test]
fn prepositional_marker_extracts_following_span() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("put 5 into #box", "en").unwrap();

    assert_eq!(node.action(), "put");
    assert_eq!(
        node.role(SemanticRole::Patient),
        Some(&RoleValue::Literal(Literal::Int(5)))
    );
    assert_eq!(
        node.role(SemanticRole::Destination),
        Some(&RoleValue::Selector("#box".to_string()))
    );
}

#[test]
fn marker_alternatives_extract_like_the_primary() {
    let parser = standard_parser().unwrap();

    let primary = parser.parse("put 5 into #box", "en").unwrap();
    for alternative in ["put 5 in #box", "put 5 onto #box"] {
        let node = parser.parse(alternative, "en").unwrap();
        assert_eq!(
            node.role(SemanticRole::Destination),
            primary.role(SemanticRole::Destination),
            "{alternative} extracted differently"
        );
    }
}

#[test]
fn postpositional_marker_extracts_preceding_span() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("#box を 5 に 設定", "ja").unwrap();

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
fn traditional_chinese_marker_variant_extracts() {
    let parser = standard_parser().unwrap();

    let simplified = parser.parse("设置 #box 为 5", "zh").unwrap();
    let traditional = parser.parse("設置 #box 為 5", "zh").unwrap();
    assert_eq!(simplified, traditional);
}

#[test]
fn quoted_values_keep_inner_text() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set greeting to \"hello world\"", "en").unwrap();

    assert_eq!(
        node.role(SemanticRole::Patient),
        Some(&RoleValue::Literal(Literal::Str("hello world".to_string())))
    );
}

#[test]
fn property_path_destination_classifies_as_path() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set user.name to \"Ada\"", "en").unwrap();

    assert_eq!(
        node.role(SemanticRole::Destination),
        Some(&RoleValue::PropertyPath(vec![
            "user".to_string(),
            "name".to_string()
        ]))
    );
}

#[test]
fn multi_token_value_stays_an_expression() {
    let parser = standard_parser().unwrap();
    let node = parser.parse("set x to my count + 1", "en").unwrap();

    assert_eq!(
        node.role(SemanticRole::Patient),
        Some(&RoleValue::Expression("my count + 1".to_string()))
    );
}
