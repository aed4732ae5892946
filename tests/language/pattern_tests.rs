//! Pattern validation tests.

use glossia_foundation::SemanticRole;
use glossia_language::{
    ExtractionRule, LanguagePattern, MarkerSide, PatternSource, TemplateToken,
};

fn template() -> Vec<TemplateToken> {
    vec![
        TemplateToken::literal("set"),
        TemplateToken::role(SemanticRole::Destination),
        TemplateToken::literal("to"),
        TemplateToken::role(SemanticRole::Patient),
    ]
}

#[test]
fn extraction_keys_must_reference_template_roles() {
    let pattern = LanguagePattern::authored("en:set:x", "en", "set", 100, template())
        .with_extraction(
            SemanticRole::Event,
            ExtractionRule::marker("on", Vec::<String>::new(), MarkerSide::After),
        );

    let err = pattern.validate().unwrap_err();
    assert!(matches!(
        err.kind,
        glossia_foundation::ErrorKind::InvalidPattern { .. }
    ));
}

#[test]
fn valid_extraction_keys_pass() {
    let pattern = LanguagePattern::authored("en:set:x", "en", "set", 100, template())
        .with_extraction(SemanticRole::Destination, ExtractionRule::position(1))
        .with_extraction(
            SemanticRole::Patient,
            ExtractionRule::marker("to", Vec::<String>::new(), MarkerSide::After),
        );

    assert!(pattern.validate().is_ok());
}

#[test]
fn roles_inside_groups_satisfy_extraction_keys() {
    let pattern = LanguagePattern::authored(
        "en:toggle:x",
        "en",
        "toggle",
        100,
        vec![
            TemplateToken::literal("toggle"),
            TemplateToken::role(SemanticRole::Patient),
            TemplateToken::optional_group(vec![
                TemplateToken::literal("on"),
                TemplateToken::role(SemanticRole::Destination),
            ]),
        ],
    )
    .with_extraction(
        SemanticRole::Destination,
        ExtractionRule::marker("on", Vec::<String>::new(), MarkerSide::After),
    );

    assert!(pattern.validate().is_ok());
}

#[test]
fn empty_template_is_invalid() {
    let pattern = LanguagePattern::authored("en:empty", "en", "set", 0, Vec::new());
    assert!(pattern.validate().is_err());
}

#[test]
fn source_tier_is_independent_of_priority() {
    let generated = LanguagePattern::generated("g", "en", "set", 1_000_000, template());
    let authored = LanguagePattern::authored("a", "en", "set", -1_000_000, template());

    assert_eq!(generated.source, PatternSource::Generated);
    assert_eq!(authored.source, PatternSource::Authored);
    assert!(authored.source.rank() > generated.source.rank());
}

#[test]
fn required_roles_exclude_optional_groups() {
    let pattern = LanguagePattern::authored(
        "en:on:x",
        "en",
        "on",
        100,
        vec![
            TemplateToken::literal("on"),
            TemplateToken::role_single(SemanticRole::Event),
            TemplateToken::optional_group(vec![
                TemplateToken::literal("from"),
                TemplateToken::role_single(SemanticRole::Source),
            ]),
            TemplateToken::body(SemanticRole::Body),
        ],
    );

    assert_eq!(
        pattern.required_roles(),
        vec![SemanticRole::Event, SemanticRole::Body]
    );
    assert_eq!(
        pattern.template_roles(),
        vec![SemanticRole::Event, SemanticRole::Source, SemanticRole::Body]
    );
}
