//! Fallback generation tests.

use glossia_foundation::SemanticRole;
use glossia_language::{
    AdpositionOrder, CommandCatalog, CommandDescriptor, ExtractionRule, LanguageProfile,
    PatternGenerator, PatternSource, TemplateToken, WordOrder,
};

fn catalog() -> CommandCatalog {
    let mut catalog = CommandCatalog::new();
    catalog.register(
        CommandDescriptor::new("set")
            .with_required(SemanticRole::Destination, Vec::new())
            .with_required(SemanticRole::Patient, Vec::new()),
    );
    catalog.register(
        CommandDescriptor::new("toggle")
            .with_required(SemanticRole::Patient, Vec::new())
            .with_optional(SemanticRole::Destination, Vec::new()),
    );
    catalog
}

fn svo_profile() -> LanguageProfile {
    LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition)
        .with_marker(SemanticRole::Patient, "auf", Vec::<String>::new())
        .with_marker(SemanticRole::Destination, "in", Vec::<String>::new())
        .with_keyword("set", "setze", Vec::<String>::new())
        .with_keyword("toggle", "schalte", Vec::<String>::new())
}

#[test]
fn generate_all_covers_every_keyworded_command() {
    let patterns = PatternGenerator::generate_all(&svo_profile(), &catalog(), "de");
    assert!(patterns.iter().any(|p| p.command == "set"));
    assert!(patterns.iter().any(|p| p.command == "toggle"));
    assert!(patterns.iter().all(|p| p.source == PatternSource::Generated));
    assert!(patterns.iter().all(|p| p.validate().is_ok()));
}

#[test]
fn generated_priority_is_low() {
    let patterns = PatternGenerator::generate_all(&svo_profile(), &catalog(), "de");
    assert!(patterns.iter().all(|p| p.priority < 0));
}

#[test]
fn optional_roles_yield_full_and_minimal_shapes() {
    let patterns = PatternGenerator::generate_all(&svo_profile(), &catalog(), "de");
    let toggles: Vec<_> = patterns.iter().filter(|p| p.command == "toggle").collect();
    assert_eq!(toggles.len(), 2);

    let roles_per_shape: Vec<usize> = toggles.iter().map(|p| p.template_roles().len()).collect();
    assert!(roles_per_shape.contains(&2));
    assert!(roles_per_shape.contains(&1));
}

#[test]
fn marked_roles_get_marker_extraction_rules() {
    let patterns = PatternGenerator::generate_all(&svo_profile(), &catalog(), "de");
    let set = patterns.iter().find(|p| p.command == "set").unwrap();

    assert!(matches!(
        set.extraction.get(&SemanticRole::Patient),
        Some(ExtractionRule::Marker { .. })
    ));
    // First role in a verb-first order is bare: extracted by position.
    assert!(matches!(
        set.extraction.get(&SemanticRole::Destination),
        Some(ExtractionRule::Position { .. })
    ));
}

#[test]
fn profile_without_keywords_generates_nothing() {
    let bare = LanguageProfile::new(WordOrder::Svo, AdpositionOrder::Preposition);
    assert!(PatternGenerator::generate_all(&bare, &catalog(), "xx").is_empty());
}

#[test]
fn sov_generated_template_ends_with_keyword() {
    let profile = LanguageProfile::new(WordOrder::Sov, AdpositionOrder::Postposition)
        .with_marker(SemanticRole::Destination, "को", Vec::<String>::new())
        .with_marker(SemanticRole::Patient, "पर", Vec::<String>::new())
        .with_keyword("set", "सेट", Vec::<String>::new());

    let patterns = PatternGenerator::generate_all(&profile, &catalog(), "hi");
    let set = patterns.iter().find(|p| p.command == "set").unwrap();
    let TemplateToken::Literal(last) = set.template.last().unwrap() else {
        panic!("expected keyword literal at template end");
    };
    assert!(last.aliases.matches("सेट"));
}
