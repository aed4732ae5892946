//! Template token and alias-set tests.

use glossia_foundation::SemanticRole;
use glossia_language::{AliasSet, Capture, TemplateToken};

#[test]
fn alias_set_keeps_declaration_order() {
    let aliases = AliasSet::new("to", ["into", "unto"]);
    let forms: Vec<&str> = aliases.normalized_forms().collect();
    assert_eq!(forms, vec!["to", "into", "unto"]);
}

#[test]
fn alias_set_deduplicates_normalized_forms() {
    let aliases = AliasSet::new("Añadir", ["añadir", "ANADIR"]);
    assert_eq!(aliases.normalized_forms().count(), 1);
}

#[test]
fn alias_matching_is_diacritic_insensitive() {
    let aliases = AliasSet::single("établir");
    assert!(aliases.matches("etablir"));
}

#[test]
fn primary_surface_form_is_preserved_verbatim() {
    let aliases = AliasSet::new("Définir", ["régler"]);
    assert_eq!(aliases.primary(), "Définir");
}

#[test]
fn body_constructor_sets_body_capture() {
    let TemplateToken::Role(role) = TemplateToken::body(SemanticRole::Body) else {
        panic!("expected role token");
    };
    assert_eq!(role.capture, Capture::Body);
}

#[test]
fn nested_groups_report_all_roles() {
    let token = TemplateToken::group(vec![
        TemplateToken::literal("from"),
        TemplateToken::optional_group(vec![TemplateToken::role(SemanticRole::Source)]),
        TemplateToken::role(SemanticRole::Event),
    ]);

    let mut roles = Vec::new();
    token.collect_roles(&mut roles);
    assert_eq!(roles, vec![SemanticRole::Source, SemanticRole::Event]);

    let mut required = Vec::new();
    token.collect_required_roles(&mut required);
    assert_eq!(required, vec![SemanticRole::Event]);
}
