//! The standard command catalog.
//!
//! These descriptors mirror what the execution engine registers for its
//! command set: per command, the ordered semantic roles, whether each is
//! required, and the value kinds it accepts.

use glossia_foundation::{SemanticRole, ValueKind};
use glossia_language::{CommandCatalog, CommandDescriptor};

/// Kinds accepted where a value is written to: an element or a variable.
fn assignable() -> Vec<ValueKind> {
    vec![
        ValueKind::Selector,
        ValueKind::PropertyPath,
        ValueKind::Reference,
    ]
}

/// Kinds accepted for an element argument.
fn element() -> Vec<ValueKind> {
    vec![ValueKind::Selector, ValueKind::Reference]
}

/// Builds the standard command catalog.
#[must_use]
pub fn standard_catalog() -> CommandCatalog {
    let mut catalog = CommandCatalog::new();

    catalog.register(
        CommandDescriptor::new("set")
            .with_required(SemanticRole::Destination, assignable())
            .with_required(SemanticRole::Patient, Vec::new()),
    );

    catalog.register(
        CommandDescriptor::new("put")
            .with_required(SemanticRole::Patient, Vec::new())
            .with_required(SemanticRole::Destination, assignable()),
    );

    catalog.register(
        CommandDescriptor::new("toggle")
            .with_required(SemanticRole::Patient, element())
            .with_optional(SemanticRole::Destination, element()),
    );

    catalog.register(
        CommandDescriptor::new("add")
            .with_required(SemanticRole::Patient, element())
            .with_optional(SemanticRole::Destination, element()),
    );

    catalog.register(
        CommandDescriptor::new("remove")
            .with_required(SemanticRole::Patient, element())
            .with_optional(SemanticRole::Source, element()),
    );

    catalog.register(
        CommandDescriptor::new("show").with_required(SemanticRole::Patient, element()),
    );

    catalog.register(
        CommandDescriptor::new("hide").with_required(SemanticRole::Patient, element()),
    );

    catalog.register(
        CommandDescriptor::new("wait").with_required(SemanticRole::Patient, Vec::new()),
    );

    catalog.register(
        CommandDescriptor::new("on")
            .with_required_single(SemanticRole::Event, vec![ValueKind::Reference])
            .with_optional(SemanticRole::Source, element())
            .with_body(SemanticRole::Body, true),
    );

    catalog
}
