//! Command descriptors.
//!
//! The execution engine supplies, per command name, the ordered semantic
//! roles the command needs. The pattern generator synthesizes fallback
//! patterns from descriptors, and the AST builder validates bindings against
//! them.

use std::collections::BTreeMap;

use glossia_foundation::{SemanticRole, ValueKind};

use crate::template::Capture;

/// One role slot in a command descriptor.
#[derive(Clone, Debug)]
pub struct RoleSpec {
    /// The semantic role.
    pub role: SemanticRole,
    /// Whether a parse without this role is rejected.
    pub required: bool,
    /// Value kinds the role accepts; empty means any.
    pub expected: Vec<ValueKind>,
    /// How pattern slots for this role claim tokens.
    pub capture: Capture,
}

/// The ordered, typed role requirements of one command.
#[derive(Clone, Debug)]
pub struct CommandDescriptor {
    name: String,
    roles: Vec<RoleSpec>,
}

impl CommandDescriptor {
    /// Creates a descriptor with no roles.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: Vec::new(),
        }
    }

    /// Appends a required role.
    #[must_use]
    pub fn with_required(mut self, role: SemanticRole, expected: Vec<ValueKind>) -> Self {
        self.roles.push(RoleSpec {
            role,
            required: true,
            expected,
            capture: Capture::Greedy,
        });
        self
    }

    /// Appends an optional role.
    #[must_use]
    pub fn with_optional(mut self, role: SemanticRole, expected: Vec<ValueKind>) -> Self {
        self.roles.push(RoleSpec {
            role,
            required: false,
            expected,
            capture: Capture::Greedy,
        });
        self
    }

    /// Appends a required single-token role.
    #[must_use]
    pub fn with_required_single(mut self, role: SemanticRole, expected: Vec<ValueKind>) -> Self {
        self.roles.push(RoleSpec {
            role,
            required: true,
            expected,
            capture: Capture::Single,
        });
        self
    }

    /// Appends a body-capturing role claiming the rest of the input.
    #[must_use]
    pub fn with_body(mut self, role: SemanticRole, required: bool) -> Self {
        self.roles.push(RoleSpec {
            role,
            required,
            expected: Vec::new(),
            capture: Capture::Body,
        });
        self
    }

    /// The canonical command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered role slots.
    #[must_use]
    pub fn roles(&self) -> &[RoleSpec] {
        &self.roles
    }

    /// Looks up the spec for one role.
    #[must_use]
    pub fn role_spec(&self, role: SemanticRole) -> Option<&RoleSpec> {
        self.roles.iter().find(|spec| spec.role == role)
    }

    /// The roles a parse must bind.
    pub fn required_roles(&self) -> impl Iterator<Item = SemanticRole> + '_ {
        self.roles
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.role)
    }
}

/// Registry of command descriptors, keyed by command name.
#[derive(Clone, Debug, Default)]
pub struct CommandCatalog {
    commands: BTreeMap<String, CommandDescriptor>,
}

impl CommandCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor, replacing any previous entry for the name.
    pub fn register(&mut self, descriptor: CommandDescriptor) {
        self.commands.insert(descriptor.name.clone(), descriptor);
    }

    /// Looks up a descriptor by command name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    /// Iterates descriptors in name order.
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values()
    }

    /// Registered command names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
