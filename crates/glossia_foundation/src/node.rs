//! The canonical semantic node.
//!
//! A [`SemanticNode`] is the language-neutral parsed representation of one
//! command instance: an action name plus a partially populated role map.
//! Nodes are created per parse call and never mutated after construction.

use std::collections::BTreeMap;
use std::fmt;

use crate::role::SemanticRole;
use crate::value::RoleValue;

/// Canonical, language-neutral representation of one parsed command.
#[derive(Clone, Debug, PartialEq)]
pub struct SemanticNode {
    action: String,
    roles: BTreeMap<SemanticRole, RoleValue>,
    source_language: String,
}

impl SemanticNode {
    /// Creates a node from an action name and role bindings.
    #[must_use]
    pub fn new(
        action: impl Into<String>,
        roles: BTreeMap<SemanticRole, RoleValue>,
        source_language: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            roles,
            source_language: source_language.into(),
        }
    }

    /// The canonical action name (e.g. `"set"`, `"on"`).
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The language code the surface text was parsed from.
    #[must_use]
    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// Looks up one role binding.
    ///
    /// The role map is partially populated: optional roles may be absent.
    #[must_use]
    pub fn role(&self, role: SemanticRole) -> Option<&RoleValue> {
        self.roles.get(&role)
    }

    /// Returns true if the given role is bound.
    #[must_use]
    pub fn has_role(&self, role: SemanticRole) -> bool {
        self.roles.contains_key(&role)
    }

    /// Iterates over bound roles in canonical order.
    pub fn roles(&self) -> impl Iterator<Item = (SemanticRole, &RoleValue)> {
        self.roles.iter().map(|(role, value)| (*role, value))
    }

    /// Number of bound roles.
    #[must_use]
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}

impl fmt::Display for SemanticNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.action)?;
        for (i, (role, value)) in self.roles().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{role}: {value}")?;
        }
        write!(f, ")")
    }
}
