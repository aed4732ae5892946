//! Semantic node construction.
//!
//! Maps extracted role bindings into a [`SemanticNode`], applying a
//! command-specific role mapper when one is registered and validating every
//! binding against the expected kinds declared on the originating role token
//! and the command descriptor. Mappers live in a registration-populated
//! lookup table, not in per-command conditional chains.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use glossia_foundation::{Error, Result, RoleValue, SemanticNode, SemanticRole, ValueKind};
use glossia_language::CommandCatalog;

/// Reshapes generic role bindings into the execution engine's expected form.
pub trait RoleMapper: Send + Sync {
    /// Renames or reshapes bindings. The default mapper is the identity.
    ///
    /// # Errors
    ///
    /// Implementations reject bindings the execution engine cannot accept
    /// with [`glossia_foundation::ErrorKind::SemanticMapping`].
    fn map(
        &self,
        command: &str,
        bindings: BTreeMap<SemanticRole, RoleValue>,
    ) -> Result<BTreeMap<SemanticRole, RoleValue>>;
}

/// Builds semantic nodes from role bindings.
pub struct AstBuilder {
    catalog: Arc<CommandCatalog>,
    mappers: HashMap<String, Arc<dyn RoleMapper>>,
}

impl AstBuilder {
    /// Creates a builder over the execution engine's command catalog.
    #[must_use]
    pub fn new(catalog: Arc<CommandCatalog>) -> Self {
        Self {
            catalog,
            mappers: HashMap::new(),
        }
    }

    /// Registers a command-specific role mapper, replacing any previous one.
    pub fn register_mapper(&mut self, command: impl Into<String>, mapper: Arc<dyn RoleMapper>) {
        self.mappers.insert(command.into(), mapper);
    }

    /// Builds a semantic node.
    ///
    /// `expected` carries, per role, the value kinds declared on the role
    /// token that bound it (empty means unrestricted).
    ///
    /// # Errors
    ///
    /// [`glossia_foundation::ErrorKind::SemanticMapping`] when a binding
    /// satisfies no expected kind or a descriptor-required role is missing.
    pub fn build(
        &self,
        command: &str,
        bindings: BTreeMap<SemanticRole, RoleValue>,
        expected: &BTreeMap<SemanticRole, Vec<ValueKind>>,
        language: &str,
    ) -> Result<SemanticNode> {
        for (role, value) in &bindings {
            if let Some(kinds) = expected.get(role) {
                check_kinds(command, *role, value, kinds)?;
            }
        }

        let bindings = match self.mappers.get(command) {
            Some(mapper) => mapper.map(command, bindings)?,
            None => bindings,
        };

        if let Some(descriptor) = self.catalog.get(command) {
            for role in descriptor.required_roles() {
                if !bindings.contains_key(&role) {
                    return Err(Error::semantic_mapping(
                        command,
                        role.as_str(),
                        "required role is not bound",
                    ));
                }
            }
            for (role, value) in &bindings {
                if let Some(spec) = descriptor.role_spec(*role) {
                    check_kinds(command, *role, value, &spec.expected)?;
                }
            }
        }

        Ok(SemanticNode::new(command, bindings, language))
    }
}

/// Rejects a value that satisfies none of the expected kinds.
fn check_kinds(
    command: &str,
    role: SemanticRole,
    value: &RoleValue,
    kinds: &[ValueKind],
) -> Result<()> {
    if kinds.is_empty() || kinds.contains(&value.kind()) {
        return Ok(());
    }
    Err(Error::semantic_mapping(
        command,
        role.as_str(),
        format!(
            "bound value is a {}, expected one of: {}",
            value.kind(),
            kinds
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    ))
}
