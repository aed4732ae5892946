//! Pattern template tokens.
//!
//! A pattern's template is an ordered sequence of [`TemplateToken`]s: literal
//! words the input must contain, role slots that claim input tokens, and
//! optional groups. Literal alternatives (morphological variants, synonyms)
//! are normalized once at construction, not per parse call.

use glossia_foundation::{SemanticRole, ValueKind};

use crate::text::normalize;

/// A literal word plus its accepted alternatives, pre-normalized for
/// comparison against token stream normalized text.
///
/// Forms keep their declaration order (primary first): marker extraction
/// tries alternatives in order, so order is significant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasSet {
    primary: String,
    normalized: Vec<String>,
}

impl AliasSet {
    /// Creates an alias set from a primary form and alternatives.
    #[must_use]
    pub fn new<I, S>(primary: impl Into<String>, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let primary = primary.into();
        let mut normalized = vec![normalize(&primary)];
        for alt in alternatives {
            let form = normalize(&alt.into());
            if !normalized.contains(&form) {
                normalized.push(form);
            }
        }
        Self {
            primary,
            normalized,
        }
    }

    /// Creates an alias set with no alternatives.
    #[must_use]
    pub fn single(primary: impl Into<String>) -> Self {
        Self::new(primary, Vec::<String>::new())
    }

    /// The primary surface form, used when rendering.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Returns true if the given normalized text is the primary form or any
    /// alternative.
    #[must_use]
    pub fn matches(&self, normalized_text: &str) -> bool {
        self.normalized.iter().any(|form| form == normalized_text)
    }

    /// Iterates the normalized forms in declaration order, primary first.
    pub fn normalized_forms(&self) -> impl Iterator<Item = &str> {
        self.normalized.iter().map(String::as_str)
    }
}

/// How a role slot claims tokens from the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Capture {
    /// Claims exactly one token.
    Single,
    /// Claims one or more tokens, bounded by the rest of the template.
    #[default]
    Greedy,
    /// Claims all remaining tokens (the command body).
    Body,
}

/// A literal template token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralToken {
    /// Accepted forms of this literal.
    pub aliases: AliasSet,
}

/// A role slot template token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleToken {
    /// The semantic role this slot binds.
    pub role: SemanticRole,
    /// Value kinds this slot accepts; empty means any.
    pub expected: Vec<ValueKind>,
    /// Claim behavior.
    pub capture: Capture,
}

/// A grouped sub-template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupToken {
    /// Whether the whole group may be skipped.
    pub optional: bool,
    /// The group's inner tokens.
    pub tokens: Vec<TemplateToken>,
}

/// One element of a pattern's expected token sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateToken {
    /// A literal word that must appear.
    Literal(LiteralToken),
    /// A role slot with variable binding.
    Role(RoleToken),
    /// A grouped sub-template, possibly optional.
    Group(GroupToken),
}

impl TemplateToken {
    /// A literal with no alternatives.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(LiteralToken {
            aliases: AliasSet::single(value),
        })
    }

    /// A literal with morphological or synonym alternatives.
    #[must_use]
    pub fn literal_with<I, S>(value: impl Into<String>, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Literal(LiteralToken {
            aliases: AliasSet::new(value, alternatives),
        })
    }

    /// A greedy role slot accepting any value kind.
    #[must_use]
    pub fn role(role: SemanticRole) -> Self {
        Self::Role(RoleToken {
            role,
            expected: Vec::new(),
            capture: Capture::Greedy,
        })
    }

    /// A single-token role slot.
    #[must_use]
    pub fn role_single(role: SemanticRole) -> Self {
        Self::Role(RoleToken {
            role,
            expected: Vec::new(),
            capture: Capture::Single,
        })
    }

    /// A role slot restricted to the given value kinds.
    #[must_use]
    pub fn role_expecting(role: SemanticRole, expected: Vec<ValueKind>, capture: Capture) -> Self {
        Self::Role(RoleToken {
            role,
            expected,
            capture,
        })
    }

    /// A body slot claiming all remaining tokens.
    #[must_use]
    pub fn body(role: SemanticRole) -> Self {
        Self::Role(RoleToken {
            role,
            expected: Vec::new(),
            capture: Capture::Body,
        })
    }

    /// An optional group.
    #[must_use]
    pub fn optional_group(tokens: Vec<TemplateToken>) -> Self {
        Self::Group(GroupToken {
            optional: true,
            tokens,
        })
    }

    /// A required group.
    #[must_use]
    pub fn group(tokens: Vec<TemplateToken>) -> Self {
        Self::Group(GroupToken {
            optional: false,
            tokens,
        })
    }

    /// Collects the roles referenced by this token, recursing into groups.
    pub fn collect_roles(&self, out: &mut Vec<SemanticRole>) {
        match self {
            Self::Literal(_) => {}
            Self::Role(role_token) => out.push(role_token.role),
            Self::Group(group) => {
                for token in &group.tokens {
                    token.collect_roles(out);
                }
            }
        }
    }

    /// Returns the roles inside this token that sit outside optional groups.
    pub fn collect_required_roles(&self, out: &mut Vec<SemanticRole>) {
        match self {
            Self::Literal(_) => {}
            Self::Role(role_token) => out.push(role_token.role),
            Self::Group(group) => {
                if !group.optional {
                    for token in &group.tokens {
                        token.collect_required_roles(out);
                    }
                }
            }
        }
    }
}
