//! Declarative language patterns.
//!
//! A [`LanguagePattern`] pairs a token template with per-role extraction
//! rules and a priority. Hand-authored patterns always outrank generated
//! ones for the same (language, command), independent of numeric priority;
//! that ordering lives in [`PatternSource`], not in priority conventions.

use std::collections::BTreeMap;

use glossia_foundation::{Error, Result, SemanticRole};

use crate::extraction::ExtractionRule;
use crate::template::TemplateToken;

/// Where a pattern came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatternSource {
    /// Synthesized by the pattern generator from a language profile.
    Generated,
    /// Hand-authored in a language module or bundle.
    Authored,
}

impl PatternSource {
    /// Ordering rank: authored sorts above generated.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Generated => 0,
            Self::Authored => 1,
        }
    }
}

/// A declarative pattern for one command in one language.
#[derive(Clone, Debug)]
pub struct LanguagePattern {
    /// Stable identifier, used in diagnostics.
    pub id: String,
    /// Language code this pattern belongs to.
    pub language: String,
    /// Canonical command name this pattern parses into.
    pub command: String,
    /// Disambiguation priority; higher wins within the same source tier.
    pub priority: i32,
    /// Authored or generated.
    pub source: PatternSource,
    /// Ordered template tokens.
    pub template: Vec<TemplateToken>,
    /// Per-role extraction rules.
    pub extraction: BTreeMap<SemanticRole, ExtractionRule>,
}

impl LanguagePattern {
    /// Creates an authored pattern.
    #[must_use]
    pub fn authored(
        id: impl Into<String>,
        language: impl Into<String>,
        command: impl Into<String>,
        priority: i32,
        template: Vec<TemplateToken>,
    ) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            command: command.into(),
            priority,
            source: PatternSource::Authored,
            template,
            extraction: BTreeMap::new(),
        }
    }

    /// Creates a generated pattern.
    #[must_use]
    pub fn generated(
        id: impl Into<String>,
        language: impl Into<String>,
        command: impl Into<String>,
        priority: i32,
        template: Vec<TemplateToken>,
    ) -> Self {
        Self {
            source: PatternSource::Generated,
            ..Self::authored(id, language, command, priority, template)
        }
    }

    /// Adds an extraction rule for a role.
    #[must_use]
    pub fn with_extraction(mut self, role: SemanticRole, rule: ExtractionRule) -> Self {
        self.extraction.insert(role, rule);
        self
    }

    /// All roles referenced by the template, groups included.
    #[must_use]
    pub fn template_roles(&self) -> Vec<SemanticRole> {
        let mut roles = Vec::new();
        for token in &self.template {
            token.collect_roles(&mut roles);
        }
        roles
    }

    /// Roles the template requires (outside optional groups).
    #[must_use]
    pub fn required_roles(&self) -> Vec<SemanticRole> {
        let mut roles = Vec::new();
        for token in &self.template {
            token.collect_required_roles(&mut roles);
        }
        roles
    }

    /// Validates the pattern's internal consistency.
    ///
    /// Every extraction key must name a role that appears in the template,
    /// and every position rule must point at a role slot.
    ///
    /// # Errors
    ///
    /// Returns [`glossia_foundation::ErrorKind::InvalidPattern`] on the first
    /// violation found.
    pub fn validate(&self) -> Result<()> {
        if self.template.is_empty() {
            return Err(Error::invalid_pattern(&self.id, "empty template"));
        }

        let template_roles = self.template_roles();
        for role in self.extraction.keys() {
            if !template_roles.contains(role) {
                return Err(Error::invalid_pattern(
                    &self.id,
                    format!("extraction rule for {role} has no template role token"),
                ));
            }
        }

        for (role, rule) in &self.extraction {
            if let ExtractionRule::Position { index } = rule {
                match self.template.get(*index) {
                    Some(TemplateToken::Role(_) | TemplateToken::Group(_)) => {}
                    _ => {
                        return Err(Error::invalid_pattern(
                            &self.id,
                            format!("position rule for {role} points at index {index}, which is not a role slot"),
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
