//! The parse/render API.
//!
//! [`SemanticParser`] orchestrates the full pipeline: tokenize, gather
//! candidates (authored first, generated as fallback), match, then walk the
//! matches best-first attempting extraction and AST building. The first
//! candidate that survives all stages wins. `render` is the inverse and is
//! used both for translation between languages and as a round-trip
//! correctness check.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace};

use glossia_foundation::{Error, ErrorContext, Result, SemanticNode, SemanticRole, ValueKind};
use glossia_language::{LanguagePattern, TemplateToken};

use crate::ast::{AstBuilder, RoleMapper};
use crate::extract::ExtractionEngine;
use crate::matcher::PatternMatcher;
use crate::registry::LanguageRegistry;

/// Parses localized command text into semantic nodes, and back.
pub struct SemanticParser {
    registry: Arc<LanguageRegistry>,
    builder: AstBuilder,
}

impl SemanticParser {
    /// Creates a parser over a language registry.
    #[must_use]
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        let builder = AstBuilder::new(Arc::clone(registry.catalog()));
        Self { registry, builder }
    }

    /// The registry this parser reads from.
    #[must_use]
    pub fn registry(&self) -> &Arc<LanguageRegistry> {
        &self.registry
    }

    /// Registers a command-specific role mapper.
    pub fn register_mapper(&mut self, command: impl Into<String>, mapper: Arc<dyn RoleMapper>) {
        self.builder.register_mapper(command, mapper);
    }

    /// Parses input text in the given language.
    ///
    /// # Errors
    ///
    /// - [`glossia_foundation::ErrorKind::LanguageNotLoaded`] for an
    ///   unregistered language
    /// - [`glossia_foundation::ErrorKind::EmptyInput`] when no tokens result
    /// - [`glossia_foundation::ErrorKind::SemanticMapping`] when a candidate
    ///   matched but its bindings were rejected and no later candidate
    ///   succeeded
    /// - [`glossia_foundation::ErrorKind::NoPatternMatch`] when every
    ///   candidate was exhausted
    pub fn parse(&self, input: &str, language: &str) -> Result<SemanticNode> {
        let stream = self.registry.tokenize(input, language)?;
        if stream.is_empty() {
            return Err(Error::empty_input()
                .with_context(ErrorContext::new().with_language(language).with_input(input)));
        }

        let candidates = self.registry.patterns(language)?;
        let matches = PatternMatcher::match_all(&stream, &candidates);
        debug!(
            language,
            candidates = candidates.len(),
            matches = matches.len(),
            "matched input"
        );

        let mut last_mapping_error = None;
        for result in matches {
            let bindings = match ExtractionEngine::extract(&result, &stream) {
                Ok(bindings) => bindings,
                Err(failure) => {
                    trace!(pattern = %result.pattern.id, %failure, "extraction rejected candidate");
                    continue;
                }
            };

            let expected: BTreeMap<SemanticRole, Vec<ValueKind>> = result
                .claims
                .iter()
                .map(|claim| (claim.role, claim.expected.clone()))
                .collect();

            match self
                .builder
                .build(&result.pattern.command, bindings, &expected, language)
            {
                Ok(node) => return Ok(node),
                Err(err) => {
                    trace!(pattern = %result.pattern.id, %err, "mapping rejected candidate");
                    last_mapping_error = Some(err);
                }
            }
        }

        let err = last_mapping_error.unwrap_or_else(|| Error::no_pattern_match(language));
        Err(err.with_context(ErrorContext::new().with_language(language).with_input(input)))
    }

    /// Renders a semantic node back into surface text in the given language.
    ///
    /// Selects the best pattern for `(language, action)` whose required
    /// roles are all bound, then substitutes role values into its template.
    /// Optional groups render only when every role inside them is bound.
    ///
    /// # Errors
    ///
    /// - [`glossia_foundation::ErrorKind::LanguageNotLoaded`] for an
    ///   unregistered language
    /// - [`glossia_foundation::ErrorKind::NoPatternMatch`] when no pattern
    ///   for the action can express the node's bindings
    pub fn render(&self, node: &SemanticNode, language: &str) -> Result<String> {
        let mut patterns = self.registry.patterns_for(language, node.action())?;
        // Prefer patterns that can express every bound role, so optional
        // arguments survive translation; then the usual tier and priority.
        let covers = |pattern: &LanguagePattern| {
            let roles = pattern.template_roles();
            node.roles().all(|(role, _)| roles.contains(&role))
        };
        patterns.sort_by(|a, b| {
            (covers(b), b.source.rank(), b.priority).cmp(&(covers(a), a.source.rank(), a.priority))
        });

        for pattern in &patterns {
            if let Some(text) = render_with(pattern, node) {
                return Ok(text);
            }
        }

        Err(Error::no_pattern_match(language))
    }
}

/// Renders the node through one pattern, or `None` when a required role is
/// unbound.
fn render_with(pattern: &LanguagePattern, node: &SemanticNode) -> Option<String> {
    let mut pieces = Vec::new();
    render_tokens(&pattern.template, node, &mut pieces)?;
    Some(pieces.join(" "))
}

fn render_tokens(
    tokens: &[TemplateToken],
    node: &SemanticNode,
    pieces: &mut Vec<String>,
) -> Option<()> {
    for token in tokens {
        match token {
            TemplateToken::Literal(literal) => {
                pieces.push(literal.aliases.primary().to_string());
            }
            TemplateToken::Role(role_token) => {
                let value = node.role(role_token.role)?;
                pieces.push(value.surface());
            }
            TemplateToken::Group(group) => {
                if group.optional {
                    // An optional group renders only when it binds something:
                    // it must contain role slots and all of them must be
                    // bound. Literal-only optional groups (politeness
                    // particles and the like) are omitted.
                    let mut roles = Vec::new();
                    for token in &group.tokens {
                        token.collect_roles(&mut roles);
                    }
                    if roles.is_empty() || !roles.iter().all(|role| node.has_role(*role)) {
                        continue;
                    }
                }
                let mut inner = Vec::new();
                render_tokens(&group.tokens, node, &mut inner)?;
                pieces.extend(inner);
            }
        }
    }
    Some(())
}
