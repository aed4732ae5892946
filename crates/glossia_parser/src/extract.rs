//! Role extraction.
//!
//! Pulls role values out of a successful match. Position rules take the
//! tokens claimed at a template index; marker rules locate the span adjacent
//! to a marker word, trying the primary form first and then each alternative
//! in declaration order. Extraction failure is recoverable: the parse loop
//! rejects the candidate and advances to the next-best match.

use std::collections::BTreeMap;
use std::ops::Range;

use thiserror::Error;

use glossia_foundation::{RoleValue, SemanticRole};
use glossia_language::{Capture, ExtractionRule, MarkerSide};

use crate::matcher::{MatchResult, RoleClaim};
use crate::token::TokenStream;

/// Why a candidate's extraction was rejected. Local to the parse loop;
/// never surfaced to callers.
#[derive(Clone, Debug, Error)]
#[error("cannot extract {role}: {reason}")]
pub struct ExtractionFailure {
    /// The role that could not be extracted.
    pub role: SemanticRole,
    /// Human-readable cause, used in trace output.
    pub reason: String,
}

/// Extracts role bindings from match results.
pub struct ExtractionEngine;

impl ExtractionEngine {
    /// Extracts every claimed role's value.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionFailure`] when a claimed role's rule cannot
    /// locate its value; the caller advances to the next candidate.
    pub fn extract(
        result: &MatchResult,
        stream: &TokenStream,
    ) -> Result<BTreeMap<SemanticRole, RoleValue>, ExtractionFailure> {
        let mut bindings = BTreeMap::new();

        for claim in &result.claims {
            let range = match result.pattern.extraction.get(&claim.role) {
                None => claim.range.clone(),
                Some(ExtractionRule::Position { index }) => {
                    let positioned =
                        result
                            .claim_at(*index)
                            .ok_or_else(|| ExtractionFailure {
                                role: claim.role,
                                reason: format!("no claim at template index {index}"),
                            })?;
                    positioned.range.clone()
                }
                Some(ExtractionRule::Marker { aliases, side }) => {
                    locate_by_marker(claim, aliases, *side, stream).ok_or_else(|| {
                        ExtractionFailure {
                            role: claim.role,
                            reason: format!(
                                "marker {:?} not adjacent to claimed span",
                                aliases.primary()
                            ),
                        }
                    })?
                }
            };

            bindings.insert(claim.role, span_value(claim, range, stream));
        }

        Ok(bindings)
    }
}

/// Finds the claimed span via its marker: the primary form first, then each
/// alternative in order, accepting the first occurrence adjacent to the
/// claim on the rule's side.
fn locate_by_marker(
    claim: &RoleClaim,
    aliases: &glossia_language::AliasSet,
    side: MarkerSide,
    stream: &TokenStream,
) -> Option<Range<usize>> {
    for form in aliases.normalized_forms() {
        for (i, token) in stream.tokens().iter().enumerate() {
            if token.normalized != form {
                continue;
            }
            let adjacent = match side {
                MarkerSide::After => claim.range.start == i + 1,
                MarkerSide::Before => claim.range.end == i,
            };
            if adjacent {
                return Some(claim.range.clone());
            }
        }
    }
    None
}

/// Classifies the claimed span into a role value.
///
/// Single tokens classify by shape; multi-token spans and body captures stay
/// uninterpreted expressions carrying the original source text.
fn span_value(claim: &RoleClaim, range: Range<usize>, stream: &TokenStream) -> RoleValue {
    if claim.capture == Capture::Body || range.len() > 1 {
        RoleValue::Expression(stream.span_text(range).trim().to_string())
    } else {
        match stream.get(range.start) {
            Some(token) => RoleValue::classify(&token.text),
            None => RoleValue::Expression(String::new()),
        }
    }
}
