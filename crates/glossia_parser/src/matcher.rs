//! Pattern matching.
//!
//! Aligns a token stream against candidate pattern templates and scores the
//! successful alignments. The walk is left-to-right; greedy role slots
//! backtrack until the rest of the template aligns, and optional groups are
//! tried included-first, then skipped. Failure of one candidate is expected
//! and local; the caller simply moves on.

use std::ops::Range;
use std::sync::Arc;

use tracing::trace;

use glossia_foundation::{SemanticRole, ValueKind};
use glossia_language::{Capture, LanguagePattern, LiteralToken, RoleToken, TemplateToken};

use crate::token::{LanguageToken, TokenStream};

/// Tokens claimed by one role slot during a match.
#[derive(Clone, Debug)]
pub struct RoleClaim {
    /// The role that claimed the span.
    pub role: SemanticRole,
    /// Value kinds the originating role token accepts; empty means any.
    pub expected: Vec<ValueKind>,
    /// Claim behavior of the originating slot.
    pub capture: Capture,
    /// Top-level template index of the slot (groups use the group's index).
    pub template_index: usize,
    /// Claimed token range in the stream.
    pub range: Range<usize>,
}

/// A successful alignment of one pattern against the stream.
#[derive(Clone, Debug)]
pub struct MatchResult {
    /// The matched pattern.
    pub pattern: Arc<LanguagePattern>,
    /// Role claims in template order.
    pub claims: Vec<RoleClaim>,
    /// Count of literal template tokens satisfied (tie-break key).
    pub specificity: usize,
}

impl MatchResult {
    /// The claim made by a role, if the role matched.
    #[must_use]
    pub fn claim_for(&self, role: SemanticRole) -> Option<&RoleClaim> {
        self.claims.iter().find(|claim| claim.role == role)
    }

    /// The claim at a top-level template index.
    #[must_use]
    pub fn claim_at(&self, template_index: usize) -> Option<&RoleClaim> {
        self.claims
            .iter()
            .find(|claim| claim.template_index == template_index)
    }

    /// Ordering key: source tier dominates, then priority, then specificity.
    #[must_use]
    pub fn score(&self) -> (u8, i32, usize) {
        (
            self.pattern.source.rank(),
            self.pattern.priority,
            self.specificity,
        )
    }
}

/// One element of a flattened template variant.
#[derive(Clone, Copy)]
enum FlatElement<'a> {
    Literal(&'a LiteralToken),
    Role(&'a RoleToken),
}

/// A flattened template with optional groups resolved one way.
type Variant<'a> = Vec<(usize, FlatElement<'a>)>;

/// Matches token streams against candidate patterns.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Attempts to match the stream against every candidate.
    ///
    /// Returns all successful matches, best first: authored before
    /// generated, then higher priority, then higher specificity (count of
    /// literal tokens satisfied). Equal scores keep candidate order.
    /// An empty result is not an error at this layer.
    #[must_use]
    pub fn match_all(
        stream: &TokenStream,
        candidates: &[Arc<LanguagePattern>],
    ) -> Vec<MatchResult> {
        let mut results = Vec::new();

        for pattern in candidates {
            match Self::try_match(stream, pattern) {
                Some(result) => {
                    trace!(
                        pattern = %pattern.id,
                        specificity = result.specificity,
                        "candidate matched"
                    );
                    results.push(result);
                }
                None => trace!(pattern = %pattern.id, "candidate rejected"),
            }
        }

        results.sort_by(|a, b| b.score().cmp(&a.score()));
        results
    }

    /// Tries one candidate, preferring variants with optional groups
    /// included.
    fn try_match(stream: &TokenStream, pattern: &Arc<LanguagePattern>) -> Option<MatchResult> {
        for variant in expand_tokens(&pattern.template, None) {
            let mut state = PartialMatch::default();
            if match_at(stream.tokens(), 0, &variant, &mut state) {
                return Some(MatchResult {
                    pattern: Arc::clone(pattern),
                    claims: state.claims,
                    specificity: state.literal_hits,
                });
            }
        }
        None
    }
}

/// In-progress claims and literal hits for one alignment attempt.
#[derive(Default)]
struct PartialMatch {
    claims: Vec<RoleClaim>,
    literal_hits: usize,
}

/// Flattens a template into variants, one per combination of optional-group
/// inclusion. Variants that include a group come before those that skip it,
/// so the most specific alignment is tried first.
fn expand_tokens<'a>(tokens: &'a [TemplateToken], top: Option<usize>) -> Vec<Variant<'a>> {
    let mut variants: Vec<Variant<'a>> = vec![Vec::new()];

    for (i, token) in tokens.iter().enumerate() {
        let index = top.unwrap_or(i);
        match token {
            TemplateToken::Literal(literal) => {
                for variant in &mut variants {
                    variant.push((index, FlatElement::Literal(literal)));
                }
            }
            TemplateToken::Role(role) => {
                for variant in &mut variants {
                    variant.push((index, FlatElement::Role(role)));
                }
            }
            TemplateToken::Group(group) => {
                let inner = expand_tokens(&group.tokens, Some(index));
                let mut next = Vec::new();
                for variant in &variants {
                    for inner_variant in &inner {
                        let mut with_group = variant.clone();
                        with_group.extend(inner_variant.iter().copied());
                        next.push(with_group);
                    }
                    if group.optional {
                        next.push(variant.clone());
                    }
                }
                variants = next;
            }
        }
    }

    variants
}

/// Recursive backtracking alignment. The whole stream must be consumed.
///
/// Cost is bounded by stream length × template length; templates are small
/// and backtracking only occurs at greedy role slots.
fn match_at(
    tokens: &[LanguageToken],
    pos: usize,
    elements: &[(usize, FlatElement<'_>)],
    state: &mut PartialMatch,
) -> bool {
    let Some(((index, element), rest)) = elements.split_first() else {
        return pos == tokens.len();
    };

    match element {
        FlatElement::Literal(literal) => {
            let Some(token) = tokens.get(pos) else {
                return false;
            };
            if !literal.aliases.matches(&token.normalized) {
                return false;
            }
            state.literal_hits += 1;
            if match_at(tokens, pos + 1, rest, state) {
                return true;
            }
            state.literal_hits -= 1;
            false
        }
        FlatElement::Role(role) => {
            let remaining = tokens.len() - pos.min(tokens.len());
            if remaining == 0 {
                return false;
            }
            let takes: Vec<usize> = match role.capture {
                Capture::Body => vec![remaining],
                Capture::Single => vec![1],
                // Greedy: longest claim first, shrink until the rest aligns.
                Capture::Greedy => (1..=remaining).rev().collect(),
            };
            for take in takes {
                state.claims.push(RoleClaim {
                    role: role.role,
                    expected: role.expected.clone(),
                    capture: role.capture,
                    template_index: *index,
                    range: pos..pos + take,
                });
                if match_at(tokens, pos + take, rest, state) {
                    return true;
                }
                state.claims.pop();
            }
            false
        }
    }
}
