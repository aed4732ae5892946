//! Role extraction rules.
//!
//! Once a pattern matches, each role's value is located either by the
//! template position that claimed it, or by scanning for a marker word and
//! taking the adjacent span. Marker extraction is what makes postpositional
//! and free-word-order languages work: the marker, not the position, locates
//! the argument.

use crate::template::AliasSet;

/// Which side of the marker the role's value sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerSide {
    /// The value is the span immediately before the marker (postpositional).
    Before,
    /// The value is the span immediately after the marker (prepositional).
    After,
}

/// How one role's value is located within a successful match.
#[derive(Clone, Debug)]
pub enum ExtractionRule {
    /// Take the tokens claimed at this template index.
    Position {
        /// Top-level template index of the role slot.
        index: usize,
    },
    /// Scan the matched range for the marker (then each alternative in
    /// order) and take the adjacent token span.
    Marker {
        /// The marker word and its accepted alternatives.
        aliases: AliasSet,
        /// Side of the marker the value occupies.
        side: MarkerSide,
    },
}

impl ExtractionRule {
    /// A position rule.
    #[must_use]
    pub const fn position(index: usize) -> Self {
        Self::Position { index }
    }

    /// A marker rule with alternatives.
    #[must_use]
    pub fn marker<I, S>(primary: impl Into<String>, alternatives: I, side: MarkerSide) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Marker {
            aliases: AliasSet::new(primary, alternatives),
            side,
        }
    }
}
