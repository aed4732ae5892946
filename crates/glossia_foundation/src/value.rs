//! Role values and shape classification.
//!
//! Extracted token spans are classified into value kinds by uniform,
//! language-independent shape rules: a leading `#`/`.`/`@` marks a selector,
//! quoted or numeric text is a literal, a dotted identifier is a property
//! path, a bare identifier is a reference. Classification happens after
//! extraction and never varies by source language.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a classified role value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ValueKind {
    /// An element selector (`#id`, `.class`, `@attr`).
    Selector,
    /// A literal value (number, quoted string, boolean).
    Literal,
    /// A bare identifier naming a variable or element.
    Reference,
    /// A dotted access path (`user.name.first`).
    PropertyPath,
    /// An uninterpreted expression span (multi-token or otherwise opaque).
    Expression,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Selector => "selector",
            Self::Literal => "literal",
            Self::Reference => "reference",
            Self::PropertyPath => "property-path",
            Self::Expression => "expression",
        };
        f.write_str(name)
    }
}

/// A literal value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String contents, quotes stripped.
    Str(String),
    /// Boolean.
    Bool(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A classified value bound to a semantic role.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoleValue {
    /// Selector with its sigil preserved (`#box`, `.active`, `@href`).
    Selector(String),
    /// Literal value.
    Literal(Literal),
    /// Bare identifier reference.
    Reference(String),
    /// Dotted property path, split into segments.
    PropertyPath(Vec<String>),
    /// Uninterpreted expression text.
    Expression(String),
}

impl RoleValue {
    /// Classifies a single extracted token text by shape.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim();

        if is_selector(trimmed) {
            return Self::Selector(trimmed.to_string());
        }
        if let Some(inner) = quoted_contents(trimmed) {
            return Self::Literal(Literal::Str(inner.to_string()));
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::Literal(Literal::Int(n));
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return Self::Literal(Literal::Float(n));
        }
        match trimmed {
            "true" => return Self::Literal(Literal::Bool(true)),
            "false" => return Self::Literal(Literal::Bool(false)),
            _ => {}
        }
        if let Some(path) = property_path_segments(trimmed) {
            return Self::PropertyPath(path);
        }
        if is_identifier(trimmed) {
            return Self::Reference(trimmed.to_string());
        }
        Self::Expression(trimmed.to_string())
    }

    /// Classifies an extracted span of token texts.
    ///
    /// A single-token span classifies by shape; a multi-token span is an
    /// uninterpreted expression carrying the joined text.
    #[must_use]
    pub fn classify_span(texts: &[&str]) -> Self {
        match texts {
            [] => Self::Expression(String::new()),
            [one] => Self::classify(one),
            many => Self::Expression(many.join(" ")),
        }
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Selector(_) => ValueKind::Selector,
            Self::Literal(_) => ValueKind::Literal,
            Self::Reference(_) => ValueKind::Reference,
            Self::PropertyPath(_) => ValueKind::PropertyPath,
            Self::Expression(_) => ValueKind::Expression,
        }
    }

    /// Returns the surface text used when rendering this value back into a
    /// pattern template.
    #[must_use]
    pub fn surface(&self) -> String {
        match self {
            Self::Selector(s) | Self::Expression(s) | Self::Reference(s) => s.clone(),
            Self::Literal(lit) => lit.to_string(),
            Self::PropertyPath(segments) => segments.join("."),
        }
    }
}

impl fmt::Display for RoleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.surface())
    }
}

/// Returns true for selector-shaped text: a sigil followed by a name.
fn is_selector(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some('#' | '.' | '@')) && chars.next().is_some()
}

/// Returns the contents of a quoted string, if the text is fully quoted.
fn quoted_contents(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if text.len() >= 2 {
        let (first, last) = (bytes[0], bytes[text.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return Some(&text[1..text.len() - 1]);
        }
    }
    None
}

/// Returns true for identifier-shaped text (letters, digits, `_`, `-`).
fn is_identifier(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-')
        && text.chars().next().is_some_and(|ch| !ch.is_ascii_digit())
}

/// Splits dotted-identifier text into path segments.
///
/// Requires at least two segments, each identifier-shaped, so plain
/// identifiers and decimal numbers never classify as paths.
fn property_path_segments(text: &str) -> Option<Vec<String>> {
    if !text.contains('.') {
        return None;
    }
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() < 2 || !segments.iter().all(|s| is_identifier(s)) {
        return None;
    }
    Some(segments.iter().map(|s| (*s).to_string()).collect())
}
