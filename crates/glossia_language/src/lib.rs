//! Pattern model and fallback generation for the Glossia parser.
//!
//! This crate defines the declarative side of the system:
//! - [`TemplateToken`] - One element of a pattern's expected token sequence
//! - [`ExtractionRule`] - How a role's value is located in a match
//! - [`LanguagePattern`] - A complete declarative pattern with priority
//! - [`LanguageProfile`] - Word order and generic markers for a language
//! - [`CommandCatalog`] - Per-command role descriptors from the execution engine
//! - [`PatternGenerator`] - Synthesizes baseline patterns from a profile
//!
//! Patterns are configuration: they are registered once at language-load time
//! and consumed read-only by the matcher.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod extraction;
pub mod generator;
pub mod pattern;
pub mod profile;
pub mod template;
pub mod text;

pub use command::{CommandCatalog, CommandDescriptor, RoleSpec};
pub use extraction::{ExtractionRule, MarkerSide};
pub use generator::PatternGenerator;
pub use pattern::{LanguagePattern, PatternSource};
pub use profile::{AdpositionOrder, LanguageProfile, WordOrder};
pub use template::{AliasSet, Capture, GroupToken, LiteralToken, RoleToken, TemplateToken};
