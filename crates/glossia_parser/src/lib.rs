//! The Glossia parsing pipeline.
//!
//! This crate transforms localized command text like `set x to 5` or
//! `設置 #box 为 5` into language-neutral [`SemanticNode`]s.
//!
//! # Architecture
//!
//! ```text
//! "設置 #box 为 5"  +  language code "zh"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [設置] [#box] [为] [5]     (per-language strategy)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ REGISTRY        │  → authored patterns ∪ generated fallbacks
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN         │  → best match: zh:set:1 (priority 100, 2 literals)
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ROLE            │  → destination = #box, patient = 5
//! │ EXTRACTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AST             │  → set(destination: #box, patient: 5)
//! │ BUILDING        │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`] - Token and token stream types
//! - [`tokenizer`] - Per-language tokenization strategies
//! - [`registry`] - Copy-on-write language registry
//! - [`matcher`] - Template alignment and candidate scoring
//! - [`extract`] - Position and marker based role extraction
//! - [`ast`] - Role mapping and semantic node construction
//! - [`parse`] - The parse/render orchestration API
//! - [`bundle`] - Declarative language bundle loading

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod bundle;
pub mod extract;
pub mod matcher;
pub mod parse;
pub mod registry;
pub mod token;
pub mod tokenizer;

pub use ast::{AstBuilder, RoleMapper};
pub use bundle::{LanguageBundle, load_bundle_path, load_bundle_str};
pub use extract::{ExtractionEngine, ExtractionFailure};
pub use matcher::{MatchResult, PatternMatcher, RoleClaim};
pub use parse::SemanticParser;
pub use registry::LanguageRegistry;
pub use token::{LanguageToken, TokenKind, TokenStream};
pub use tokenizer::{HanScript, SpaceDelimited, Tokenizer};
