//! Glossia - Multilingual natural-language command parser
//!
//! This crate re-exports all layers of the Glossia system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: glossia_runtime    — REPL, CLI
//!          glossia_stdlib     — Built-in language modules, command catalog
//! Layer 2: glossia_parser     — Tokenizer, registry, matcher, extraction,
//!                               AST builder, parse/render, bundles
//! Layer 1: glossia_language   — Pattern templates, profiles, generator
//! Layer 0: glossia_foundation — Core types (SemanticRole, RoleValue, Error)
//! ```

pub use glossia_foundation as foundation;
pub use glossia_language as language;
pub use glossia_parser as parser;
pub use glossia_runtime as runtime;
pub use glossia_stdlib as stdlib;
