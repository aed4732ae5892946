//! Built-in language modules.
//!
//! Each module registers one language: tokenizer, profile, and (for the
//! hand-authored set) a pattern table. The tables are configuration data in
//! code form; the same content could ship as JSON bundles.

pub mod en;
pub mod es;
pub mod ja;
pub mod profiles;
pub mod zh;
