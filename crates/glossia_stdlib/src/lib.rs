//! Built-in language modules for Glossia.
//!
//! Ships the standard command catalog (the role descriptors the execution
//! engine registers for its commands) and language modules for the supported
//! languages. Four languages carry hand-authored pattern tables (en, zh, es,
//! ja); the rest register a profile only and parse entirely through the
//! pattern generator.
//!
//! Pattern tables are configuration data: declarative, per-language, and
//! replaceable at runtime through the registry or a bundle.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod languages;

use std::sync::Arc;

use glossia_foundation::Result;
use glossia_language::CommandCatalog;
use glossia_parser::{LanguageRegistry, SemanticParser};

pub use catalog::standard_catalog;

/// Language codes registered by [`register_standard_languages`], sorted.
pub const LANGUAGES: &[&str] = &[
    "de", "en", "es", "fr", "hi", "ja", "ko", "ru", "tr", "zh",
];

/// Registers every built-in language module.
///
/// # Errors
///
/// Propagates pattern-validation failures from the authored tables; the
/// shipped tables are expected to validate.
pub fn register_standard_languages(registry: &LanguageRegistry) -> Result<()> {
    languages::en::register(registry)?;
    languages::es::register(registry)?;
    languages::zh::register(registry)?;
    languages::ja::register(registry)?;
    languages::profiles::register(registry);
    Ok(())
}

/// Builds a ready-to-use parser: standard catalog, every built-in language.
///
/// # Errors
///
/// Propagates registration failures from [`register_standard_languages`].
pub fn standard_parser() -> Result<SemanticParser> {
    let registry = Arc::new(LanguageRegistry::new(Arc::new(standard_catalog())));
    register_standard_languages(&registry)?;
    Ok(SemanticParser::new(registry))
}

/// Convenience: a registry with the standard catalog and no languages.
#[must_use]
pub fn empty_registry() -> LanguageRegistry {
    LanguageRegistry::new(Arc::new(standard_catalog()))
}

/// Convenience: the standard catalog behind an `Arc`.
#[must_use]
pub fn standard_catalog_arc() -> Arc<CommandCatalog> {
    Arc::new(standard_catalog())
}
