//! The language registry.
//!
//! An explicit registry instance (no process-wide globals) maps language
//! code → tokenizer, profile, and pattern sets. Registration is a whole-set
//! publish: each language's entry is an immutable `Arc` replaced atomically
//! under the write lock, and the language table itself is a persistent map,
//! so concurrent readers snapshot in O(1) and observe either the prior
//! complete entry or the new one, never a partial set.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use glossia_foundation::{Error, Result};
use glossia_language::{CommandCatalog, LanguagePattern, LanguageProfile, PatternGenerator};

use crate::token::TokenStream;
use crate::tokenizer::Tokenizer;

/// Everything registered for one language. Immutable once published.
pub struct LanguageEntry {
    code: String,
    tokenizer: Arc<dyn Tokenizer>,
    profile: LanguageProfile,
    authored: Vec<Arc<LanguagePattern>>,
    generated: Vec<Arc<LanguagePattern>>,
}

impl LanguageEntry {
    /// The language code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The language's linguistic profile.
    #[must_use]
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Hand-authored patterns, in registration order.
    #[must_use]
    pub fn authored(&self) -> &[Arc<LanguagePattern>] {
        &self.authored
    }

    /// Generated fallback patterns.
    #[must_use]
    pub fn generated(&self) -> &[Arc<LanguagePattern>] {
        &self.generated
    }
}

/// Process-shared store of language registrations.
pub struct LanguageRegistry {
    catalog: Arc<CommandCatalog>,
    languages: RwLock<im::HashMap<String, Arc<LanguageEntry>>>,
}

impl LanguageRegistry {
    /// Creates a registry over the execution engine's command catalog.
    #[must_use]
    pub fn new(catalog: Arc<CommandCatalog>) -> Self {
        Self {
            catalog,
            languages: RwLock::new(im::HashMap::new()),
        }
    }

    /// The command catalog this registry generates fallbacks from.
    #[must_use]
    pub fn catalog(&self) -> &Arc<CommandCatalog> {
        &self.catalog
    }

    /// Registers a language: its tokenizer and profile.
    ///
    /// Generated fallback patterns are synthesized here, once, for every
    /// catalog command the profile carries a keyword for. Re-registering a
    /// language replaces its whole entry: last write wins, and any
    /// previously registered authored patterns are dropped with it.
    pub fn register_language(
        &self,
        code: impl Into<String>,
        tokenizer: Arc<dyn Tokenizer>,
        profile: LanguageProfile,
    ) {
        let code = code.into();
        let generated = PatternGenerator::generate_all(&profile, &self.catalog, &code)
            .into_iter()
            .map(Arc::new)
            .collect();

        let entry = Arc::new(LanguageEntry {
            code: code.clone(),
            tokenizer,
            profile,
            authored: Vec::new(),
            generated,
        });

        let mut languages = self.write_lock();
        languages.insert(code.clone(), entry);
        debug!(language = %code, "registered language");
    }

    /// Replaces the authored pattern set for a registered language.
    ///
    /// Every pattern is validated first; one invalid pattern rejects the
    /// whole set, leaving the previous publication untouched.
    ///
    /// # Errors
    ///
    /// [`glossia_foundation::ErrorKind::LanguageNotLoaded`] when the language
    /// has not been registered, or
    /// [`glossia_foundation::ErrorKind::InvalidPattern`] when a pattern fails
    /// validation.
    pub fn register_patterns(&self, code: &str, patterns: Vec<LanguagePattern>) -> Result<()> {
        for pattern in &patterns {
            pattern.validate()?;
        }

        let mut languages = self.write_lock();
        let Some(current) = languages.get(code) else {
            return Err(Error::language_not_loaded(code));
        };

        let entry = Arc::new(LanguageEntry {
            code: current.code.clone(),
            tokenizer: Arc::clone(&current.tokenizer),
            profile: current.profile.clone(),
            authored: patterns.into_iter().map(Arc::new).collect(),
            generated: current.generated.clone(),
        });

        languages.insert(code.to_string(), entry);
        debug!(language = %code, "published authored pattern set");
        Ok(())
    }

    /// All patterns for a language: authored first, then generated.
    ///
    /// # Errors
    ///
    /// [`glossia_foundation::ErrorKind::LanguageNotLoaded`] when the language
    /// has not been registered.
    pub fn patterns(&self, code: &str) -> Result<Vec<Arc<LanguagePattern>>> {
        let entry = self
            .entry(code)
            .ok_or_else(|| Error::language_not_loaded(code))?;
        let mut patterns =
            Vec::with_capacity(entry.authored.len() + entry.generated.len());
        patterns.extend(entry.authored.iter().cloned());
        patterns.extend(entry.generated.iter().cloned());
        Ok(patterns)
    }

    /// Patterns for one (language, command) pair: authored first, then
    /// generated.
    ///
    /// # Errors
    ///
    /// [`glossia_foundation::ErrorKind::LanguageNotLoaded`] when the language
    /// has not been registered.
    pub fn patterns_for(&self, code: &str, command: &str) -> Result<Vec<Arc<LanguagePattern>>> {
        Ok(self
            .patterns(code)?
            .into_iter()
            .filter(|pattern| pattern.command == command)
            .collect())
    }

    /// Returns true when the language has a registered entry.
    #[must_use]
    pub fn is_registered(&self, code: &str) -> bool {
        self.entry(code).is_some()
    }

    /// The profile of a registered language.
    ///
    /// # Errors
    ///
    /// [`glossia_foundation::ErrorKind::LanguageNotLoaded`] when the language
    /// has not been registered.
    pub fn profile(&self, code: &str) -> Result<LanguageProfile> {
        self.try_profile(code)
            .ok_or_else(|| Error::language_not_loaded(code))
    }

    /// The profile of a registered language, or `None`.
    #[must_use]
    pub fn try_profile(&self, code: &str) -> Option<LanguageProfile> {
        self.entry(code).map(|entry| entry.profile.clone())
    }

    /// Codes of all registered languages, sorted.
    #[must_use]
    pub fn registered_languages(&self) -> Vec<String> {
        let languages = self.read_snapshot();
        let mut codes: Vec<String> = languages.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Tokenizes input with the language's registered strategy.
    ///
    /// # Errors
    ///
    /// [`glossia_foundation::ErrorKind::LanguageNotLoaded`] when the language
    /// has no registered tokenizer.
    pub fn tokenize(&self, input: &str, code: &str) -> Result<TokenStream> {
        let entry = self
            .entry(code)
            .ok_or_else(|| Error::language_not_loaded(code))?;
        Ok(entry.tokenizer.tokenize(input))
    }

    /// Snapshot lookup of one language entry.
    fn entry(&self, code: &str) -> Option<Arc<LanguageEntry>> {
        self.read_snapshot().get(code).cloned()
    }

    /// O(1) clone of the persistent language table.
    fn read_snapshot(&self) -> im::HashMap<String, Arc<LanguageEntry>> {
        self.languages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write_lock(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, im::HashMap<String, Arc<LanguageEntry>>> {
        self.languages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
