//! Error types for the Glossia system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Per-candidate match and extraction failures during pattern search are
//! local and recovered by advancing to the next candidate; only exhaustion
//! of all candidates surfaces [`ErrorKind::NoPatternMatch`].

use std::fmt;

use thiserror::Error;

/// Convenience result alias for Glossia operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Glossia operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a language-not-loaded error.
    #[must_use]
    pub fn language_not_loaded(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::LanguageNotLoaded { code: code.into() })
    }

    /// Creates a no-pattern-match error.
    #[must_use]
    pub fn no_pattern_match(language: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoPatternMatch {
            language: language.into(),
        })
    }

    /// Creates a semantic mapping error.
    #[must_use]
    pub fn semantic_mapping(
        command: impl Into<String>,
        role: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::SemanticMapping {
            command: command.into(),
            role: role.into(),
            reason: reason.into(),
        })
    }

    /// Creates a language-load error.
    #[must_use]
    pub fn language_load(
        code: impl Into<String>,
        source: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::LanguageLoad {
            code: code.into(),
            source: source.into(),
            cause: cause.into(),
        })
    }

    /// Creates an invalid-pattern error.
    #[must_use]
    pub fn invalid_pattern(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            id: id.into(),
            reason: reason.into(),
        })
    }

    /// Creates an empty-input error.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
///
/// `Display` and `Error` are implemented by hand rather than via
/// `#[derive(thiserror::Error)]` because the `LanguageLoad` variant carries a
/// field literally named `source` (the bundle's origin path/module, a
/// `String`), which the derive macro would otherwise treat as the error's
/// `std::error::Error` source and require to implement `Error`.
#[derive(Debug)]
pub enum ErrorKind {
    /// Parse or tokenize was called on a language with no registered entry.
    LanguageNotLoaded {
        /// The requested language code.
        code: String,
    },

    /// No hand-authored or generated candidate matched the input.
    NoPatternMatch {
        /// The language the input was parsed under.
        language: String,
    },

    /// The AST builder rejected a matched-but-invalid binding.
    SemanticMapping {
        /// The command being built.
        command: String,
        /// The offending role.
        role: String,
        /// Why the binding was rejected.
        reason: String,
    },

    /// A language bundle failed to load or register.
    LanguageLoad {
        /// The language code being loaded.
        code: String,
        /// Where the bundle came from (path or module name).
        source: String,
        /// The underlying cause.
        cause: String,
    },

    /// A pattern failed validation at registration time.
    InvalidPattern {
        /// The pattern identifier.
        id: String,
        /// Why validation failed.
        reason: String,
    },

    /// Input contained no tokens.
    EmptyInput,

    /// Internal error (should not happen).
    Internal(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LanguageNotLoaded { code } => {
                write!(f, "language not loaded: {code}")
            }
            Self::NoPatternMatch { language } => {
                write!(f, "no pattern matched in language {language}")
            }
            Self::SemanticMapping {
                command,
                role,
                reason,
            } => write!(
                f,
                "semantic mapping failed for {command}, role {role}: {reason}"
            ),
            Self::LanguageLoad {
                code,
                source,
                cause,
            } => write!(f, "failed to load language {code} from {source}: {cause}"),
            Self::InvalidPattern { id, reason } => {
                write!(f, "invalid pattern {id}: {reason}")
            }
            Self::EmptyInput => write!(f, "empty input"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Language code in effect.
    pub language: Option<String>,
    /// The input text being parsed.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language code.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the input text.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(language) = &self.language {
            write!(f, "language {language}")?;
        }
        if let Some(input) = &self.input {
            if self.language.is_some() {
                write!(f, ", ")?;
            }
            write!(f, "input {input:?}")?;
        }
        Ok(())
    }
}
