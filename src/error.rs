//! Unified error types for spdx-reconcile.
//!
//! Merging and validation never fail: malformed data is either ignored by the
//! merge or reported as a validation issue. Errors are reserved for the
//! deliberate mutations (relationship registration), vocabulary conversion,
//! and the I/O shell around the engine.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spdx-reconcile operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SpdxError {
    /// Errors while reading a document into the model
    #[error("Failed to parse SPDX document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// A relationship endpoint does not resolve to an element of the document
    #[error("Relationship {relationship} references unknown {endpoint} element '{id}'")]
    Referential {
        id: String,
        endpoint: Endpoint,
        relationship: String,
    },

    /// Text that is not part of a closed SPDX vocabulary
    #[error("Unsupported {kind} value: '{value}'")]
    UnknownVocabulary { kind: &'static str, value: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Which end of a relationship failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Not an SPDX document: {0}")]
    NotSpdx(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for spdx-reconcile operations
pub type Result<T> = std::result::Result<T, SpdxError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SpdxError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a referential error for a relationship endpoint
    pub fn referential(
        id: impl Into<String>,
        endpoint: Endpoint,
        relationship: impl Into<String>,
    ) -> Self {
        Self::Referential {
            id: id.into(),
            endpoint,
            relationship: relationship.into(),
        }
    }

    /// Create an error for text outside a closed vocabulary
    pub fn unknown_vocabulary(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVocabulary {
            kind,
            value: value.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error came from relationship registration
    #[must_use]
    pub const fn is_referential(&self) -> bool {
        matches!(self, Self::Referential { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SpdxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SpdxError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost first, so an error raised while
/// loading a fragment reads `"loading fragment a.json: JSON deserialization"`.
///
/// ```ignore
/// use spdx_reconcile::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path).context("reading SPDX file")?;
/// let doc: Document = serde_json::from_str(&content)
///     .with_context(|| format!("parsing {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SpdxError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SpdxError, new_ctx: &str) -> SpdxError {
    match err {
        SpdxError::Parse {
            context: existing,
            source,
        } => SpdxError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SpdxError::Io {
            path,
            message,
            source,
        } => SpdxError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SpdxError::Config(msg) => SpdxError::Config(chain_context(new_ctx, &msg)),
        // Referential and vocabulary errors already name the offending value
        other => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
