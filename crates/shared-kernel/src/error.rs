// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum StopLangError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<StopLangError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, StopLangError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Unknown language: {name}")]
    UnknownLanguage { name: String },

    #[error("Range validation failed: {field} must be between {min} and {max}")]
    RangeValidation {
        field: String,
        min: String,
        max: String,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
///
/// Every variant here that concerns word lists is a packaging defect: a
/// declared language must always have a readable list.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Word list '{name}' is not available")]
    WordListUnavailable { name: String },

    #[error("Failed to read word list '{name}' from '{path}': {source}")]
    WordListRead {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list '{name}' is not valid UTF-8: {source}")]
    WordListDecode {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for StopLangError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StopLangError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl StopLangError {
    /// Walks through `Context` wrappers to the underlying error.
    #[must_use]
    pub fn root(&self) -> &StopLangError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the error is a missing or unreadable word list.
    #[must_use]
    pub fn is_configuration_defect(&self) -> bool {
        matches!(
            self.root(),
            Self::Infrastructure(
                InfrastructureError::WordListUnavailable { .. }
                    | InfrastructureError::WordListRead { .. }
                    | InfrastructureError::WordListDecode { .. }
            )
        )
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<StopLangError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| StopLangError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| StopLangError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
