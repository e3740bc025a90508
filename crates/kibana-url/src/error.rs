//! Error types for URL generation.
//!
//! Every error is raised synchronously, before any part of a URL has been
//! assembled, and none represent transient conditions: callers should treat
//! them as configuration or programming mistakes to fix before retrying.

use thiserror::Error;

/// Main error type for URL generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Generation was attempted before the configuration held a base URL
    /// and at least one data source
    #[error("builder is not configured: set a base URL and at least one data source")]
    NotConfigured,

    /// The requested data source is not registered in the configuration
    #[error("unknown data source: {0}")]
    UnknownDataSource(String),

    /// The request would produce a malformed URL
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration failed structural validation
    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Specialized result type for URL generation.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "NOT_CONFIGURED",
            Self::UnknownDataSource(_) => "UNKNOWN_DATA_SOURCE",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}

// Conversions from external error types
impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
