//! Error types for launch-tracker
//!
//! This module provides error handling for the whole service, including:
//! - A single crate-wide [`Error`] type with context wrapping
//! - Failure classification (missing, temporary, unauthorized, invalid) via [`Classify`]
//! - HTTP status code mapping for the REST adapter via [`ToHttpStatus`]
//!
//! Classification lives only on [`Error::Classified`]. Wrapping an error with
//! [`Error::wrap`] adds context to the display text but never hides the
//! classification: every [`Classify`] probe walks the context chain down to the
//! root cause first.

use thiserror::Error;

/// Result type alias for launch-tracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classifications that callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The resource or query yielded nothing (e.g. upstream 404)
    Missing,
    /// Transient failure, the operation may succeed if retried
    Temporary,
    /// The caller lacks the rights for the operation
    Unauthorized,
    /// Caller-supplied input violates a domain rule
    Invalid,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Missing => "missing",
            ErrorKind::Temporary => "temporary",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Invalid => "invalid",
        };
        f.write_str(s)
    }
}

/// Main error type for launch-tracker
#[derive(Debug, Error)]
pub enum Error {
    /// A failure carrying a classification
    #[error("{message}")]
    Classified {
        /// How callers should treat this failure
        kind: ErrorKind,
        /// Human-readable description
        message: String,
    },

    /// Another error with added context
    #[error("{context}: {source}")]
    Context {
        /// What was being attempted when the inner error occurred
        context: String,
        /// The wrapped error
        #[source]
        source: Box<Error>,
    },

    /// Transport-level failure talking to the upstream API
    #[error("{context}: {source}")]
    Network {
        /// What was being attempted (e.g. "http request failed")
        context: String,
        /// The underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// JSON encoding or decoding failed
    #[error("{context}: {source}")]
    Serialization {
        /// What was being encoded or decoded
        context: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "retry.max_attempts")
        key: Option<String>,
    },

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error classified as [`ErrorKind::Missing`]
    pub fn missing(message: impl Into<String>) -> Self {
        Self::classified(ErrorKind::Missing, message)
    }

    /// Create an error classified as [`ErrorKind::Temporary`]
    pub fn temporary(message: impl Into<String>) -> Self {
        Self::classified(ErrorKind::Temporary, message)
    }

    /// Create an error classified as [`ErrorKind::Unauthorized`]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::classified(ErrorKind::Unauthorized, message)
    }

    /// Create an error classified as [`ErrorKind::Invalid`]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::classified(ErrorKind::Invalid, message)
    }

    fn classified(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error::Classified {
            kind,
            message: message.into(),
        }
    }

    /// Wrap this error with context, keeping it reachable as the cause
    pub fn wrap(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Follow the context chain down to the deepest original error
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Error::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Classification of the root cause, if any
    pub fn kind(&self) -> Option<ErrorKind> {
        match self.root_cause() {
            Error::Classified { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Capability probes for failure classification
///
/// Callers never match on concrete error types to decide behaviour; they ask
/// these questions instead. A value may answer `true` to more than one probe,
/// in which case consumers apply the priority Missing, Temporary,
/// Unauthorized, Invalid.
pub trait Classify {
    /// The requested resource or query yielded nothing
    fn is_missing(&self) -> bool {
        false
    }

    /// The failure is transient and worth retrying
    fn is_temporary(&self) -> bool {
        false
    }

    /// The caller is not allowed to perform the operation
    fn is_unauthorized(&self) -> bool {
        false
    }

    /// Caller-supplied input is invalid
    fn is_invalid(&self) -> bool {
        false
    }
}

impl Classify for Error {
    fn is_missing(&self) -> bool {
        self.kind() == Some(ErrorKind::Missing)
    }

    fn is_temporary(&self) -> bool {
        self.kind() == Some(ErrorKind::Temporary)
    }

    fn is_unauthorized(&self) -> bool {
        self.kind() == Some(ErrorKind::Unauthorized)
    }

    fn is_invalid(&self) -> bool {
        self.kind() == Some(ErrorKind::Invalid)
    }
}

/// Convert errors to HTTP status codes for API responses
///
/// This trait maps classified failures to HTTP status codes.
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl<T: Classify + ?Sized> ToHttpStatus for T {
    fn status_code(&self) -> u16 {
        if self.is_missing() {
            404
        } else if self.is_temporary() {
            503
        } else if self.is_unauthorized() {
            401
        } else if self.is_invalid() {
            400
        } else {
            500
        }
    }

    fn error_code(&self) -> &str {
        match self.status_code() {
            404 => "not_found",
            503 => "service_unavailable",
            401 => "unauthorized",
            400 => "invalid_request",
            _ => "internal_error",
        }
    }
}
