//! Error types for the Learnify client library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all client operations.
///
/// Gating violations are not represented here: they are an expected outcome of
/// toggling a task and live in [`crate::engine::GatingError`].
#[derive(Error, Debug)]
pub enum LearnifyError {
    /// Transport-level failure talking to the course API
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// Course not found for the given ID
    #[error("Course with ID {id} not found")]
    CourseNotFound { id: String },
    /// Missing or rejected bearer token
    #[error("Not authorized, log in with `learnify login --token <TOKEN>`")]
    Unauthorized,
    /// A snapshot could not be persisted and the session was rolled back
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: Box<LearnifyError>,
    },
    /// Session store connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Response bodies the client cannot decode
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> LearnifyError {
        LearnifyError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating HTTP transport errors.
pub struct HttpErrorBuilder {
    message: String,
}

impl HttpErrorBuilder {
    /// Create a new HTTP error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> LearnifyError {
        LearnifyError::Http {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating persistence errors that wrap a gateway failure.
pub struct PersistenceErrorBuilder {
    message: String,
}

impl PersistenceErrorBuilder {
    /// Create a new persistence error builder with a user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error wrapping the underlying gateway error.
    pub fn with_source(self, source: LearnifyError) -> LearnifyError {
        LearnifyError::Persistence {
            message: self.message,
            source: Box::new(source),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LearnifyError {
        LearnifyError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LearnifyError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for HTTP transport errors.
    pub fn http(message: impl Into<String>) -> HttpErrorBuilder {
        HttpErrorBuilder::new(message)
    }

    /// Creates a builder for persistence errors.
    pub fn persistence(message: impl Into<String>) -> PersistenceErrorBuilder {
        PersistenceErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        LearnifyError::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LearnifyError::database(message).with_source(e))
    }
}

/// Specialized extension trait for HTTP-related Results.
pub trait HttpResultExt<T> {
    /// Map transport errors with a message.
    fn http_context(self, message: &str) -> Result<T>;
}

impl<T> HttpResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn http_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LearnifyError::http(message).with_source(e))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, LearnifyError>;
