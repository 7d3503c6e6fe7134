//! Domain error types
//!
//! This module defines the error hierarchy for ou-export.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main ou-export error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum OuExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Directory service errors
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Invalid request or argument
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl OuExportError {
    /// Returns true if the error was raised while reaching the directory
    ///
    /// The CLI maps these to the connection exit code.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            OuExportError::Directory(
                DirectoryError::ConnectionFailed(_)
                    | DirectoryError::BindFailed { .. }
                    | DirectoryError::AuthenticationFailed(_)
            )
        )
    }
}

/// Directory-service errors
///
/// Errors that occur when talking to the directory provider.
/// These errors don't expose ldap3 types.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Failed to reach the directory server
    #[error("Failed to connect to directory server: {0}")]
    ConnectionFailed(String),

    /// Simple bind returned a non-success result code
    #[error("Bind failed with code {code}: {message}")]
    BindFailed { code: u32, message: String },

    /// Credentials were rejected (LDAP result code 49)
    #[error("Authentication failed for {0}")]
    AuthenticationFailed(String),

    /// The search itself failed
    #[error("Search failed: {0}")]
    SearchFailed(String),

    /// The search base does not exist or is not readable
    #[error("Search base not found: {0}")]
    InvalidSearchBase(String),

    /// A snapshot file could not be read or parsed
    #[error("Snapshot unreadable: {0}")]
    SnapshotUnreadable(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for OuExportError {
    fn from(err: std::io::Error) -> Self {
        OuExportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for OuExportError {
    fn from(err: serde_json::Error) -> Self {
        OuExportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for OuExportError {
    fn from(err: toml::de::Error) -> Self {
        OuExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for OuExportError {
    fn from(err: csv::Error) -> Self {
        OuExportError::Csv(err.to_string())
    }
}
