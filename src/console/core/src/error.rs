//! Error handling for the console core.
//!
//! This module provides:
//! - A closed set of machine-readable error codes
//! - User-facing vs internal messages
//! - Severity classification used for logging
//! - Error metrics through the `metrics` facade

use metrics::counter;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// Result Type Alias
// ═══════════════════════════════════════════════════════════════════════════════

/// A specialized Result type for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;

// ═══════════════════════════════════════════════════════════════════════════════
// Error Codes
// ═══════════════════════════════════════════════════════════════════════════════

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Authentication/Authorization
    UnmappedRole,
    Forbidden,

    // Navigation
    UnknownScreen,

    // Storage
    StorageError,
    StorageCorrupted,

    // Serialization
    SerializationError,
    DeserializationError,

    // Configuration
    ConfigurationError,
    InvalidConfiguration,
}

impl ErrorCode {
    /// Numeric code, stable across releases.
    pub const fn numeric_code(&self) -> u32 {
        match self {
            Self::UnmappedRole => 4000,
            Self::Forbidden => 4002,
            Self::UnknownScreen => 4100,
            Self::StorageError => 2000,
            Self::StorageCorrupted => 2001,
            Self::SerializationError => 2200,
            Self::DeserializationError => 2201,
            Self::ConfigurationError => 5000,
            Self::InvalidConfiguration => 5001,
        }
    }

    /// Coarse category used as a metrics label.
    pub const fn category(&self) -> &'static str {
        match self {
            Self::UnmappedRole | Self::Forbidden => "auth",
            Self::UnknownScreen => "navigation",
            Self::StorageError | Self::StorageCorrupted => "storage",
            Self::SerializationError | Self::DeserializationError => "serialization",
            Self::ConfigurationError | Self::InvalidConfiguration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Error Severity
// ═══════════════════════════════════════════════════════════════════════════════

/// Severity level for errors (affects logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Expected outcomes of user input (bad role string, denied screen)
    Low,
    /// Local environment problems (unreadable session file, bad config)
    Medium,
    /// Stored session data that cannot be read back or written out
    High,
}

impl ErrorSeverity {
    /// Get severity based on error code.
    pub const fn from_code(code: &ErrorCode) -> Self {
        match code {
            ErrorCode::UnmappedRole | ErrorCode::Forbidden | ErrorCode::UnknownScreen => Self::Low,

            ErrorCode::StorageError
            | ErrorCode::DeserializationError
            | ErrorCode::ConfigurationError
            | ErrorCode::InvalidConfiguration => Self::Medium,

            ErrorCode::StorageCorrupted | ErrorCode::SerializationError => Self::High,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Main Error Type
// ═══════════════════════════════════════════════════════════════════════════════

/// The main error type for the console core.
#[derive(Error, Debug)]
pub struct ConsoleError {
    /// Machine-readable error code
    code: ErrorCode,

    /// Message safe to show in the UI
    user_message: Cow<'static, str>,

    /// Detailed internal message (for logging only)
    internal_message: Option<String>,

    /// The source error that caused this error
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.user_message)?;
        if let Some(ref internal) = self.internal_message {
            write!(f, " (internal: {})", internal)?;
        }
        Ok(())
    }
}

impl ConsoleError {
    // ─────────────────────────────────────────────────────────────────────────
    // Constructors
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a new error with code and user message.
    pub fn new(code: ErrorCode, user_message: impl Into<Cow<'static, str>>) -> Self {
        let error = Self {
            code,
            user_message: user_message.into(),
            internal_message: None,
            source: None,
        };
        error.record_metrics();
        error
    }

    /// Create an error with both user and internal messages.
    pub fn with_internal(
        code: ErrorCode,
        user_message: impl Into<Cow<'static, str>>,
        internal_message: impl Into<String>,
    ) -> Self {
        let mut error = Self::new(code, user_message);
        error.internal_message = Some(internal_message.into());
        error
    }

    /// The backend sent a role string outside the mapping table.
    pub fn unmapped_role(raw: &str) -> Self {
        Self::with_internal(
            ErrorCode::UnmappedRole,
            "Authentication failed: unrecognized user role",
            format!("backend role {:?} is not in the role mapping table", raw),
        )
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// A screen identifier could not be parsed.
    pub fn unknown_screen(name: &str) -> Self {
        Self::new(ErrorCode::UnknownScreen, format!("Unknown screen: {}", name))
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::with_internal(ErrorCode::ConfigurationError, "Configuration error", message)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a source error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the user-facing message.
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// Get the internal message (if any).
    pub fn internal_message(&self) -> Option<&str> {
        self.internal_message.as_deref()
    }

    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::from_code(&self.code)
    }

    /// Log this error with appropriate severity.
    pub fn log(&self) {
        let code = self.code.to_string();
        let category = self.code.category();

        match self.severity() {
            ErrorSeverity::High => {
                error!(
                    error_code = %code,
                    category = category,
                    user_message = %self.user_message,
                    internal_message = ?self.internal_message,
                    source = ?self.source,
                    "Console error"
                );
            }
            ErrorSeverity::Medium => {
                warn!(
                    error_code = %code,
                    category = category,
                    user_message = %self.user_message,
                    internal_message = ?self.internal_message,
                    "Console error"
                );
            }
            ErrorSeverity::Low => {
                tracing::debug!(
                    error_code = %code,
                    category = category,
                    user_message = %self.user_message,
                    "Console error"
                );
            }
        }
    }

    fn record_metrics(&self) {
        counter!(
            "console_errors_total",
            "code" => self.code.to_string(),
            "category" => self.code.category().to_string(),
        )
        .increment(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// From Implementations for Common Error Types
// ═══════════════════════════════════════════════════════════════════════════════

impl From<std::io::Error> for ConsoleError {
    fn from(error: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let user_msg = match error.kind() {
            ErrorKind::NotFound => "Session storage not found",
            ErrorKind::PermissionDenied => "Session storage is not accessible",
            _ => "Session storage I/O error",
        };

        Self::with_internal(ErrorCode::StorageError, user_msg, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(error: serde_json::Error) -> Self {
        let code = if error.is_data() || error.is_syntax() || error.is_eof() {
            ErrorCode::DeserializationError
        } else {
            ErrorCode::SerializationError
        };
        Self::with_internal(code, "Malformed JSON payload", error.to_string()).with_source(error)
    }
}

impl From<toml::de::Error> for ConsoleError {
    fn from(error: toml::de::Error) -> Self {
        Self::with_internal(
            ErrorCode::StorageCorrupted,
            "Stored session is corrupted",
            error.to_string(),
        )
        .with_source(error)
    }
}

impl From<toml::ser::Error> for ConsoleError {
    fn from(error: toml::ser::Error) -> Self {
        Self::with_internal(
            ErrorCode::SerializationError,
            "Could not serialize session",
            error.to_string(),
        )
        .with_source(error)
    }
}

impl From<config::ConfigError> for ConsoleError {
    fn from(error: config::ConfigError) -> Self {
        let (code, user_msg) = match &error {
            config::ConfigError::PathParse(_) | config::ConfigError::FileParse { .. } => (
                ErrorCode::InvalidConfiguration,
                "Configuration file is invalid",
            ),
            _ => (ErrorCode::ConfigurationError, "Configuration error occurred"),
        };

        Self::with_internal(code, user_msg, error.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmapped_role_error() {
        let error = ConsoleError::unmapped_role("superadmin");
        assert_eq!(error.code(), ErrorCode::UnmappedRole);
        assert_eq!(error.severity(), ErrorSeverity::Low);
        assert!(error.internal_message().unwrap().contains("superadmin"));
        error.log();
    }

    #[test]
    fn test_error_severity() {
        assert_eq!(
            ErrorSeverity::from_code(&ErrorCode::Forbidden),
            ErrorSeverity::Low
        );
        assert_eq!(
            ErrorSeverity::from_code(&ErrorCode::StorageError),
            ErrorSeverity::Medium
        );
        assert_eq!(
            ErrorSeverity::from_code(&ErrorCode::StorageCorrupted),
            ErrorSeverity::High
        );
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::UnmappedRole).unwrap();
        assert_eq!(json, "\"UNMAPPED_ROLE\"");
        assert_eq!(ErrorCode::UnmappedRole.numeric_code(), 4000);
        assert_eq!(ErrorCode::StorageCorrupted.category(), "storage");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let error: ConsoleError = io.into();
        assert_eq!(error.code(), ErrorCode::StorageError);
        assert_eq!(error.user_message(), "Session storage is not accessible");
    }

    #[test]
    fn test_error_display() {
        let error = ConsoleError::with_internal(
            ErrorCode::StorageError,
            "Session storage I/O error",
            "read-only file system",
        );

        let display = format!("{}", error);
        assert!(display.contains("StorageError"));
        assert!(display.contains("Session storage I/O error"));
        assert!(display.contains("read-only file system"));
    }
}
