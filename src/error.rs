//! Unified error type for smex.
//!
//! All public APIs return `Result<T, SmexError>`. The error type provides
//! specific variants for common failure categories while remaining easy to
//! construct from string messages for application-level validation errors.

use std::fmt;

/// The unified error type for all smex operations.
#[derive(Debug)]
pub enum SmexError {
    /// Filesystem or I/O operation failed.
    Io(std::io::Error),

    /// CSV serialization error.
    Csv(csv::Error),

    /// An error originating from the secrets provider.
    Provider { provider: String, message: String },

    /// User input validation failed.
    Validation(String),

    /// Any other error. Allows easy migration from string-based errors.
    Other(String),
}

// ── Display ────────────────────────────────────────────────────────────

impl fmt::Display for SmexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmexError::Io(e) => write!(f, "{}", e),
            SmexError::Csv(e) => write!(f, "CSV error: {}", e),
            SmexError::Provider { provider, message } => {
                write!(f, "provider '{}': {}", provider, message)
            }
            SmexError::Validation(msg) => write!(f, "{}", msg),
            SmexError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SmexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SmexError::Io(e) => Some(e),
            SmexError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

// ── From implementations for common error types ────────────────────────

impl From<std::io::Error> for SmexError {
    fn from(e: std::io::Error) -> Self {
        SmexError::Io(e)
    }
}

impl From<csv::Error> for SmexError {
    fn from(e: csv::Error) -> Self {
        SmexError::Csv(e)
    }
}

// Allow easy conversion from string-based errors (the most common pattern).
impl From<String> for SmexError {
    fn from(s: String) -> Self {
        SmexError::Other(s)
    }
}

impl From<&str> for SmexError {
    fn from(s: &str) -> Self {
        SmexError::Other(s.to_string())
    }
}

// ── Convenience constructors ───────────────────────────────────────────

impl SmexError {
    /// Create a provider-specific error.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        SmexError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SmexError::Validation(message.into())
    }

    /// Create a provider error for AWS, translating common Secrets Manager
    /// errors into user-friendly messages.
    pub fn aws(e: impl std::fmt::Display) -> Self {
        let msg = e.to_string();

        let friendly = if msg.contains("ResourceNotFoundException") {
            "Secret not found (may have been deleted)".to_string()
        } else if msg.contains("AccessDeniedException") {
            "Access denied (check IAM permissions)".to_string()
        } else if msg.contains("ThrottlingException") {
            "Request throttled (too many calls in a short window)".to_string()
        } else if msg.contains("InvalidParameterException") {
            "Invalid parameter".to_string()
        } else if msg.contains("InvalidRequestException") {
            "Invalid request".to_string()
        } else if msg.contains("DecryptionFailure") {
            "Decryption failed (KMS key issue)".to_string()
        } else if msg.contains("InternalServiceError") {
            "AWS internal error (try again later)".to_string()
        } else {
            msg
        };

        SmexError::Provider {
            provider: "aws".to_string(),
            message: friendly,
        }
    }
}

/// Convenience type alias for Results using SmexError.
pub type Result<T> = std::result::Result<T, SmexError>;
