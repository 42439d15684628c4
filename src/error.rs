//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Login endpoint rejected the credentials
    #[error("{0}")]
    LoginRejected(String),

    /// Response body could not be parsed
    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Excel export error
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// Validation error
    #[error("{0}")]
    Validation(String),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record id already taken
    #[error("{0} already exists. Please change it.")]
    DuplicateId(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Message shown to the user when a login attempt fails.
    ///
    /// Transport problems collapse into a generic message; rejections keep
    /// the server's wording.
    pub fn login_message(&self) -> String {
        match self {
            Self::LoginRejected(msg) | Self::Validation(msg) => msg.clone(),
            _ => "Server error. Try again later.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message() {
        let err = AppError::DuplicateId("Event ID".to_string());
        assert_eq!(err.to_string(), "Event ID already exists. Please change it.");
    }

    #[test]
    fn test_login_message_keeps_rejection_text() {
        let err = AppError::LoginRejected("Invalid password".to_string());
        assert_eq!(err.login_message(), "Invalid password");
    }

    #[test]
    fn test_login_message_hides_transport_errors() {
        let err = AppError::Io(std::io::Error::other("connection reset"));
        assert_eq!(err.login_message(), "Server error. Try again later.");

        let err = AppError::from(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err());
        assert_eq!(err.login_message(), "Server error. Try again later.");
    }
}
