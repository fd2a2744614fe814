//! Error types for the Deliver API client.

use thiserror::Error;

/// Errors that can occur when building or running a Deliver query.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client constructed with an invalid project id, preview key or base URL.
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// A filter value was rejected.
    #[error("Invalid value for {field}: {message}")]
    Validation { field: String, message: String },

    /// Operator alias not in the operator table.
    #[error("Unrecognised operator '{operator}' in {field}")]
    UnrecognizedOperator { field: String, operator: String },

    /// Unpublished content requested without a preview key.
    #[error("To fetch unpublished content, you must supply a Preview API Key")]
    PublishedState,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Deliver API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True for errors raised while talking to the server rather than while
    /// building the query.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Request(_) | ApiError::Status { .. } | ApiError::Parse(_)
        )
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
