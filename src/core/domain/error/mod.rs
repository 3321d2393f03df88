use thiserror::Error;

/// The main error type for hypervisor operations.
///
/// Upstream failures are split the way callers need to react to them:
/// a rejected login, a transport problem, or a body that could not be
/// understood. Configuration problems surface as validation errors.
#[derive(Error, Debug)]
pub enum ProxmoxError {
    /// Represents errors that occur while talking to the cluster
    ///
    /// Covers refused connections, expired deadlines and non-success
    /// status codes.
    #[error("Network error: {0}")]
    Network(String),

    /// Represents authentication failures
    ///
    /// Either the credentials were rejected or the ticket response did not
    /// have the expected shape.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Represents a response body that is not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),

    /// Represents validation failures with detailed context
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ProxmoxError {
    /// Maps a transport error, keeping deadline expiry distinguishable in the message.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProxmoxError::Network(format!("request timed out: {}", error))
        } else {
            ProxmoxError::Network(format!("HTTP request failed: {}", error))
        }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a ProxmoxError
pub type ProxmoxResult<T> = Result<T, ProxmoxError>;
