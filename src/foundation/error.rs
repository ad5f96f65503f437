use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    CredentialsIncomplete,
    AuthenticationFailed,
    KeySetNotFound,
    ApiFailure,
    TransportError,
    StorageError,
    SerializationError,
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// User-facing validation failure, raised before any network call.
    /// The display string is the message the host returns verbatim.
    #[error("{reason}")]
    Validation { reason: String },

    #[error("credentials incomplete: {missing} is not configured")]
    CredentialsIncomplete { missing: &'static str },

    #[error("authentication failed: {details}")]
    AuthenticationFailed { details: String },

    #[error("keyset not found: {id}")]
    KeySetNotFound { id: String },

    #[error("remote API failure (status {status}): {details}")]
    ApiFailure { status: u16, details: String },

    #[error("transport error: {details}")]
    Transport { details: String },

    #[error("storage error during {operation}: {details}")]
    StorageError { operation: String, details: String },

    #[error("serialization error: {details}")]
    SerializationError { details: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::Validation { .. } => ErrorCode::Validation,
            EngineError::CredentialsIncomplete { .. } => ErrorCode::CredentialsIncomplete,
            EngineError::AuthenticationFailed { .. } => ErrorCode::AuthenticationFailed,
            EngineError::KeySetNotFound { .. } => ErrorCode::KeySetNotFound,
            EngineError::ApiFailure { .. } => ErrorCode::ApiFailure,
            EngineError::Transport { .. } => ErrorCode::TransportError,
            EngineError::StorageError { .. } => ErrorCode::StorageError,
            EngineError::SerializationError { .. } => ErrorCode::SerializationError,
        }
    }

    /// True for failures the host should render as an error-response
    /// payload rather than escalate as a hard operation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, EngineError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::KeySetNotFound { .. })
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        EngineError::Validation { reason: reason.into() }
    }

    pub fn authentication_failed(details: impl Into<String>) -> Self {
        EngineError::AuthenticationFailed { details: details.into() }
    }

    pub fn keyset_not_found(id: impl Into<String>) -> Self {
        EngineError::KeySetNotFound { id: id.into() }
    }

    pub fn api_failure(status: u16, details: impl Into<String>) -> Self {
        EngineError::ApiFailure { status, details: details.into() }
    }

    pub fn storage(operation: impl Into<String>, details: impl Into<String>) -> Self {
        EngineError::StorageError { operation: operation.into(), details: details.into() }
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(err: reqwest::Error) -> Self {
        EngineError::Transport { details: err.to_string() }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::SerializationError { details: err.to_string() }
    }
}

// NOTE: Avoid adding generic "stringly" error conversions here.
// Use structured `EngineError` variants at the call site to preserve context.
