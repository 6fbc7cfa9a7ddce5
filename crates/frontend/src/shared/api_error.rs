use thiserror::Error;

/// Failure of a single API call.
///
/// `Network`, `Status` and `Decode` are transport-class failures. `Rejected`
/// means the server answered with `success` absent or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Rejected by server: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
}

impl ApiError {
    pub fn rejected(message: Option<String>) -> Self {
        ApiError::Rejected { message }
    }

    /// Server-supplied message, if the server rejected the call with one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Rejected { .. })
    }
}
