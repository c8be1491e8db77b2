use thiserror::Error;

/// Failures talking to the prediction service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The service answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Request { status: u16 },

    /// The body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request never got an answer
    #[error("Request failed: {0}")]
    Network(String),

    /// The request body could not be built
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ClientError {
    /// Status code of a rejected request, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Decode(error.to_string())
    }
}

/// Type alias for Result with ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
