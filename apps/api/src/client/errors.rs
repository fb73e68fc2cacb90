use thiserror::Error;

/// Errors surfaced by the client side of the API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected locally; no request was sent
    #[error("{0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
