use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// No response was received (DNS, connect, timeout).
    #[error("api.transport: {0}")]
    Transport(String),
    #[error("api.status_{status}: {message}")]
    Api { status: u16, message: String },
    #[error("api.decode: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("store.unauthenticated")]
    Unauthenticated,
    #[error(transparent)]
    Api(#[from] ApiError),
}
