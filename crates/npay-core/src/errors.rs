#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid HTTP method: '{0}'")]
    InvalidMethod(String),

    #[error("Secure random source error: {0}")]
    RandomSource(String),

    #[error("Invalid resource id: '{0}'")]
    InvalidResourceId(String),

    #[error("Missing field in gateway response: {0}")]
    MissingField(&'static str),

    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
