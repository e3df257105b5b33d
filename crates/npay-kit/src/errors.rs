use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Core(#[from] npay_core::Error),

    #[error("Transaction verification failed for reference '{reference}': {message}")]
    VerificationFailed { reference: String, message: String },

    #[error("HTTP request error: {0}")]
    HttpRequestError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Base URL cannot have a path appended: {0}")]
    InvalidBaseUrl(Url),

    #[error("Secret key is not a valid header value: {0}")]
    InvalidSecretKey(#[from] http::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, ClientError>;
