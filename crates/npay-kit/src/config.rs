use std::{fmt::Debug, time::Duration};

use bon::Builder;
use url::Url;

/// Gateway connection configuration.
///
/// Supplied by the host application; the client never reads configuration on its own.
///
/// ```
/// use std::time::Duration;
/// use npay_kit::NpayConfig;
///
/// let config = NpayConfig::builder()
///     .base_url("https://api.npay.example".parse().unwrap())
///     .secret_key("sk_test_123")
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert!(!format!("{config:?}").contains("sk_test_123"));
/// ```
#[derive(Builder, Clone)]
pub struct NpayConfig {
    /// Gateway base URL. Request paths are appended to it.
    pub base_url: Url,
    /// Secret API key, sent as a bearer token.
    #[builder(into)]
    pub secret_key: String,
    /// Total timeout per request. No timeout when unset.
    pub timeout: Option<Duration>,
    /// Timeout for establishing connections. No timeout when unset.
    pub connect_timeout: Option<Duration>,
}

impl Debug for NpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NpayConfig")
            .field("base_url", &self.base_url.as_str())
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
