use std::fmt::Display;

use url::Url;

/// The hosted payment page a customer is sent to after a payment is initialized.
///
/// With the `axum` feature it can be returned directly from a handler, producing a
/// `303 See Other` redirect to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationUrl(Url);

impl AuthorizationUrl {
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(AuthorizationUrl)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> Url {
        self.0
    }
}

impl From<Url> for AuthorizationUrl {
    fn from(value: Url) -> Self {
        AuthorizationUrl(value)
    }
}

impl Display for AuthorizationUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AuthorizationUrl {
    fn into_response(self) -> axum::response::Response {
        axum::response::Redirect::to(self.0.as_str()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authorization_url() {
        let url = AuthorizationUrl::parse("https://pay.example/xyz").unwrap();
        assert_eq!(url.as_str(), "https://pay.example/xyz");
        assert_eq!(url.as_url().host_str(), Some("pay.example"));
        assert_eq!(url.to_string(), "https://pay.example/xyz");
    }

    #[test]
    fn test_parse_rejects_relative_url() {
        assert!(AuthorizationUrl::parse("/xyz").is_err());
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_redirects() {
        use axum::response::IntoResponse;
        use http::{StatusCode, header::LOCATION};

        let response = AuthorizationUrl::parse("https://pay.example/xyz")
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "https://pay.example/xyz"
        );
    }
}
