use http::{
    HeaderMap, HeaderValue, Method,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use npay_core::types::{GatewayResponse, HttpMethod, JsonObject, RequestSpec};
use url::Url;

use crate::{
    config::NpayConfig,
    errors::{ClientError, Result},
};

/// An Npay gateway client that communicates over HTTP.
///
/// The underlying HTTP client, with its bearer credentials, is built once and shared by
/// clones, so a single `NpayClient` can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct NpayClient {
    base_url: Url,
    client: reqwest::Client,
}

impl NpayClient {
    pub fn new(config: NpayConfig) -> Result<Self> {
        if config.base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.base_url));
        }

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.secret_key))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(NpayClient {
            base_url: config.base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a request whose method is given by name, e.g. `"POST"`.
    ///
    /// An empty or unknown method fails with [`npay_core::Error::InvalidMethod`] before
    /// anything is sent.
    pub async fn request(
        &self,
        relative_path: &str,
        method: &str,
        body: Option<JsonObject>,
    ) -> Result<GatewayResponse> {
        let method: HttpMethod = method.parse()?;

        self.send(RequestSpec {
            relative_path: relative_path.to_string(),
            resource_id: None,
            method,
            body,
        })
        .await
    }

    /// Sends a request to the gateway and decodes the JSON response body.
    ///
    /// The HTTP status is not inspected: whatever JSON the gateway answers with is returned.
    /// Transport failures and bodies that are not JSON surface as
    /// [`ClientError::HttpRequestError`].
    pub async fn send(&self, spec: RequestSpec) -> Result<GatewayResponse> {
        let url = self.url_for(&spec.relative_path, spec.resource_id.as_deref())?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Sending {} {}", spec.method, url);

        let mut request = self.client.request(http_method(spec.method), url);
        if let Some(body) = spec.wire_body() {
            request = request.json(&body);
        }

        let response = request.send().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Gateway responded with status {}", response.status());

        Ok(response.json().await?)
    }

    /// Appends the segments of `relative_path` to the base URL, then `resource_id` as a
    /// single segment. Every segment is percent-encoded.
    pub(crate) fn url_for(&self, relative_path: &str, resource_id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.clone()))?;
            segments
                .pop_if_empty()
                .extend(relative_path.split('/').filter(|segment| !segment.is_empty()));
            if let Some(id) = resource_id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

fn http_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
    }
}
