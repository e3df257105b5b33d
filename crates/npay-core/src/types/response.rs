use serde::{Deserialize, Serialize};

use crate::{
    errors::{Error, Result},
    types::{AnyJson, JsonObject},
    verification::VerificationStatus,
};

/// A decoded gateway response body.
///
/// The gateway answers with `message` and/or `data`. Any other top-level fields are
/// kept in `extra` so the response can be handed back to callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "AnyJson::is_null")]
    pub data: AnyJson,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl GatewayResponse {
    pub fn message(&self) -> Result<&str> {
        self.message.as_deref().ok_or(Error::MissingField("message"))
    }

    /// Classifies the `message` field of a verification response.
    ///
    /// Fails if the gateway did not send a `message` at all.
    pub fn verification_status(&self) -> Result<VerificationStatus> {
        self.message().map(VerificationStatus::from_message)
    }

    /// Hosted payment page URL returned by payment initialization.
    pub fn authorization_url(&self) -> Result<&str> {
        self.data_str("authorization_url", "data.authorization_url")
    }

    pub fn access_code(&self) -> Result<&str> {
        self.data_str("access_code", "data.access_code")
    }

    pub fn reference(&self) -> Result<&str> {
        self.data_str("reference", "data.reference")
    }

    pub fn into_data(self) -> AnyJson {
        self.data
    }

    fn data_str(&self, key: &str, field: &'static str) -> Result<&str> {
        self.data
            .get(key)
            .and_then(AnyJson::as_str)
            .ok_or(Error::MissingField(field))
    }
}
