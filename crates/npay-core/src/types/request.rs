use bon::Builder;
use serde::Serialize;

use crate::{
    errors::{Error, Result},
    types::{AnyJson, HttpMethod, JsonObject},
};

/// A single gateway call: where to send it, how, and with which JSON body.
///
/// ```
/// use npay_core::types::{HttpMethod, RequestSpec};
///
/// let spec = RequestSpec::builder()
///     .relative_path("/customer")
///     .method(HttpMethod::Post)
///     .build();
///
/// // POST and PUT always carry a body, `{}` when none was given.
/// assert_eq!(spec.wire_body(), Some(serde_json::Map::new()));
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// Path relative to the gateway base URL, e.g. `/api/initialize`.
    #[builder(into)]
    pub relative_path: String,
    /// Id of a single resource below `relative_path`, sent as one extra path segment.
    #[builder(into)]
    pub resource_id: Option<String>,
    pub method: HttpMethod,
    pub body: Option<JsonObject>,
}

impl RequestSpec {
    pub fn get(relative_path: impl Into<String>) -> Self {
        RequestSpec {
            relative_path: relative_path.into(),
            resource_id: None,
            method: HttpMethod::Get,
            body: None,
        }
    }

    /// Builds a request whose body is the JSON serialization of `payload`.
    ///
    /// The payload must serialize to a JSON object.
    pub fn with_payload<T: Serialize>(
        method: HttpMethod,
        relative_path: impl Into<String>,
        payload: &T,
    ) -> Result<Self> {
        let body = match serde_json::to_value(payload)? {
            AnyJson::Object(map) => map,
            other => {
                return Err(Error::SerdeJsonError(serde::ser::Error::custom(format!(
                    "request body must be a JSON object, got {other}"
                ))));
            }
        };

        Ok(RequestSpec {
            relative_path: relative_path.into(),
            resource_id: None,
            method,
            body: Some(body),
        })
    }

    /// Targets the resource `id` below the current path, e.g. `/customer` + `CUS_1`.
    ///
    /// The id is never split: a `/` inside it is encoded rather than starting a new segment.
    /// An empty id, `.` or `..` would address the parent collection and is rejected.
    pub fn with_resource_id(mut self, id: &str) -> Result<Self> {
        if matches!(id, "" | "." | "..") {
            return Err(Error::InvalidResourceId(id.to_string()));
        }
        self.resource_id = Some(id.to_string());
        Ok(self)
    }

    /// The body as it goes on the wire.
    ///
    /// An explicit body is always sent, even on `GET`. Without one, `POST` and `PUT` send
    /// an empty object and `GET` sends nothing.
    pub fn wire_body(&self) -> Option<JsonObject> {
        match &self.body {
            Some(body) => Some(body.clone()),
            None if self.method.expects_body() => Some(JsonObject::new()),
            None => None,
        }
    }
}
