//! Miscellaneous common types used throughout the Npay codebase.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Represents any JSON value. Used for the free-form `data` and `metadata` fields.
pub type AnyJson = serde_json::Value;

/// A JSON object, the shape of every request body sent to the gateway.
pub type JsonObject = serde_json::Map<String, AnyJson>;

/// HTTP methods the gateway API uses.
///
/// Parsing is case-insensitive. Empty or unknown methods are rejected with
/// [`Error::InvalidMethod`].
///
/// ```
/// use npay_core::types::HttpMethod;
///
/// assert_eq!("post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
/// assert!("".parse::<HttpMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    /// Whether requests with this method carry a JSON body even when the caller supplied none.
    pub fn expects_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

impl TryFrom<&str> for HttpMethod {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for HttpMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HttpMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
