//! Request bodies for the gateway operations.
//!
//! Optional fields left unset are omitted from the serialized body rather than sent as
//! `null`.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{reference::TransactionReference, types::AnyJson};

/// Body of `POST /api/initialize`.
///
/// ```
/// use npay_core::payloads::InitializePayment;
/// use serde_json::json;
///
/// let payment = InitializePayment::builder()
///     .amount(500)
///     .email("buyer@example.com")
///     .callback_url("https://shop.example/npay/callback")
///     .build();
///
/// assert_eq!(
///     serde_json::to_value(&payment).unwrap(),
///     json!({
///         "amount": 500,
///         "email": "buyer@example.com",
///         "callbackUrl": "https://shop.example/npay/callback"
///     })
/// );
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializePayment {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<TransactionReference>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[builder(into)]
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[builder(into)]
    #[serde(rename = "callbackUrl", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnyJson>,
}

/// Body of `POST /customer` and `PUT /customer/{id}`.
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRequest {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form key/value pairs attached to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnyJson>,
}

/// Body of `POST /plan` and `PUT /plan/{code}`.
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Billing interval, e.g. `monthly`.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invoices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_sms: Option<bool>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Body of `GET /transaction/export`.
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportTransactions {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled: Option<bool>,
}

/// Body of `POST /subscription`.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscription {
    /// Customer email or code.
    #[builder(into)]
    pub customer: String,
    /// Plan code.
    #[builder(into)]
    pub plan: String,
    /// Authorization code of a previous charge.
    #[builder(into)]
    pub authorization: String,
}

/// Body of `POST /subscription/enable` and `POST /subscription/disable`.
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionToggle {
    /// Subscription code.
    #[builder(into)]
    pub code: String,
    /// Email token.
    #[builder(into)]
    pub token: String,
}

/// Body of `POST /page` and `PUT /page/{id}`.
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}
