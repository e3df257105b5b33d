use npay_core::{
    payloads::{CreateSubscription, SubscriptionToggle},
    types::{GatewayResponse, HttpMethod, RequestSpec},
};

use crate::{client::NpayClient, errors::Result};

impl NpayClient {
    /// Subscribes a customer to a plan.
    pub async fn create_subscription(
        &self,
        subscription: &CreateSubscription,
    ) -> Result<GatewayResponse> {
        self.send(RequestSpec::with_payload(
            HttpMethod::Post,
            "/subscription",
            subscription,
        )?)
        .await
    }

    pub async fn enable_subscription(&self, toggle: &SubscriptionToggle) -> Result<GatewayResponse> {
        self.send(RequestSpec::with_payload(
            HttpMethod::Post,
            "/subscription/enable",
            toggle,
        )?)
        .await
    }

    pub async fn disable_subscription(&self, toggle: &SubscriptionToggle) -> Result<GatewayResponse> {
        self.send(RequestSpec::with_payload(
            HttpMethod::Post,
            "/subscription/disable",
            toggle,
        )?)
        .await
    }

    pub async fn fetch_subscription(&self, subscription_id: &str) -> Result<GatewayResponse> {
        self.send(RequestSpec::get("/subscription").with_resource_id(subscription_id)?)
            .await
    }
}
