use npay_core::{
    payloads::PlanRequest,
    types::{AnyJson, GatewayResponse, HttpMethod, RequestSpec},
};

use crate::{client::NpayClient, errors::Result};

impl NpayClient {
    /// Lists the merchant's plans. Returns the response `data`.
    pub async fn list_plans(&self) -> Result<AnyJson> {
        Ok(self.send(RequestSpec::get("/plan")).await?.into_data())
    }

    pub async fn create_plan(&self, plan: &PlanRequest) -> Result<GatewayResponse> {
        self.send(RequestSpec::with_payload(HttpMethod::Post, "/plan", plan)?)
            .await
    }

    /// Fetches a plan by id or code.
    pub async fn fetch_plan(&self, plan_code: &str) -> Result<GatewayResponse> {
        self.send(RequestSpec::get("/plan").with_resource_id(plan_code)?).await
    }

    pub async fn update_plan(&self, plan_code: &str, plan: &PlanRequest) -> Result<GatewayResponse> {
        self.send(
            RequestSpec::with_payload(HttpMethod::Put, "/plan", plan)?
                .with_resource_id(plan_code)?,
        )
        .await
    }
}
