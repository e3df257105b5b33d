use npay_core::{
    payloads::CustomerRequest,
    types::{AnyJson, GatewayResponse, HttpMethod, RequestSpec},
};

use crate::{client::NpayClient, errors::Result};

impl NpayClient {
    /// Lists the customers that have transacted with the merchant. Returns the response `data`.
    pub async fn list_customers(&self) -> Result<AnyJson> {
        Ok(self.send(RequestSpec::get("/customer")).await?.into_data())
    }

    pub async fn create_customer(&self, customer: &CustomerRequest) -> Result<GatewayResponse> {
        self.send(RequestSpec::with_payload(HttpMethod::Post, "/customer", customer)?)
            .await
    }

    /// Fetches a customer by id or code.
    pub async fn fetch_customer(&self, customer_id: &str) -> Result<GatewayResponse> {
        self.send(RequestSpec::get("/customer").with_resource_id(customer_id)?)
            .await
    }

    pub async fn update_customer(
        &self,
        customer_id: &str,
        customer: &CustomerRequest,
    ) -> Result<GatewayResponse> {
        self.send(
            RequestSpec::with_payload(HttpMethod::Put, "/customer", customer)?
                .with_resource_id(customer_id)?,
        )
        .await
    }
}
