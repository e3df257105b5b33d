use npay_core::{
    payloads::PageRequest,
    types::{GatewayResponse, HttpMethod, RequestSpec},
};

use crate::{client::NpayClient, errors::Result};

impl NpayClient {
    /// Creates a payment page that can be shared through its returned slug.
    pub async fn create_page(&self, page: &PageRequest) -> Result<GatewayResponse> {
        self.send(RequestSpec::with_payload(HttpMethod::Post, "/page", page)?)
            .await
    }

    pub async fn list_pages(&self) -> Result<GatewayResponse> {
        self.send(RequestSpec::get("/page")).await
    }

    /// Fetches a page by id or slug.
    pub async fn fetch_page(&self, page_id: &str) -> Result<GatewayResponse> {
        self.send(RequestSpec::get("/page").with_resource_id(page_id)?).await
    }

    pub async fn update_page(&self, page_id: &str, page: &PageRequest) -> Result<GatewayResponse> {
        self.send(
            RequestSpec::with_payload(HttpMethod::Put, "/page", page)?
                .with_resource_id(page_id)?,
        )
        .await
    }
}
