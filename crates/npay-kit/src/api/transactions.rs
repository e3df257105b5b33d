use npay_core::{
    payloads::ExportTransactions,
    types::{AnyJson, GatewayResponse, HttpMethod, RequestSpec},
};

use crate::{client::NpayClient, errors::Result};

impl NpayClient {
    /// Lists all transactions. Returns the response `data`.
    pub async fn list_transactions(&self) -> Result<AnyJson> {
        Ok(self.send(RequestSpec::get("/transaction")).await?.into_data())
    }

    /// Requests a CSV export of transactions. The filter travels as a JSON body on the `GET`.
    pub async fn export_transactions(&self, filter: &ExportTransactions) -> Result<GatewayResponse> {
        self.send(RequestSpec::with_payload(
            HttpMethod::Get,
            "/transaction/export",
            filter,
        )?)
        .await
    }
}
