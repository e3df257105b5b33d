#![allow(dead_code)]

use mockito::ServerGuard;
use npay_kit::{NpayClient, NpayConfig};

pub const SECRET_KEY: &str = "sk_test_4f1c9a";
pub const BEARER: &str = "Bearer sk_test_4f1c9a";

/// Starts a mock gateway and a client pointed at it.
pub async fn gateway() -> (ServerGuard, NpayClient) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let server = mockito::Server::new_async().await;
    let client = NpayClient::new(
        NpayConfig::builder()
            .base_url(server.url().parse().unwrap())
            .secret_key(SECRET_KEY)
            .build(),
    )
    .unwrap();

    (server, client)
}
