//! # Npay Kit
//!
//! An async client for the Npay payment gateway. It initializes payments, verifies
//! transactions and manages customers, plans, subscriptions and payment pages.
//!
//! ```no_run
//! use npay_kit::{NpayClient, NpayConfig, payloads::InitializePayment};
//!
//! # async fn run() -> Result<(), npay_kit::ClientError> {
//! let client = NpayClient::new(
//!     NpayConfig::builder()
//!         .base_url("https://api.npay.example".parse()?)
//!         .secret_key("sk_live_xxx")
//!         .build(),
//! )?;
//!
//! let reference = client.generate_reference()?;
//! let payment = InitializePayment::builder()
//!     .amount(500)
//!     .email("buyer@example.com")
//!     .reference(reference.clone())
//!     .build();
//!
//! let redirect_to = client.authorization_url(&payment).await?;
//! println!("send the customer to {redirect_to}");
//!
//! // Later, once the gateway calls back:
//! let payment_data = client.payment_data(reference.as_str()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): debug logs for outgoing requests and verification outcomes.
//! - `axum`: lets [`AuthorizationUrl`] be returned from handlers as a redirect.

mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod redirect;

pub use npay_core::{Error as CoreError, payloads, reference, types, verification};

pub use client::NpayClient;
pub use config::NpayConfig;
pub use errors::ClientError;
pub use redirect::AuthorizationUrl;
