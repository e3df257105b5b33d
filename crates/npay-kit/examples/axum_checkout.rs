use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::StatusCode;
use npay_kit::{AuthorizationUrl, ClientError, NpayClient, NpayConfig, payloads::InitializePayment};
use serde_json::{Value, json};

#[derive(serde::Deserialize)]
struct Checkout {
    email: String,
    amount: i64,
}

#[derive(serde::Deserialize)]
struct Callback {
    trxref: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let client = NpayClient::new(
        NpayConfig::builder()
            .base_url(
                std::env::var("NPAY_PAYMENT_URL")
                    .expect("NPAY_PAYMENT_URL not set")
                    .parse()
                    .expect("Invalid NPAY_PAYMENT_URL"),
            )
            .secret_key(std::env::var("NPAY_SECRET_KEY").expect("NPAY_SECRET_KEY not set"))
            .build(),
    )
    .expect("Invalid Npay configuration");

    let app = Router::new()
        .route("/checkout", post(checkout))
        .route("/npay/callback", get(callback))
        .with_state(client);

    tracing::info!("Listening on http://0.0.0.0:3000");
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Starts a payment and redirects the customer to the hosted payment page.
async fn checkout(
    State(client): State<NpayClient>,
    Json(checkout): Json<Checkout>,
) -> Result<AuthorizationUrl, ErrorResponse> {
    let reference = client.generate_reference()?;
    tracing::info!("Starting payment {}", reference);

    let payment = InitializePayment::builder()
        .amount(checkout.amount)
        .email(checkout.email)
        .reference(reference)
        .callback_url("http://localhost:3000/npay/callback")
        .build();

    Ok(client.authorization_url(&payment).await?)
}

/// The gateway sends the customer back here with the transaction reference.
async fn callback(
    State(client): State<NpayClient>,
    Query(callback): Query<Callback>,
) -> Result<Json<Value>, ErrorResponse> {
    let payment = client.payment_data(&callback.trxref).await?;
    tracing::info!("Payment {} verified", callback.trxref);

    // Fulfil the order here...

    Ok(Json(json!({ "paid": true, "data": payment.data })))
}

struct ErrorResponse(ClientError);

impl From<ClientError> for ErrorResponse {
    fn from(err: ClientError) -> Self {
        ErrorResponse(err)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ClientError::VerificationFailed { .. } => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::BAD_GATEWAY,
        };
        tracing::error!("Npay request failed: {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
