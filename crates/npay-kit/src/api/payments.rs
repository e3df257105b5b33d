use npay_core::{
    payloads::InitializePayment,
    reference::{TokenGenerator, TransactionReference},
    types::{GatewayResponse, HttpMethod, RequestSpec},
    verification::VerificationStatus,
};

use crate::{
    client::NpayClient,
    errors::{ClientError, Result},
    redirect::AuthorizationUrl,
};

impl NpayClient {
    /// Initializes a payment.
    ///
    /// The response `data` carries `authorization_url`, `access_code` and `reference`; see
    /// the accessors on [`GatewayResponse`].
    pub async fn initialize_payment(&self, payment: &InitializePayment) -> Result<GatewayResponse> {
        self.send(RequestSpec::with_payload(
            HttpMethod::Post,
            "/api/initialize",
            payment,
        )?)
        .await
    }

    /// Initializes a payment and returns the hosted payment page to redirect the customer to.
    pub async fn authorization_url(&self, payment: &InitializePayment) -> Result<AuthorizationUrl> {
        let response = self.initialize_payment(payment).await?;
        Ok(AuthorizationUrl::parse(response.authorization_url()?)?)
    }

    /// Fetches the gateway's verification record for `reference`.
    pub async fn verify_transaction(&self, reference: &str) -> Result<GatewayResponse> {
        self.send(RequestSpec::get("/api/verifyTransaction").with_resource_id(reference)?)
        .await
    }

    /// Whether the gateway reports the transaction as successful.
    ///
    /// Only the exact success message counts; any other message is `false`. A response
    /// without a `message` is an error.
    pub async fn is_transaction_verification_valid(&self, reference: &str) -> Result<bool> {
        let (status, _) = self.verification(reference).await?;
        Ok(status.is_valid())
    }

    /// Returns the full verification response if the transaction verified, and
    /// [`ClientError::VerificationFailed`] otherwise.
    pub async fn payment_data(&self, reference: &str) -> Result<GatewayResponse> {
        let (status, response) = self.verification(reference).await?;
        if status.is_valid() {
            return Ok(response);
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Rejected payment data for reference '{}': {:?}",
            reference,
            status
        );

        Err(ClientError::VerificationFailed {
            reference: reference.to_string(),
            message: status.message().to_string(),
        })
    }

    /// Generates a fresh 30 symbol transaction reference.
    ///
    /// References are not checked for uniqueness against earlier ones.
    pub fn generate_reference(&self) -> Result<TransactionReference> {
        Ok(TokenGenerator::new().generate_default()?)
    }

    async fn verification(&self, reference: &str) -> Result<(VerificationStatus, GatewayResponse)> {
        let response = self.verify_transaction(reference).await?;
        let status = response.verification_status()?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Verification of '{}': {:?}", reference, status);

        Ok((status, response))
    }
}
