//! Classification of transaction verification results.
//!
//! The gateway reports the outcome of `GET /api/verifyTransaction/{reference}` only through
//! the English sentence in the response `message`, so classification is an exact string
//! match. Anything other than the success sentence is treated as a failed verification.

/// `message` sent by the gateway for a verified transaction. The spelling is the gateway's.
pub const TRANSACTION_SUCCESSFUL: &str = "Transaction Successfull";

/// `message` sent by the gateway for an unknown or failed reference.
pub const INVALID_TRANSACTION: &str = "Invalid Transaction";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Successful,
    InvalidTransaction,
    /// Any message the gateway is not known to send.
    Unrecognized(String),
}

impl VerificationStatus {
    pub fn from_message(message: &str) -> Self {
        match message {
            TRANSACTION_SUCCESSFUL => VerificationStatus::Successful,
            INVALID_TRANSACTION => VerificationStatus::InvalidTransaction,
            other => VerificationStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationStatus::Successful)
    }

    pub fn message(&self) -> &str {
        match self {
            VerificationStatus::Successful => TRANSACTION_SUCCESSFUL,
            VerificationStatus::InvalidTransaction => INVALID_TRANSACTION,
            VerificationStatus::Unrecognized(message) => message.as_str(),
        }
    }
}
