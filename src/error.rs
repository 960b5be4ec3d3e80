use crate::domain::payment::PaymentId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid amount {0}: must be positive")]
    InvalidAmount(i64),
    #[error("amount {amount} exceeds maximum limit of {limit}")]
    AmountTooLarge { amount: i64, limit: u64 },
    #[error("payment processing failed: {0}")]
    PaymentFailed(#[source] GatewayError),
    #[error("payment not found: ID {0}")]
    NotFound(PaymentId),
    #[error("payment already cancelled: ID {0}")]
    AlreadyCancelled(PaymentId),
    #[error("cannot cancel payment: {0}")]
    CannotCancel(#[source] GatewayError),
    #[error("invalid payment ID returned by gateway: {0}")]
    InvalidGatewayId(i64),
    #[error("gateway reused payment ID {0}")]
    DuplicateId(PaymentId),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

/// Failure reported by a payment gateway.
///
/// The payment module never inspects these; it only wraps them in
/// [`PaymentError::PaymentFailed`] or [`PaymentError::CannotCancel`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("declined: {0}")]
    Declined(String),
    #[error("gateway unavailable: {0}")]
    Unavailable(String),
    #[error("unknown payment ID {0}")]
    UnknownPayment(PaymentId),
    #[error("payment {0} is irreversible")]
    Irreversible(PaymentId),
}
