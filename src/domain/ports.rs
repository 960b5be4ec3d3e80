use super::payment::{Amount, PaymentId};
use crate::error::GatewayError;
use async_trait::async_trait;
use std::sync::Arc;

/// Capability that actually moves money.
///
/// The payment module only ever talks to this trait; concrete gateways
/// (PayPal-like, card-like, crypto-like, test doubles) are injected.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` and returns the gateway-assigned payment identifier.
    ///
    /// The raw identifier is returned unvalidated; callers must reject
    /// non-positive values.
    async fn charge(&self, amount: Amount) -> Result<i64, GatewayError>;

    /// Reverses a previously charged payment.
    async fn cancel(&self, id: PaymentId) -> Result<(), GatewayError>;

    fn name(&self) -> &'static str {
        "gateway"
    }
}

pub type GatewayRef = Arc<dyn PaymentGateway>;
pub type GatewayFactory = Box<dyn Fn() -> GatewayRef + Send + Sync>;
