use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default ceiling for a single payment, in minor currency units.
pub const DEFAULT_MAX_AMOUNT: u64 = 100_000;

/// Gateway-assigned identifier of a payment.
///
/// Always positive. The payment module never mints these itself, it only
/// accepts what a gateway returned from a successful charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(u64);

impl PaymentId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Validates a raw identifier coming back from a gateway.
impl TryFrom<i64> for PaymentId {
    type Error = PaymentError;

    fn try_from(raw: i64) -> Result<Self> {
        if raw > 0 {
            Ok(Self(raw as u64))
        } else {
            Err(PaymentError::InvalidGatewayId(raw))
        }
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positive payment amount in minor currency units.
///
/// Bounded above by the module's configured ceiling at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub fn new(value: i64, limit: u64) -> Result<Self> {
        if value <= 0 {
            return Err(PaymentError::InvalidAmount(value));
        }
        if value as u64 > limit {
            return Err(PaymentError::AmountTooLarge {
                amount: value,
                limit,
            });
        }
        Ok(Self(value as u64))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of one accepted payment.
///
/// `description` and `amount` never change after creation; `cancelled` only
/// ever goes from `false` to `true`.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PaymentRecord {
    pub description: String,
    pub amount: Amount,
    pub cancelled: bool,
}

impl PaymentRecord {
    pub fn new(description: String, amount: Amount) -> Self {
        Self {
            description,
            amount,
            cancelled: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }

    /// Marks the payment cancelled (Active -> Cancelled).
    pub(crate) fn mark_cancelled(&mut self, id: PaymentId) -> Result<()> {
        if self.cancelled {
            return Err(PaymentError::AlreadyCancelled(id));
        }
        self.cancelled = true;
        Ok(())
    }
}
