use crate::domain::payment::{Amount, PaymentId};
use crate::domain::ports::PaymentGateway;
use crate::error::GatewayError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// A scriptable gateway that hands out sequential identifiers starting at 1.
///
/// Charges and cancellations succeed until a failure is scripted with
/// [`MockGateway::fail_charges`] or [`MockGateway::fail_cancels`]. Call
/// counters let tests assert whether the gateway was reached at all.
pub struct MockGateway {
    next_id: AtomicI64,
    charge_calls: AtomicUsize,
    cancel_calls: AtomicUsize,
    charge_failure: Mutex<Option<GatewayError>>,
    cancel_failure: Mutex<Option<GatewayError>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            charge_calls: AtomicUsize::new(0),
            cancel_calls: AtomicUsize::new(0),
            charge_failure: Mutex::new(None),
            cancel_failure: Mutex::new(None),
        }
    }

    /// Makes the next charge return `id`; later charges continue from `id + 1`.
    pub fn set_next_id(&self, id: i64) {
        self.next_id.store(id, Ordering::SeqCst);
    }

    pub fn fail_charges(&self, error: GatewayError) {
        *self.charge_failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    pub fn fail_cancels(&self, error: GatewayError) {
        *self.cancel_failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    /// Clears every scripted failure.
    pub fn recover(&self) {
        *self.charge_failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
        *self.cancel_failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn charge_calls(&self) -> usize {
        self.charge_calls.load(Ordering::SeqCst)
    }

    pub fn cancel_calls(&self) -> usize {
        self.cancel_calls.load(Ordering::SeqCst)
    }

    fn scripted(slot: &Mutex<Option<GatewayError>>) -> Option<GatewayError> {
        slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn charge(&self, _amount: Amount) -> Result<i64, GatewayError> {
        self.charge_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = Self::scripted(&self.charge_failure) {
            return Err(error);
        }
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn cancel(&self, _id: PaymentId) -> Result<(), GatewayError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);
        match Self::scripted(&self.cancel_failure) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
