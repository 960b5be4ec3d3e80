use crate::config::Config;
use crate::domain::payment::{Amount, PaymentId, PaymentRecord};
use crate::domain::ports::GatewayRef;
use crate::error::{PaymentError, Result};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::Mutex;

/// Tracks payments made through an injected [`PaymentGateway`].
///
/// `PaymentModule` exclusively owns the `PaymentId -> PaymentRecord` mapping.
/// Every public operation holds the state lock for its whole duration,
/// gateway call included, so `pay` and `cancel` are atomic even when the
/// module is shared between tasks.
///
/// [`PaymentGateway`]: crate::domain::ports::PaymentGateway
pub struct PaymentModule {
    gateway: GatewayRef,
    max_amount: u64,
    payments: Mutex<BTreeMap<PaymentId, PaymentRecord>>,
}

/// Builder for [`PaymentModule`].
#[derive(Default)]
pub struct PaymentModuleBuilder {
    gateway: Option<GatewayRef>,
    config: Config,
}

impl PaymentModuleBuilder {
    pub fn gateway(mut self, gateway: GatewayRef) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn max_amount(mut self, max_amount: u64) -> Self {
        self.config.max_amount = max_amount;
        self
    }

    /// Fails with [`PaymentError::InvalidArgument`] when no gateway was set
    /// or the amount ceiling is zero.
    pub fn build(self) -> Result<PaymentModule> {
        let gateway = self.gateway.ok_or_else(|| {
            PaymentError::InvalidArgument("payment gateway cannot be absent".to_string())
        })?;
        if self.config.max_amount == 0 {
            return Err(PaymentError::InvalidArgument(
                "maximum amount must be positive".to_string(),
            ));
        }
        Ok(PaymentModule {
            gateway,
            max_amount: self.config.max_amount,
            payments: Mutex::new(BTreeMap::new()),
        })
    }
}

impl PaymentModule {
    /// Creates an empty module bound to `gateway` with the default ceiling.
    pub fn new(gateway: GatewayRef) -> Self {
        Self {
            gateway,
            max_amount: Config::default().max_amount,
            payments: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn builder() -> PaymentModuleBuilder {
        PaymentModuleBuilder::default()
    }

    pub fn max_amount(&self) -> u64 {
        self.max_amount
    }

    pub fn gateway_name(&self) -> &'static str {
        self.gateway.name()
    }

    /// Charges `amount` through the gateway and records the payment.
    ///
    /// Validation runs in a fixed order: amount sign, amount ceiling, then
    /// description. No record is created on any failure path.
    pub async fn pay(&self, description: &str, amount: i64) -> Result<PaymentId> {
        let amount = Amount::new(amount, self.max_amount)?;
        if description.is_empty() {
            return Err(PaymentError::InvalidArgument(
                "description cannot be empty".to_string(),
            ));
        }

        let mut payments = self.payments.lock().await;

        let raw_id = self
            .gateway
            .charge(amount)
            .await
            .map_err(PaymentError::PaymentFailed)?;
        let id = PaymentId::try_from(raw_id)?;

        match payments.entry(id) {
            Entry::Occupied(_) => Err(PaymentError::DuplicateId(id)),
            Entry::Vacant(slot) => {
                slot.insert(PaymentRecord::new(description.to_string(), amount));
                Ok(id)
            }
        }
    }

    /// Cancels a tracked payment.
    ///
    /// All-or-nothing: if the gateway refuses, the record stays active and
    /// the call may be retried.
    pub async fn cancel(&self, id: PaymentId) -> Result<()> {
        let mut payments = self.payments.lock().await;

        let record = payments.get_mut(&id).ok_or(PaymentError::NotFound(id))?;
        if record.cancelled {
            return Err(PaymentError::AlreadyCancelled(id));
        }

        self.gateway
            .cancel(id)
            .await
            .map_err(PaymentError::CannotCancel)?;

        record.mark_cancelled(id)
    }

    pub async fn info(&self, id: PaymentId) -> Result<PaymentRecord> {
        let payments = self.payments.lock().await;
        payments.get(&id).cloned().ok_or(PaymentError::NotFound(id))
    }

    /// Returns a snapshot of every record, ordered by identifier.
    pub async fn info_all(&self) -> BTreeMap<PaymentId, PaymentRecord> {
        self.payments.lock().await.clone()
    }

    /// Sum of the amounts of all payments that are not cancelled.
    ///
    /// Widened to `u128` so any number of payments at any ceiling fits.
    pub async fn balance(&self) -> u128 {
        let payments = self.payments.lock().await;
        payments
            .values()
            .filter(|record| record.is_active())
            .map(|record| u128::from(record.amount.value()))
            .sum()
    }

    pub async fn len(&self) -> usize {
        self.payments.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.payments.lock().await.is_empty()
    }
}
