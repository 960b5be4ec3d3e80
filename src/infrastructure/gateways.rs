//! Demo gateways used by the CLI.
//!
//! None of these talk to a real network; they simulate the behaviour of the
//! payment providers they are named after closely enough to exercise every
//! error path of the payment module.

use super::mock::MockGateway;
use crate::domain::payment::{Amount, PaymentId};
use crate::domain::ports::{GatewayFactory, GatewayRef, PaymentGateway};
use crate::error::GatewayError;
use async_trait::async_trait;
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Selects one of the bundled gateways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    #[default]
    Mock,
    Paypal,
    Card,
    Crypto,
}

impl GatewayKind {
    pub fn build(self) -> GatewayRef {
        match self {
            GatewayKind::Mock => Arc::new(MockGateway::new()),
            GatewayKind::Paypal => Arc::new(PayPalGateway::new()),
            GatewayKind::Card => Arc::new(CardGateway::new()),
            GatewayKind::Crypto => Arc::new(CryptoGateway::new()),
        }
    }

    pub fn factory(self) -> GatewayFactory {
        Box::new(move || self.build())
    }
}

/// Identifiers a gateway has handed out, so that it can refuse to cancel
/// anything it never charged.
#[derive(Default)]
struct IssuedIds {
    ids: RwLock<HashSet<PaymentId>>,
}

impl IssuedIds {
    async fn record(&self, raw: i64) {
        if let Ok(id) = PaymentId::try_from(raw) {
            self.ids.write().await.insert(id);
        }
    }

    async fn contains(&self, id: PaymentId) -> bool {
        self.ids.read().await.contains(&id)
    }

    async fn contains_raw(&self, raw: i64) -> bool {
        match PaymentId::try_from(raw) {
            Ok(id) => self.contains(id).await,
            Err(_) => false,
        }
    }

    async fn remove(&self, id: PaymentId) -> bool {
        self.ids.write().await.remove(&id)
    }
}

/// PayPal-like wallet: always accepts, numbers transactions from 1000.
pub struct PayPalGateway {
    next_id: AtomicI64,
    issued: IssuedIds,
}

impl Default for PayPalGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PayPalGateway {
    pub const FIRST_ID: i64 = 1000;

    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(Self::FIRST_ID),
            issued: IssuedIds::default(),
        }
    }
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    async fn charge(&self, amount: Amount) -> Result<i64, GatewayError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.issued.record(id).await;
        info!(gateway = "paypal", id, amount = amount.value(), "charged");
        Ok(id)
    }

    async fn cancel(&self, id: PaymentId) -> Result<(), GatewayError> {
        if !self.issued.remove(id).await {
            warn!(gateway = "paypal", %id, "refund for unknown transaction");
            return Err(GatewayError::UnknownPayment(id));
        }
        info!(gateway = "paypal", %id, "refunded");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "paypal"
    }
}

/// Card processor that declines anything above the card's limit.
pub struct CardGateway {
    limit: u64,
    next_id: AtomicI64,
    issued: IssuedIds,
}

impl Default for CardGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGateway {
    pub const DEFAULT_LIMIT: u64 = 50_000;

    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit,
            next_id: AtomicI64::new(1),
            issued: IssuedIds::default(),
        }
    }
}

#[async_trait]
impl PaymentGateway for CardGateway {
    async fn charge(&self, amount: Amount) -> Result<i64, GatewayError> {
        if amount.value() > self.limit {
            warn!(gateway = "card", amount = amount.value(), limit = self.limit, "declined");
            return Err(GatewayError::Declined(format!(
                "card limit of {} exceeded",
                self.limit
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.issued.record(id).await;
        info!(gateway = "card", id, amount = amount.value(), "charged");
        Ok(id)
    }

    async fn cancel(&self, id: PaymentId) -> Result<(), GatewayError> {
        if !self.issued.remove(id).await {
            return Err(GatewayError::UnknownPayment(id));
        }
        info!(gateway = "card", %id, "charge reversed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "card"
    }
}

/// Crypto transfer: random transaction numbers, and settled transfers can
/// never be reversed.
#[derive(Default)]
pub struct CryptoGateway {
    issued: IssuedIds,
}

impl CryptoGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

fn random_tx_number() -> i64 {
    rand::thread_rng().gen_range(1..=i64::from(u32::MAX))
}

#[async_trait]
impl PaymentGateway for CryptoGateway {
    async fn charge(&self, amount: Amount) -> Result<i64, GatewayError> {
        let mut id = random_tx_number();
        while self.issued.contains_raw(id).await {
            debug!(gateway = "crypto", id, "transaction number collision");
            id = random_tx_number();
        }
        self.issued.record(id).await;
        info!(gateway = "crypto", id, amount = amount.value(), "transfer broadcast");
        Ok(id)
    }

    async fn cancel(&self, id: PaymentId) -> Result<(), GatewayError> {
        if !self.issued.contains(id).await {
            return Err(GatewayError::UnknownPayment(id));
        }
        Err(GatewayError::Irreversible(id))
    }

    fn name(&self) -> &'static str {
        "crypto"
    }
}
