//! Application layer containing the payment tracking logic.
//!
//! This module defines the `PaymentModule`, which owns every payment record and
//! delegates money movement to an injected gateway, and a small driver that
//! maps parsed commands onto the module's operations.

pub mod driver;
pub mod module;
