pub mod gateways;
pub mod mock;
