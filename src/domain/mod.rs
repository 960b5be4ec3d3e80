pub mod command;
pub mod payment;
pub mod ports;
