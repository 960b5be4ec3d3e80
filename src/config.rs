//! Runtime configuration for the payment module and the CLI driver.

use crate::domain::payment::DEFAULT_MAX_AMOUNT;
use crate::error::Result;
use crate::infrastructure::gateways::GatewayKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings loaded from an optional JSON file.
///
/// Every field falls back to its default when missing, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Largest amount accepted by a single `pay`, in minor units.
    #[serde(default = "config_defaults::max_amount")]
    pub max_amount: u64,
    /// Gateway used by the CLI when `--gateway` is not given.
    #[serde(default)]
    pub gateway: GatewayKind,
}

mod config_defaults {
    use super::DEFAULT_MAX_AMOUNT;

    pub fn max_amount() -> u64 {
        DEFAULT_MAX_AMOUNT
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_amount: DEFAULT_MAX_AMOUNT,
            gateway: GatewayKind::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
