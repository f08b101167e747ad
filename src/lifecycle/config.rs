use crate::order_service::TotalsPolicy;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub const BIND_ADDR_VAR: &str = "COFFEE_BIND_ADDR";
pub const ORDERS_FILE_VAR: &str = "COFFEE_ORDERS_FILE";
pub const STRICT_TOTALS_VAR: &str = "COFFEE_STRICT_TOTALS";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where to listen. Defaults to `0.0.0.0:8080`.
    pub bind_addr: SocketAddr,
    /// The order file. Defaults to `data/orders.json`, relative to the working directory.
    pub orders_file: PathBuf,
    pub totals: TotalsPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            orders_file: PathBuf::from("data/orders.json"),
            totals: TotalsPolicy::Trusting,
        }
    }
}

impl Config {
    /// Reads the process environment, after loading a `.env` file if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        info!(bind_addr = %config.bind_addr, orders_file = %config.orders_file.display(), totals = ?config.totals, "Config loaded");
        Ok(config)
    }

    /// Builds a config from any key/value source. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: BIND_ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(ORDERS_FILE_VAR) {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: ORDERS_FILE_VAR,
                    value,
                    reason: "path is empty".to_string(),
                });
            }
            config.orders_file = PathBuf::from(value);
        }

        if let Some(value) = lookup(STRICT_TOTALS_VAR) {
            config.totals = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => TotalsPolicy::Strict,
                "0" | "false" | "no" => TotalsPolicy::Trusting,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: STRICT_TOTALS_VAR,
                        value,
                        reason: "expected true or false".to_string(),
                    })
                }
            };
        }

        Ok(config)
    }
}
