//! Configuration management for the Fish Ledger engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with LEDGER_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Current environment (development, production)
    pub environment: String,

    /// Pending-bill alert thresholds
    pub alerts: AlertConfig,

    /// Stock display thresholds
    pub stock: StockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertConfig {
    /// Hours before a pending walk-in bill raises an alert
    pub walk_in_hours: i64,

    /// Hours before a pending hotel bill raises an alert
    pub hotel_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StockConfig {
    /// Stock level (kg) below which an item counts as low stock
    pub low_stock_kg: Decimal,
}

impl EngineConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("LEDGER_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("alerts.walk_in_hours", 5)?
            .set_default("alerts.hotel_hours", 48)?
            .set_default("stock.low_stock_kg", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (LEDGER prefix)
            .add_source(
                Environment::with_prefix("LEDGER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            alerts: AlertConfig {
                walk_in_hours: 5,
                hotel_hours: 48,
            },
            stock: StockConfig {
                low_stock_kg: Decimal::from(10),
            },
        }
    }
}
