//! Application configuration management.

use std::collections::HashMap;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding the per-firm/per-year data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Firm header details.
    #[serde(default)]
    pub firm: FirmConfig,
    /// Depreciation rate overrides, block type to fractional rate.
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Firm details used on report headers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirmConfig {
    /// Firm name.
    #[serde(default)]
    pub name: String,
    /// Firm address.
    #[serde(default)]
    pub address: String,
    /// Financial year label, e.g. "1-APR-2024 TO 31-MAR-2025".
    #[serde(default)]
    pub financial_year: String,
}

impl AppConfig {
    /// Loads configuration from config files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINSTAT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            firm: FirmConfig::default(),
            rates: HashMap::new(),
        }
    }
}
