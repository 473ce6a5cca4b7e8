use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
    pub tracker: TrackerConfig,
    pub display: DisplayConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub service_fee: f64,
    pub tax_amount: f64,
    #[serde(default = "default_max_passengers")]
    pub max_passengers: usize,
}

fn default_max_passengers() -> usize {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackerConfig {
    pub refresh_interval_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// ISO code of the currency prices are shown in. LKR is the base.
    pub currency: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of LANKARAIL)
            // Eg.. `LANKARAIL_DISPLAY__CURRENCY=USD` would set `display.currency`
            .add_source(config::Environment::with_prefix("LANKARAIL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
