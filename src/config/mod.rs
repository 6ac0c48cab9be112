//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ROLLOUT_CONSOLE_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use rollout_console::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod features;
mod pricing;
mod scorecard;
mod server;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use pricing::PricingConfig;
pub use scorecard::ScorecardConfig;
pub use server::{ServerConfig, MAX_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// console on port 8080 without a scorecard source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener address, log filter, timeout and CORS
    #[serde(default)]
    pub server: ServerConfig,

    /// Cost simulator defaults
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Maturity scorecard source and parsing mode
    #[serde(default)]
    pub scorecard: ScorecardConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ROLLOUT_CONSOLE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ROLLOUT_CONSOLE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ROLLOUT_CONSOLE__PRICING__DEFAULT_DISCOUNT=40%` -> `pricing.default_discount = Tier40`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ROLLOUT_CONSOLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.pricing.validate()?;
        self.scorecard.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cost_model::DiscountTier;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "ROLLOUT_CONSOLE__SERVER__PORT",
        "ROLLOUT_CONSOLE__SERVER__CORS_ORIGINS",
        "ROLLOUT_CONSOLE__PRICING__DEFAULT_STORE_COUNT",
        "ROLLOUT_CONSOLE__PRICING__DEFAULT_DISCOUNT",
        "ROLLOUT_CONSOLE__SCORECARD__QUESTIONNAIRE_PATH",
        "ROLLOUT_CONSOLE__SCORECARD__STRICT",
        "ROLLOUT_CONSOLE__FEATURES__JSON_LOGS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pricing.default_store_count, 1000);
        assert!(config.scorecard.questionnaire_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.features.enable_tracing);
    }

    #[test]
    fn test_cors_origins_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var(
            "ROLLOUT_CONSOLE__SERVER__CORS_ORIGINS",
            "http://localhost:5173,https://console.example.com",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.server.allowed_origins(),
            vec!["http://localhost:5173", "https://console.example.com"]
        );
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("ROLLOUT_CONSOLE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_pricing_and_scorecard_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("ROLLOUT_CONSOLE__PRICING__DEFAULT_STORE_COUNT", "250");
        env::set_var("ROLLOUT_CONSOLE__PRICING__DEFAULT_DISCOUNT", "tier55");
        env::set_var("ROLLOUT_CONSOLE__SCORECARD__QUESTIONNAIRE_PATH", "/data/scorecard.json");
        env::set_var("ROLLOUT_CONSOLE__SCORECARD__STRICT", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.pricing.default_store_count, 250);
        assert_eq!(config.pricing.default_discount, DiscountTier::Tier55);
        assert_eq!(
            config.scorecard.questionnaire_path.as_deref(),
            Some(std::path::Path::new("/data/scorecard.json"))
        );
        assert!(config.scorecard.strict);
    }

    #[test]
    fn test_validate_rejects_bad_pricing() {
        let mut config = AppConfig::default();
        config.pricing.default_store_count = -1;
        assert_eq!(config.validate(), Err(ValidationError::InvalidStoreCount));
    }
}
