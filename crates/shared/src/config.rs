//! Engine configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Ledger engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Rounding configuration.
    #[serde(default)]
    pub rounding: RoundingConfig,
}

/// Rounding and tolerance configuration.
///
/// Stored amounts keep `scale` decimal places; balances with magnitude
/// below `tolerance` are treated as settled and pruned.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundingConfig {
    /// Decimal places kept on stored amounts.
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Magnitude below which a balance counts as zero.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
}

const fn default_scale() -> u32 {
    2
}

fn default_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            tolerance: default_tolerance(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Layers `config/default`, `config/{RUN_MODE}`, and
    /// `SPLITLEDGER__`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SPLITLEDGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
