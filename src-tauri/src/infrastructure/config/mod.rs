use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use figment::providers::{Env, Serialized};
use figment::Figment;
use tracing::warn;
use validator::Validate;

pub const ENV_PREFIX: &str = "QUICKTRAY_";

/// Provider settings: built-in defaults overridden by `QUICKTRAY_*`
/// environment variables (e.g. `QUICKTRAY_MODEL`, `QUICKTRAY_TIMEOUT_SECS`).
pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(LLMConfig::default())).merge(Env::prefixed(ENV_PREFIX))
}

pub fn extract_llm_config(figment: &Figment) -> Result<LLMConfig> {
    let config: LLMConfig = figment
        .extract()
        .map_err(|e| AppError::ConfigError(e.to_string()))?;
    config
        .validate()
        .map_err(|e| AppError::ConfigError(e.to_string()))?;
    Ok(config)
}

/// Loads the provider configuration, reading a `.env` file first when one is
/// present. Invalid overrides are reported and replaced by the defaults.
pub fn load_llm_config() -> LLMConfig {
    let _ = dotenvy::dotenv();

    match extract_llm_config(&figment()) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "Invalid provider configuration, using defaults");
            LLMConfig::default()
        }
    }
}
