//! Layered configuration loading
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults for the detected environment
//! 2. `config/default.toml`
//! 3. `config/{environment}.toml`
//! 4. `FITTRACK__*` environment variables, e.g. `FITTRACK__AUTH__JWT__SECRET`
//!
//! Environment values are kept as strings; numeric fields such as
//! `hash_cost` are converted during deserialization, so all-digit secrets
//! keep their exact text.
//!
//! A `.env` file is loaded into the process environment first.

use std::path::Path;

use ::config::{Config, Environment as EnvSource, File};
use ft_shared::config::{AppConfig, Environment};

use crate::error::InfraError;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "FITTRACK";

/// Nesting separator of configuration environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Directory searched for configuration files
pub const CONFIG_DIR: &str = "config";

/// Load configuration for the environment named by `ENVIRONMENT`/`ENV`/`RUST_ENV`
pub fn load_config() -> Result<AppConfig, InfraError> {
    dotenvy::dotenv().ok();
    load_config_from(Path::new(CONFIG_DIR), Environment::from_env())
}

/// Load configuration from files in `dir` for an explicit environment
pub fn load_config_from(dir: &Path, environment: Environment) -> Result<AppConfig, InfraError> {
    let defaults = AppConfig::for_environment(environment);

    let settings = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name(&path_of(dir, "default")).required(false))
        .add_source(File::with_name(&path_of(dir, environment.config_name())).required(false))
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate().map_err(InfraError::InvalidConfig)?;

    tracing::debug!(environment = %config.environment, "Configuration loaded");
    Ok(config)
}

fn path_of(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}
