pub mod datasource;

pub use datasource::{DataSourceSettings, LogLevel, PoolOverrides, PoolSettings};

use std::path::Path;

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or deserializing a configuration source failed
    #[error("failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// A loaded value violates a documented constraint
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
}

/// Validation hook implemented by every settings struct
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Construct a settings struct populated with its documented defaults
pub trait WithDefaults {
    fn with_defaults() -> Self;
}

/// Load the data source configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. Environment variables: SEAPOOL__MAX_CONNECTIONS=20
/// 2. config/local.toml (git-ignored, developer overrides)
/// 3. config/{APP_ENV}.toml (development/staging/production)
/// 4. config/default.toml (base defaults)
pub fn load() -> Result<DataSourceSettings, ConfigError> {
    load_from(Path::new("config"))
}

/// Load the data source configuration from layered files rooted at `base`
///
/// Same layering as [`load`], with the file sources resolved relative to
/// `base` instead of the `config/` directory.
pub fn load_from(base: &Path) -> Result<DataSourceSettings, ConfigError> {
    use config::{Config, Environment, File};

    // Determine the environment
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let source = |name: &str| File::with_name(&base.join(name).display().to_string());

    // Build configuration with layered sources
    let config = Config::builder()
        // Layer 1: Base defaults
        .add_source(source("default").required(false))
        // Layer 2: Environment-specific overrides
        .add_source(source(&env).required(false))
        // Layer 3: Local developer overrides (git-ignored)
        .add_source(source("local").required(false))
        // Layer 4: Environment variables (highest precedence)
        .add_source(Environment::with_prefix("SEAPOOL").separator("__"))
        .build()?;

    // Deserialize into DataSourceSettings
    let settings: DataSourceSettings = config.try_deserialize()?;

    // Validate the configuration
    settings.validate()?;

    Ok(settings)
}
