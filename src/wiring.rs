//! Pool wiring
//!
//! Turns a [`DataSourceSettings`] tree into a [`PoolRegistry`]. The wiring
//! runs once at startup: it selects the mode, derives the pool names, binds
//! settings, runs customizers and connects each pool in turn.

use std::sync::Arc;

use sea_orm::Database;

use crate::config::{self, ConfigError, DataSourceSettings, PoolSettings, Validate};
use crate::customizer::PoolCustomizer;
use crate::database::{DatabasePool, PoolError};
use crate::naming::{DEFAULT_POOL_NAME, alias_for, separated_to_camel};
use crate::registry::PoolRegistry;

/// Wiring mode selected from the configuration
///
/// Any entry under `data_sources` selects [`WiringMode::Dynamic`]; an empty
/// map selects [`WiringMode::Single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiringMode {
    /// One pool, registered under the fixed default name
    Single,
    /// One pool per configured entry, named from its configuration key
    Dynamic,
}

impl WiringMode {
    /// Inspect the configuration and pick the registration path
    pub fn select(settings: &DataSourceSettings) -> Self {
        if settings.data_sources.is_empty() {
            WiringMode::Single
        } else {
            WiringMode::Dynamic
        }
    }
}

/// Builder that wires configured pools into a registry
///
/// # Example
///
/// ```no_run
/// use sea_orm::ConnectOptions;
/// use seapool::{PoolError, PoolSetBuilder};
///
/// # async fn example() -> Result<(), PoolError> {
/// let registry = PoolSetBuilder::from_env()?
///     .customize(|_name: &str, options: &mut ConnectOptions| {
///         options.sqlx_logging(false);
///     })
///     .build()
///     .await?;
///
/// let pool = registry.default_pool();
/// # Ok(())
/// # }
/// ```
pub struct PoolSetBuilder {
    settings: DataSourceSettings,
    customizers: Vec<Arc<dyn PoolCustomizer>>,
}

impl PoolSetBuilder {
    /// Wire from already-loaded settings
    pub fn new(settings: DataSourceSettings) -> Self {
        Self {
            settings,
            customizers: Vec::new(),
        }
    }

    /// Wire from layered configuration files and environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(config::load()?))
    }

    /// Register a customizer
    ///
    /// Customizers run once per pool, in registration order, after the
    /// configured settings have been bound and before the pool connects.
    pub fn customize(mut self, customizer: impl PoolCustomizer + 'static) -> Self {
        self.customizers.push(Arc::new(customizer));
        self
    }

    /// Construct and register every configured pool
    #[tracing::instrument(skip(self), fields(
        mode = ?WiringMode::select(&self.settings),
        data_sources = self.settings.data_sources.len(),
        customizers = self.customizers.len()
    ))]
    pub async fn build(self) -> Result<PoolRegistry, PoolError> {
        self.settings.validate()?;

        let mut registry = PoolRegistry::new();
        match WiringMode::select(&self.settings) {
            WiringMode::Single => self.register_single(&mut registry).await?,
            WiringMode::Dynamic => self.register_dynamic(&mut registry).await?,
        }
        Ok(registry)
    }

    async fn register_single(&self, registry: &mut PoolRegistry) -> Result<(), PoolError> {
        tracing::info!(name = DEFAULT_POOL_NAME, "single data source init");
        let pool = self
            .build_pool(DEFAULT_POOL_NAME, self.settings.base.clone())
            .await?;
        registry.insert(pool, None)
    }

    async fn register_dynamic(&self, registry: &mut PoolRegistry) -> Result<(), PoolError> {
        for (key, overrides) in &self.settings.data_sources {
            let name = separated_to_camel(key);
            let alias = alias_for(&name);
            tracing::info!(key, name, alias = alias.as_deref(), "dynamic data source init");
            let pool = self
                .build_pool(&name, overrides.resolve(&self.settings.base))
                .await?;
            registry.insert(pool, alias)?;
        }
        Ok(())
    }

    /// Bind, customize and connect one pool
    async fn build_pool(
        &self,
        name: &str,
        settings: PoolSettings,
    ) -> Result<DatabasePool, PoolError> {
        let mut options = settings.connect_options();
        for customizer in &self.customizers {
            customizer.customize(name, &mut options);
        }

        let connection = Database::connect(options).await.map_err(|source| {
            PoolError::Connect {
                name: name.to_string(),
                source,
            }
        })?;

        tracing::debug!(
            name,
            max_connections = settings.max_connections,
            min_connections = settings.min_connections,
            connect_lazy = settings.connect_lazy,
            "data source pool connected"
        );
        Ok(DatabasePool::new(name.to_string(), connection, settings))
    }
}
