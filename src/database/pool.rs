//! Named handle over a wired sea-orm connection pool
//!
//! A `DatabasePool` is what the registry hands out: the generated pool name,
//! the live connection, and a snapshot of the effective settings the pool
//! was built from.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;

use crate::config::{ConfigError, PoolSettings};

/// Errors raised while wiring connection pools
#[derive(Error, Debug)]
pub enum PoolError {
    /// Loading or validating the data source configuration failed
    #[error("invalid data source configuration: {0}")]
    Config(#[from] ConfigError),

    /// Two pools resolved to the same generated name or alias
    #[error("duplicate pool name or alias '{0}'")]
    DuplicateName(String),

    /// Connecting a configured pool failed
    #[error("failed to connect data source '{name}': {source}")]
    Connect {
        name: String,
        #[source]
        source: DbErr,
    },
}

/// A wired connection pool
///
/// Cloning is cheap; the underlying connection is shared. The handle is
/// thread-safe and can be moved across tasks freely.
#[derive(Clone)]
pub struct DatabasePool {
    name: String,
    connection: Arc<DatabaseConnection>,
    settings: PoolSettings,
}

impl DatabasePool {
    pub(crate) fn new(name: String, connection: DatabaseConnection, settings: PoolSettings) -> Self {
        Self {
            name,
            connection: Arc::new(connection),
            settings,
        }
    }

    /// Generated name the pool is registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying sea-orm connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Snapshot of the effective settings the pool was built from
    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }

    /// Round-trip to the database to verify the pool is serviceable
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("name", &self.name)
            .field("max_connections", &self.settings.max_connections)
            .field("min_connections", &self.settings.min_connections)
            .finish()
    }
}
