#![deny(warnings)]

//! Declarative auto-wiring for sea-orm connection pools
//!
//! Applications declare one or many pools purely through configuration
//! instead of hand-written construction code. An empty `data_sources` map
//! wires a single pool under the fixed name `dataSource`; named entries
//! wire one pool each, registered under a camelCase conversion of the key
//! plus a `DataSource`-suffixed alias. Per-pool settings inherit the base
//! section, and registered customizers get the last word before each pool
//! connects.
//!
//! ```toml
//! # config/default.toml — single pool
//! url = "postgres://app@db/main"
//! max_connections = 20
//! ```
//!
//! ```toml
//! # config/default.toml — named pools
//! max_connections = 20            # inherited by every pool
//!
//! [data_sources.primary]
//! url = "postgres://app@db/main"
//!
//! [data_sources.read-replica]    # registered as readReplica + readReplicaDataSource
//! url = "postgres://app@replica/main"
//! max_connections = 50
//! ```

// Re-export all public modules
pub mod config;
pub mod customizer;
pub mod database;
pub mod naming;
pub mod registry;
pub mod wiring;

// Re-export commonly used types for convenience
pub use customizer::PoolCustomizer;
pub use database::{DatabasePool, PoolError};
pub use registry::PoolRegistry;
pub use wiring::{PoolSetBuilder, WiringMode};
