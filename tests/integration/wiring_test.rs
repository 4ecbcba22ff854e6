//! Wiring flow tests: mode selection, naming, aliasing and collisions

use seapool::{PoolError, PoolSetBuilder};

use super::{sqlite_overrides, sqlite_settings};

#[tokio::test]
async fn test_single_mode_registers_exactly_one_default_pool() {
    let registry = PoolSetBuilder::new(sqlite_settings())
        .build()
        .await
        .unwrap();

    assert_eq!(registry.len(), 1);
    let pool = registry.default_pool().expect("default pool");
    assert_eq!(pool.name(), "dataSource");
    pool.ping().await.expect("pool is serviceable");
}

#[tokio::test]
async fn test_dynamic_mode_registers_one_pool_per_entry() {
    let mut settings = sqlite_settings();
    settings.base.url.clear();
    settings
        .data_sources
        .insert("primary".to_string(), sqlite_overrides());
    settings
        .data_sources
        .insert("read-replica".to_string(), sqlite_overrides());

    let registry = PoolSetBuilder::new(settings).build().await.unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec!["primary", "readReplica"]
    );

    // Each pool is reachable under its name and its generated alias
    assert!(registry.get("primary").is_some());
    assert!(registry.get("primaryDataSource").is_some());
    assert!(registry.get("readReplica").is_some());
    assert!(registry.get("readReplicaDataSource").is_some());

    // No default pool exists in dynamic mode
    assert!(registry.default_pool().is_none());

    for name in ["primary", "readReplica"] {
        registry.get(name).unwrap().ping().await.expect("ping");
    }
}

#[tokio::test]
async fn test_suffixed_key_gets_no_alias() {
    let mut settings = sqlite_settings();
    settings.base.url.clear();
    settings
        .data_sources
        .insert("legacy_data_source".to_string(), sqlite_overrides());

    let registry = PoolSetBuilder::new(settings).build().await.unwrap();

    assert!(registry.get("legacyDataSource").is_some());
    assert_eq!(registry.aliases().count(), 0);
}

#[tokio::test]
async fn test_named_pools_inherit_base_settings() {
    let mut settings = sqlite_settings();
    settings.base.url.clear();
    settings.base.max_connections = 42;
    settings
        .data_sources
        .insert("primary".to_string(), sqlite_overrides());

    let registry = PoolSetBuilder::new(settings).build().await.unwrap();

    let pool = registry.get("primary").unwrap();
    assert_eq!(pool.settings().max_connections, 42);
}

#[tokio::test]
async fn test_colliding_generated_names_abort_wiring() {
    let mut settings = sqlite_settings();
    settings.base.url.clear();
    // Distinct keys, identical camelCase conversion
    settings
        .data_sources
        .insert("read-replica".to_string(), sqlite_overrides());
    settings
        .data_sources
        .insert("read_replica".to_string(), sqlite_overrides());

    let err = PoolSetBuilder::new(settings).build().await.unwrap_err();
    assert!(matches!(err, PoolError::DuplicateName(name) if name == "readReplica"));
}

#[tokio::test]
async fn test_alias_colliding_with_pool_name_aborts_wiring() {
    let mut settings = sqlite_settings();
    settings.base.url.clear();
    // "primary" generates the alias "primaryDataSource", which the second
    // key then claims as its pool name
    settings
        .data_sources
        .insert("primary".to_string(), sqlite_overrides());
    settings
        .data_sources
        .insert("primary-data-source".to_string(), sqlite_overrides());

    let err = PoolSetBuilder::new(settings).build().await.unwrap_err();
    assert!(matches!(err, PoolError::DuplicateName(name) if name == "primaryDataSource"));
}

#[tokio::test]
async fn test_named_pool_without_url_is_rejected() {
    let mut settings = sqlite_settings();
    settings.base.url.clear();
    settings
        .data_sources
        .insert("primary".to_string(), Default::default());

    let err = PoolSetBuilder::new(settings).build().await.unwrap_err();
    assert!(matches!(err, PoolError::Config(_)));
}

#[tokio::test]
async fn test_lazy_pool_is_wired_without_connecting() {
    let mut settings = sqlite_settings();
    // A URL nothing listens on; wiring must still succeed lazily
    settings.base.url = "sqlite://this/path/does/not/exist.db".to_string();
    settings.base.connect_lazy = true;

    let registry = PoolSetBuilder::new(settings).build().await.unwrap();
    assert_eq!(registry.len(), 1);
}
