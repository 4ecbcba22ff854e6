//! Registry of wired pools
//!
//! Built once by [`crate::wiring::PoolSetBuilder::build`] and immutable
//! afterwards. Lookups resolve generated aliases to their pool.

use std::collections::BTreeMap;

use crate::database::{DatabasePool, PoolError};
use crate::naming::DEFAULT_POOL_NAME;

/// Named set of wired connection pools
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: BTreeMap<String, DatabasePool>,
    aliases: BTreeMap<String, String>,
}

impl PoolRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a pool, optionally under an alias as well
    ///
    /// A name or alias that collides with any existing name or alias is
    /// rejected; an alias must never shadow a pool.
    pub(crate) fn insert(
        &mut self,
        pool: DatabasePool,
        alias: Option<String>,
    ) -> Result<(), PoolError> {
        let name = pool.name().to_string();
        if self.contains(&name) {
            return Err(PoolError::DuplicateName(name));
        }
        if let Some(alias) = &alias {
            if self.contains(alias) {
                return Err(PoolError::DuplicateName(alias.clone()));
            }
        }
        self.pools.insert(name.clone(), pool);
        if let Some(alias) = alias {
            self.aliases.insert(alias, name);
        }
        Ok(())
    }

    /// Look up a pool by name or alias
    pub fn get(&self, name: &str) -> Option<&DatabasePool> {
        self.pools.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|target| self.pools.get(target))
        })
    }

    /// Whether a pool or alias is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.pools.contains_key(name) || self.aliases.contains_key(name)
    }

    /// The pool registered under the default name, if any
    pub fn default_pool(&self) -> Option<&DatabasePool> {
        self.get(DEFAULT_POOL_NAME)
    }

    /// Registered pool names, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    /// Registered aliases as `(alias, pool name)` pairs, in sorted order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, name)| (alias.as_str(), name.as_str()))
    }

    /// Number of registered pools (aliases not counted)
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
