//! Key-value storage implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStorageCapability;
use crate::db::{self, DbPool};
use crate::error::{Error, Result};

/// Key-value storage in the SQLite `preferences` table.
#[derive(Debug, Clone)]
pub struct SqliteKeyValueStore {
    db: DbPool,
}

impl SqliteKeyValueStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KeyValueStorageCapability for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        db::get_preference(&self.db, key)
            .await
            .map_err(|e| Error::Persistence(format!("Failed to read '{}': {}", key, e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        db::set_preference(&self.db, key, value)
            .await
            .map_err(|e| Error::Persistence(format!("Failed to write '{}': {}", key, e)))
    }
}

/// Process-local key-value storage. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorageCapability for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_store() {
        let pool = db::init_pool(":memory:").await.unwrap();
        db::initialize_schema(&pool).await.unwrap();
        let store = SqliteKeyValueStore::new(pool);

        assert_eq!(store.get("photos").await.unwrap(), None);
        store.set("photos", "[]").await.unwrap();
        assert_eq!(store.get("photos").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_sqlite_store_without_schema_is_persistence_error() {
        let pool = db::init_pool(":memory:").await.unwrap();
        let store = SqliteKeyValueStore::new(pool);

        let err = store.set("photos", "[]").await.unwrap_err();
        assert_eq!(err.error_code(), "PERSISTENCE_ERROR");
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryKeyValueStore::new();
        store.set("photos", "[1]").await.unwrap();
        store.set("photos", "[2]").await.unwrap();
        assert_eq!(store.get("photos").await.unwrap().as_deref(), Some("[2]"));
        assert_eq!(store.get("other").await.unwrap(), None);
    }
}
