//! Key-value persistence behind the storefront's durable state.
//!
//! Values are stored as JSON strings under short keys. The backends are
//! interchangeable: an in-process map, a directory of JSON files, or a
//! database table. None of them coordinate concurrent writers; the last
//! write wins.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{AppConfig, StorageBackend};
use crate::db::create_orm_conn;

pub mod database;
pub mod file;
pub mod memory;
pub mod persistent;

pub use database::DbStore;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistent::PersistentState;

pub const CURRENT_USER_KEY: &str = "currentUser";
pub const CROP_LISTINGS_KEY: &str = "cropListings";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("storage io error")]
    Io(#[from] std::io::Error),

    #[error("storage database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("value could not be serialized")]
    Serialize(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    fn backend(&self) -> &'static str;
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Builds the backend selected by configuration.
pub async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::new(&config.storage_dir)),
        StorageBackend::Database => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the database backend"))?;
            Arc::new(DbStore::new(create_orm_conn(url).await?))
        }
    };
    tracing::info!(backend = store.backend(), "storage backend ready");
    Ok(store)
}
