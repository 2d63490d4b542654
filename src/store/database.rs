use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use super::{KeyValueStore, StoreError};
use crate::entity::kv_entries::{ActiveModel, Column, Entity as KvEntries};

/// Rows of the `kv_entries` table, one per key.
#[derive(Debug, Clone)]
pub struct DbStore {
    orm: DatabaseConnection,
}

impl DbStore {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}

#[async_trait]
impl KeyValueStore for DbStore {
    fn backend(&self) -> &'static str {
        "database"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let row = KvEntries::find_by_id(key.to_string()).one(&self.orm).await?;
        Ok(row.map(|r| r.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let active = ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(Utc::now().into()),
        };
        KvEntries::insert(active)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.orm)
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        KvEntries::delete_by_id(key.to_string())
            .exec(&self.orm)
            .await?;
        Ok(())
    }
}
