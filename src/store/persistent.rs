use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use super::{KeyValueStore, StoreError};

/// A value bound to a storage key.
///
/// Construction reads the key and falls back to the supplied default when it
/// is missing or unreadable. Every change is written to the store before the
/// in-memory copy is replaced, so a failed write leaves the value as it was.
pub struct PersistentState<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    value: Mutex<T>,
}

impl<T> PersistentState<T>
where
    T: Serialize + DeserializeOwned + Clone + Send,
{
    /// Never fails: corrupted entries are removed and replaced by `default`.
    pub async fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = match store.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    tracing::debug!(key = %key, "restored persisted state");
                    value
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "discarding corrupted persisted state");
                    if let Err(err) = store.remove(&key).await {
                        tracing::warn!(key = %key, error = %err, "failed to remove corrupted entry");
                    }
                    default
                }
            },
            Ok(None) => default,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "persisted state unreadable, using default");
                default
            }
        };

        Self {
            store,
            key,
            value: Mutex::new(value),
        }
    }

    pub async fn get(&self) -> T {
        self.value.lock().await.clone()
    }

    pub async fn set(&self, value: T) -> Result<(), StoreError> {
        let mut current = self.value.lock().await;
        self.write(&value).await?;
        *current = value;
        Ok(())
    }

    /// Applies `f` to a copy of the value, persists the copy, then commits it.
    pub async fn update<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut current = self.value.lock().await;
        let mut next = current.clone();
        let out = f(&mut next);
        self.write(&next).await?;
        *current = next;
        Ok(out)
    }

    /// Like [`update`](Self::update), but `f` may reject the change. On `Err`
    /// nothing is written and the value stays as it was.
    pub async fn try_update<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
        E: From<StoreError>,
    {
        let mut current = self.value.lock().await;
        let mut next = current.clone();
        let out = f(&mut next)?;
        self.write(&next).await?;
        *current = next;
        Ok(out)
    }

    async fn write(&self, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(&self.key, &raw).await?;
        tracing::debug!(key = %self.key, bytes = raw.len(), "persisted state written");
        Ok(())
    }
}
