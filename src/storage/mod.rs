//! Local persistence for favorites and recent searches.
//!
//! Both stores sit on a flat key-value store where every key holds one JSON
//! document:
//!
//! ```text
//! {dir}/
//! ├── favorites.json        # array of catalog items, user order
//! └── recentSearches.json   # array of query strings, newest first
//! ```
//!
//! Each store reads and decodes the whole document before a mutation and
//! writes the whole document back after it.

pub mod favorites;
pub mod local;
pub mod memory;
pub mod recent;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

pub use favorites::FavoritesStore;
pub use local::FileStore;
pub use memory::MemoryStore;
pub use recent::RecentSearches;

/// Flat persisted key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw bytes stored under `key`, or `None` if nothing was ever written.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

/// Read a JSON document, treating a missing or undecodable value as `T::default()`.
pub(crate) async fn read_json_or_default<T>(store: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(bytes) = store.get(key).await? else {
        return Ok(T::default());
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::warn!("Ignoring unreadable value under '{key}': {e}");
            Ok(T::default())
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
pub(crate) async fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value)?;
    store.set(key, &bytes).await
}
