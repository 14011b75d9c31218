//! Bounded list of recent search queries, newest first.

use std::sync::Arc;

use super::{KeyValueStore, read_json_or_default, write_json};
use crate::error::{AppError, Result};

/// Default number of remembered queries.
pub const DEFAULT_RECENT_SEARCH_LIMIT: usize = 5;

/// Recent searches persisted under a single key.
#[derive(Clone)]
pub struct RecentSearches {
    store: Arc<dyn KeyValueStore>,
    key: String,
    limit: usize,
}

impl RecentSearches {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, limit: usize) -> Self {
        Self {
            store,
            key: key.into(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Remembered queries, most recent first.
    pub async fn list(&self) -> Result<Vec<String>> {
        read_json_or_default(self.store.as_ref(), &self.key).await
    }

    /// Remember `query`.
    ///
    /// Queries are kept verbatim and compared by exact match. Blank queries
    /// and queries already in the list leave it untouched; a repeated query
    /// keeps its old position. Returns whether the list changed.
    pub async fn record(&self, query: &str) -> Result<bool> {
        if query.trim().is_empty() {
            return Ok(false);
        }

        let mut queries = self.list().await?;
        if queries.iter().any(|q| q == query) {
            return Ok(false);
        }

        queries.insert(0, query.to_string());
        queries.truncate(self.limit);
        write_json(self.store.as_ref(), &self.key, &queries).await?;
        log::debug!("Recorded recent search '{query}' ({} kept)", queries.len());
        Ok(true)
    }

    /// Forget the query at `at`, returning it.
    pub async fn remove(&self, at: usize) -> Result<String> {
        let mut queries = self.list().await?;
        if at >= queries.len() {
            return Err(AppError::validation(format!(
                "No recent search at position {at} ({} saved)",
                queries.len()
            )));
        }
        let removed = queries.remove(at);
        write_json(self.store.as_ref(), &self.key, &queries).await?;
        Ok(removed)
    }
}
