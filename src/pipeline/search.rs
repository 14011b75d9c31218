// src/pipeline/search.rs

//! Upstream people search with recent-query bookkeeping.

use crate::error::{AppError, Result};
use crate::models::CatalogItem;
use crate::services::CatalogRepository;
use crate::storage::RecentSearches;

/// Drives the search screen: submitted queries go upstream, get remembered
/// in recent searches, and replace the current results.
pub struct SearchController {
    recent: RecentSearches,
    query: Option<String>,
    results: Vec<CatalogItem>,
    error: Option<String>,
}

impl SearchController {
    pub fn new(recent: RecentSearches) -> Self {
        Self {
            recent,
            query: None,
            results: Vec::new(),
            error: None,
        }
    }

    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }

    /// The last submitted query, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn results(&self) -> &[CatalogItem] {
        &self.results
    }

    /// Message from the last failed search.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Run a search for `query`.
    ///
    /// A blank query clears the results without touching the network. The
    /// query is sent and remembered exactly as given. A failed search leaves
    /// the results empty and keeps the error message.
    pub async fn submit(&mut self, repo: &dyn CatalogRepository, query: &str) -> &[CatalogItem] {
        if query.trim().is_empty() {
            self.clear();
            return &self.results;
        }

        if let Err(e) = self.recent.record(query).await {
            log::warn!("Could not remember search '{query}': {e}");
        }

        self.query = Some(query.to_string());
        match repo.search(query).await {
            Ok(items) => {
                log::info!("Search '{query}' returned {} item(s)", items.len());
                self.results = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("Search '{query}' failed: {e}");
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }
        &self.results
    }

    /// Re-run the recent search at `position`.
    pub async fn submit_recent(
        &mut self,
        repo: &dyn CatalogRepository,
        position: usize,
    ) -> Result<&[CatalogItem]> {
        let recent = self.recent.list().await?;
        let query = recent.get(position).cloned().ok_or_else(|| {
            AppError::validation(format!(
                "No recent search at position {position}"
            ))
        })?;
        Ok(self.submit(repo, &query).await)
    }

    /// Forget the current query and results.
    pub fn clear(&mut self) {
        self.query = None;
        self.results.clear();
        self.error = None;
    }
}
