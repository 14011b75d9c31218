//! Wiring of the repository and local stores.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Category, Config};
use crate::pipeline::{ListController, SearchController};
use crate::services::{CatalogRepository, HttpCatalogClient};
use crate::storage::{FavoritesStore, FileStore, KeyValueStore, RecentSearches};

/// Everything a presentation layer needs, built once and passed around.
#[derive(Clone)]
pub struct ArchivesContext {
    pub config: Arc<Config>,
    pub repository: Arc<dyn CatalogRepository>,
    pub favorites: FavoritesStore,
    pub recent: RecentSearches,
}

impl ArchivesContext {
    /// HTTP repository plus file-backed stores under `config.storage.dir`.
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let repository: Arc<dyn CatalogRepository> = Arc::new(HttpCatalogClient::new(&config.api)?);
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.storage.dir));
        log::debug!(
            "Using {} with storage at {}",
            config.api.base_url,
            config.storage.dir.display()
        );
        Ok(Self::with_parts(config, repository, store))
    }

    /// Assemble from an arbitrary repository and key-value store.
    pub fn with_parts(
        config: Config,
        repository: Arc<dyn CatalogRepository>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let favorites = FavoritesStore::new(Arc::clone(&store), config.storage.favorites_key.clone());
        let recent = RecentSearches::new(
            store,
            config.storage.recent_searches_key.clone(),
            config.browse.recent_search_limit,
        );
        Self {
            config: Arc::new(config),
            repository,
            favorites,
            recent,
        }
    }

    /// A fresh list controller for `category` using the configured threshold.
    pub fn list(&self, category: Category) -> ListController {
        ListController::with_threshold(category, self.config.browse.load_more_threshold)
    }

    /// A search controller sharing this context's recent searches.
    pub fn search(&self) -> SearchController {
        SearchController::new(self.recent.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::test_utils::{FakeRepository, people, person};

    fn context(repo: FakeRepository) -> ArchivesContext {
        let mut config = Config::default();
        config.browse.recent_search_limit = 2;
        ArchivesContext::with_parts(config, Arc::new(repo), Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_controllers_share_stores() {
        let repo = FakeRepository::new()
            .with_page(Category::People, 1, people(1, 3))
            .with_search("luke", vec![person("Luke Skywalker", 1)]);
        let ctx = context(repo);

        let mut list = ctx.list(Category::People);
        list.load_next_now(ctx.repository.as_ref()).await;
        ctx.favorites.toggle(&list.items()[1]).await.unwrap();
        assert!(ctx.favorites.contains(list.items()[1].url()).await.unwrap());

        let mut search = ctx.search();
        search.submit(ctx.repository.as_ref(), "luke").await;
        assert_eq!(ctx.recent.list().await.unwrap(), vec!["luke"]);
    }

    #[tokio::test]
    async fn test_recent_limit_comes_from_config() {
        let ctx = context(FakeRepository::new());
        for query in ["a", "b", "c"] {
            ctx.recent.record(query).await.unwrap();
        }
        assert_eq!(ctx.recent.list().await.unwrap(), vec!["c", "b"]);
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(ArchivesContext::from_config(config).is_err());
    }
}
