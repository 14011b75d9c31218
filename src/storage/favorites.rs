//! User-ordered favorites, unique by source URL.

use std::collections::HashSet;
use std::sync::Arc;

use super::{KeyValueStore, read_json_or_default, write_json};
use crate::error::{AppError, Result};
use crate::models::CatalogItem;

/// Favorites persisted under a single key.
///
/// Every mutation re-reads the stored list, applies the change and writes the
/// full list back. A failed write leaves the stored list as it was.
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current favorites in user order.
    ///
    /// Entries repeating an earlier URL are dropped; an unreadable document
    /// reads as empty.
    pub async fn list(&self) -> Result<Vec<CatalogItem>> {
        let mut items: Vec<CatalogItem> =
            read_json_or_default(self.store.as_ref(), &self.key).await?;
        let mut seen = HashSet::new();
        items.retain(|item| seen.insert(item.url().to_string()));
        Ok(items)
    }

    pub async fn contains(&self, url: &str) -> Result<bool> {
        Ok(self.list().await?.iter().any(|item| item.url() == url))
    }

    /// Remove `item` if present, otherwise append it.
    ///
    /// Returns whether the item is a favorite afterwards.
    pub async fn toggle(&self, item: &CatalogItem) -> Result<bool> {
        let mut items = self.list().await?;
        let now_favorite = match items.iter().position(|f| f.url() == item.url()) {
            Some(index) => {
                items.remove(index);
                false
            }
            None => {
                items.push(item.clone());
                true
            }
        };
        self.save(&items).await?;
        log::info!(
            "{} '{}' {} favorites",
            item.category(),
            item.display_name(),
            if now_favorite { "added to" } else { "removed from" }
        );
        Ok(now_favorite)
    }

    /// Remove the favorite at `at`, returning it.
    pub async fn remove(&self, at: usize) -> Result<CatalogItem> {
        let mut items = self.list().await?;
        Self::check_index(at, items.len())?;
        let removed = items.remove(at);
        self.save(&items).await?;
        Ok(removed)
    }

    /// Move the favorite at `from` so it ends up at `to`.
    pub async fn reorder(&self, from: usize, to: usize) -> Result<()> {
        let mut items = self.list().await?;
        Self::check_index(from, items.len())?;
        Self::check_index(to, items.len())?;
        let moved = items.remove(from);
        items.insert(to, moved);
        self.save(&items).await
    }

    async fn save(&self, items: &[CatalogItem]) -> Result<()> {
        write_json(self.store.as_ref(), &self.key, items).await
    }

    fn check_index(index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(AppError::validation(format!(
                "No favorite at position {index} ({len} saved)"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::test_utils::{person, planet};

    fn favorites() -> (FavoritesStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (FavoritesStore::new(store.clone(), "favorites"), store)
    }

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.display_name()).collect()
    }

    #[tokio::test]
    async fn test_toggle_scenario() {
        let (favs, _store) = favorites();
        let luke = person("Luke Skywalker", 1);

        assert!(favs.list().await.unwrap().is_empty());
        assert!(favs.toggle(&luke).await.unwrap());
        assert_eq!(favs.list().await.unwrap(), vec![luke.clone()]);
        assert!(favs.contains(luke.url()).await.unwrap());

        assert!(!favs.toggle(&luke).await.unwrap());
        assert!(favs.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_twice_keeps_order_of_others() {
        let (favs, _store) = favorites();
        let luke = person("Luke Skywalker", 1);
        let tatooine = planet("Tatooine", 1);
        let leia = person("Leia Organa", 5);

        favs.toggle(&luke).await.unwrap();
        favs.toggle(&tatooine).await.unwrap();
        favs.toggle(&leia).await.unwrap();

        favs.toggle(&tatooine).await.unwrap();
        favs.toggle(&tatooine).await.unwrap();
        let items = favs.list().await.unwrap();
        assert_eq!(names(&items), vec!["Luke Skywalker", "Leia Organa", "Tatooine"]);
    }

    #[tokio::test]
    async fn test_identity_is_the_url() {
        let (favs, _store) = favorites();
        favs.toggle(&person("Luke Skywalker", 1)).await.unwrap();

        // Same URL, different payload: still the same favorite.
        assert!(!favs.toggle(&person("Luke", 1)).await.unwrap());
        assert!(favs.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_and_reorder() {
        let (favs, _store) = favorites();
        for (name, id) in [("A", 1), ("B", 2), ("C", 3)] {
            favs.toggle(&person(name, id)).await.unwrap();
        }

        favs.reorder(0, 2).await.unwrap();
        assert_eq!(names(&favs.list().await.unwrap()), vec!["B", "C", "A"]);

        let removed = favs.remove(1).await.unwrap();
        assert_eq!(removed.display_name(), "C");
        assert_eq!(names(&favs.list().await.unwrap()), vec!["B", "A"]);

        assert!(matches!(favs.remove(2).await, Err(AppError::Validation(_))));
        assert!(favs.reorder(0, 5).await.is_err());
        assert_eq!(names(&favs.list().await.unwrap()), vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_write_failure_leaves_state_unchanged() {
        let (favs, store) = favorites();
        let luke = person("Luke Skywalker", 1);
        favs.toggle(&luke).await.unwrap();

        store.set_simulate_write_error(true);
        assert!(matches!(
            favs.toggle(&planet("Hoth", 4)).await,
            Err(AppError::Storage { .. })
        ));
        assert!(favs.remove(0).await.is_err());
        assert_eq!(favs.list().await.unwrap(), vec![luke]);
    }

    #[tokio::test]
    async fn test_corrupted_value_reads_empty() {
        let (favs, store) = favorites();
        store.set("favorites", b"not json").await.unwrap();

        assert!(favs.list().await.unwrap().is_empty());
        assert!(favs.toggle(&person("Han Solo", 14)).await.unwrap());
        assert_eq!(favs.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_urls_collapse_on_read() {
        let (favs, store) = favorites();
        let luke = person("Luke Skywalker", 1);
        let doc = serde_json::to_vec(&vec![luke.clone(), planet("Tatooine", 1), luke]).unwrap();
        store.set("favorites", &doc).await.unwrap();

        let items = favs.list().await.unwrap();
        assert_eq!(names(&items), vec!["Luke Skywalker", "Tatooine"]);
    }

    #[tokio::test]
    async fn test_persists_across_instances() {
        let store = Arc::new(MemoryStore::new());
        FavoritesStore::new(store.clone(), "favorites")
            .toggle(&person("Leia Organa", 5))
            .await
            .unwrap();

        let reopened = FavoritesStore::new(store, "favorites");
        assert_eq!(names(&reopened.list().await.unwrap()), vec!["Leia Organa"]);
    }
}
