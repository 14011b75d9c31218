//! Random character pick.

use rand::Rng;

use super::CatalogRepository;
use crate::error::Result;
use crate::models::{CatalogItem, Category};

/// Fetch a random people page in `1..=max_page` and pick one item from it.
///
/// An empty page yields `None`; fetch errors propagate.
pub async fn surprise_me<R: Rng + ?Sized>(
    repo: &dyn CatalogRepository,
    rng: &mut R,
    max_page: u32,
) -> Result<Option<CatalogItem>> {
    let page = rng.random_range(1..=max_page.max(1));
    let mut items = repo.fetch_page(Category::People, page).await?;
    if items.is_empty() {
        log::info!("Surprise page {page} was empty");
        return Ok(None);
    }

    let index = rng.random_range(0..items.len());
    log::debug!("Surprise picked item {index} of page {page}");
    Ok(Some(items.swap_remove(index)))
}
