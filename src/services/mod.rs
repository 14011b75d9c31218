//! Service layer for the archives library.
//!
//! This module contains:
//! - The catalog repository seam (`CatalogRepository`) and its HTTP client
//! - Background fetch dispatch back to a single consumer (`FetchDispatcher`)
//! - The random "surprise me" pick (`surprise_me`)

mod catalog;
mod dispatch;
mod surprise;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CatalogItem, Category};

pub use catalog::HttpCatalogClient;
pub use dispatch::FetchDispatcher;
pub use surprise::surprise_me;

/// Read access to the remote catalog.
///
/// Every call is a single attempt; failures surface to the caller without
/// retry.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch one 1-based page of a category. Items come back tagged with
    /// `category`.
    async fn fetch_page(&self, category: Category, page: u32) -> Result<Vec<CatalogItem>>;

    /// Search people by name. Items come back tagged as people.
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>>;
}
