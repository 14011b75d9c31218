// src/services/catalog.rs

//! HTTP-backed catalog repository.
//!
//! Owns transport details only: URL construction, status mapping and JSON
//! decoding into tagged catalog records.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::CatalogRepository;
use crate::error::{AppError, Result};
use crate::models::{ApiConfig, CatalogItem, Category, decode_page};
use crate::utils::http::create_async_client;
use crate::utils::url::{page_url, search_url};

/// Catalog repository talking to the public API over HTTP.
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = create_async_client(config)?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET round trip, decoded under `category`.
    async fn get_page(&self, url: Url, category: Category) -> Result<Vec<CatalogItem>> {
        log::debug!("GET {url}");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} returned HTTP {}", status.as_u16());
            return Err(AppError::server(status.as_u16()));
        }

        let body = response.bytes().await?;
        let page = decode_page(category, &body).inspect_err(|e| {
            log::warn!("GET {url}: {e}");
        })?;

        log::debug!(
            "GET {url}: {} item(s) of {} total",
            page.results.len(),
            page.count
        );
        Ok(page.results)
    }
}

#[async_trait]
impl CatalogRepository for HttpCatalogClient {
    async fn fetch_page(&self, category: Category, page: u32) -> Result<Vec<CatalogItem>> {
        let url = page_url(&self.base_url, category, page)?;
        self.get_page(url, category).await
    }

    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>> {
        let url = search_url(&self.base_url, query)?;
        self.get_page(url, Category::People).await
    }
}
