// src/utils/url.rs

//! Endpoint URL construction.

use url::Url;

use crate::error::{AppError, Result};
use crate::models::Category;

/// `{base}/{category}/` with the trailing slash the API expects.
pub fn endpoint(base: &str, category: Category) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| AppError::invalid_request(format!("base URL '{base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::invalid_request(format!("base URL '{base}' cannot hold a path")))?
        .pop_if_empty()
        .push(category.path_segment())
        .push("");
    Ok(url)
}

/// `{base}/{category}/?page={page}`; pages are 1-based.
pub fn page_url(base: &str, category: Category, page: u32) -> Result<Url> {
    if page == 0 {
        return Err(AppError::invalid_request("page numbers start at 1"));
    }
    let mut url = endpoint(base, category)?;
    url.query_pairs_mut().append_pair("page", &page.to_string());
    Ok(url)
}

/// `{base}/people/?search={query}`; upstream search only covers people.
pub fn search_url(base: &str, query: &str) -> Result<Url> {
    let mut url = endpoint(base, Category::People)?;
    url.query_pairs_mut().append_pair("search", query);
    Ok(url)
}
