//! Paged response envelope.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{CatalogItem, Category, Film, Person, Planet, Species, Starship, Vehicle};
use crate::error::{AppError, Result};

/// `{count, next, previous, results}` as returned by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PageEnvelope<T> {
    fn map<U>(self, f: impl FnMut(T) -> U) -> PageEnvelope<U> {
        PageEnvelope {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

/// Decode a response body, tagging every record with `category`.
///
/// Records are not self-describing upstream, so the category the request was
/// made under decides which record shape is expected.
pub fn decode_page(category: Category, body: &[u8]) -> Result<PageEnvelope<CatalogItem>> {
    match category {
        Category::People => decode_as::<Person>(body, CatalogItem::Person),
        Category::Planets => decode_as::<Planet>(body, CatalogItem::Planet),
        Category::Films => decode_as::<Film>(body, CatalogItem::Film),
        Category::Species => decode_as::<Species>(body, CatalogItem::Species),
        Category::Vehicles => decode_as::<Vehicle>(body, CatalogItem::Vehicle),
        Category::Starships => decode_as::<Starship>(body, CatalogItem::Starship),
    }
}

fn decode_as<T: DeserializeOwned>(
    body: &[u8],
    wrap: fn(T) -> CatalogItem,
) -> Result<PageEnvelope<CatalogItem>> {
    let envelope: PageEnvelope<T> = serde_json::from_slice(body).map_err(AppError::decode)?;
    Ok(envelope.map(wrap))
}
