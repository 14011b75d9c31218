//! Test doubles shared across module tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{CatalogItem, Category, Person, Planet};
use crate::services::CatalogRepository;

pub fn person(name: &str, id: u32) -> CatalogItem {
    CatalogItem::Person(Person {
        name: name.to_string(),
        url: format!("https://swapi.dev/api/people/{id}/"),
        ..Person::default()
    })
}

pub fn planet(name: &str, id: u32) -> CatalogItem {
    CatalogItem::Planet(Planet {
        name: name.to_string(),
        url: format!("https://swapi.dev/api/planets/{id}/"),
        ..Planet::default()
    })
}

/// `count` people numbered from `first_id`.
pub fn people(first_id: u32, count: u32) -> Vec<CatalogItem> {
    (first_id..first_id + count)
        .map(|id| person(&format!("Person {id}"), id))
        .collect()
}

enum Scripted {
    Items(Vec<CatalogItem>),
    Status(u16),
}

/// Repository answering from scripted pages; unscripted pages are empty.
#[derive(Default)]
pub struct FakeRepository {
    pages: Mutex<HashMap<(Category, u32), Scripted>>,
    searches: Mutex<HashMap<String, Scripted>>,
    page_requests: AtomicUsize,
    search_requests: AtomicUsize,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, category: Category, page: u32, items: Vec<CatalogItem>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert((category, page), Scripted::Items(items));
        self
    }

    pub fn with_failing_page(self, category: Category, page: u32, status: u16) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert((category, page), Scripted::Status(status));
        self
    }

    pub fn with_search(self, query: &str, items: Vec<CatalogItem>) -> Self {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), Scripted::Items(items));
        self
    }

    pub fn with_failing_search(self, query: &str, status: u16) -> Self {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), Scripted::Status(status));
        self
    }

    pub fn page_requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }

    pub fn search_requests(&self) -> usize {
        self.search_requests.load(Ordering::SeqCst)
    }

    fn answer(scripted: Option<&Scripted>) -> Result<Vec<CatalogItem>> {
        match scripted {
            Some(Scripted::Items(items)) => Ok(items.clone()),
            Some(Scripted::Status(status)) => Err(AppError::server(*status)),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl CatalogRepository for FakeRepository {
    async fn fetch_page(&self, category: Category, page: u32) -> Result<Vec<CatalogItem>> {
        self.page_requests.fetch_add(1, Ordering::SeqCst);
        let pages = self.pages.lock().unwrap();
        Self::answer(pages.get(&(category, page)))
    }

    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>> {
        self.search_requests.fetch_add(1, Ordering::SeqCst);
        let searches = self.searches.lock().unwrap();
        Self::answer(searches.get(query))
    }
}
