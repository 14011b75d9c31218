// src/pipeline/list.rs

//! Paginated category browsing.
//!
//! A [`ListController`] is a small state machine:
//!
//! ```text
//! Idle ──load_next──▶ Loading ──┬─ N > 0 ──▶ Idle (cursor + 1)
//!   ▲                           ├─ N = 0 ──▶ Exhausted (until refresh)
//!   └──── load_next/refresh ────┴─ error ──▶ Failed(message)
//! ```
//!
//! Starting a load and applying its result are separate steps so the fetch
//! can run elsewhere (see [`FetchDispatcher`](crate::services::FetchDispatcher))
//! while the controller stays owned by a single consumer. Each request carries
//! the controller's generation; `refresh` bumps it, so a response that lands
//! after a refresh is discarded instead of applied.

use crate::error::Result;
use crate::models::{CatalogItem, Category};
use crate::services::CatalogRepository;

use super::scroll::ScrollPosition;

/// Default distance from the end of the content that triggers "load more".
pub const DEFAULT_LOAD_MORE_THRESHOLD: f64 = 100.0;

/// Where the controller is in its load cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Exhausted,
    /// Last fetch failed; holds the message for the presentation layer
    Failed(String),
}

/// A page request handed out by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub category: Category,
    pub page: u32,
    pub generation: u64,
}

impl PendingFetch {
    /// Perform the request against `repo`.
    pub async fn run(self, repo: &dyn CatalogRepository) -> FetchOutcome {
        let result = repo.fetch_page(self.category, self.page).await;
        FetchOutcome {
            request: self,
            result,
        }
    }
}

/// A completed page request, ready to be applied.
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: PendingFetch,
    pub result: Result<Vec<CatalogItem>>,
}

/// What applying an outcome did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Items were appended and the cursor advanced
    Appended(usize),
    /// The page was empty; no further pages will be requested
    Exhausted,
    /// The fetch failed; state is `Failed`
    Failed,
    /// The outcome belonged to an earlier generation and was dropped
    Stale,
}

/// Accumulates pages of one category.
#[derive(Debug)]
pub struct ListController {
    category: Category,
    items: Vec<CatalogItem>,
    next_page: u32,
    state: LoadState,
    generation: u64,
    load_more_threshold: f64,
}

impl ListController {
    pub fn new(category: Category) -> Self {
        Self::with_threshold(category, DEFAULT_LOAD_MORE_THRESHOLD)
    }

    pub fn with_threshold(category: Category, load_more_threshold: f64) -> Self {
        Self {
            category,
            items: Vec::new(),
            next_page: 1,
            state: LoadState::Idle,
            generation: 0,
            load_more_threshold,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Everything fetched so far, in page order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The page the next `load_next` will request.
    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == LoadState::Exhausted
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start loading the next page.
    ///
    /// Returns `None` while a load is in flight or once exhausted. From
    /// `Failed` this acts as a retry of the same page.
    pub fn load_next(&mut self) -> Option<PendingFetch> {
        match self.state {
            LoadState::Loading | LoadState::Exhausted => None,
            LoadState::Idle | LoadState::Failed(_) => {
                self.state = LoadState::Loading;
                log::debug!(
                    "{}: requesting page {} (generation {})",
                    self.category,
                    self.next_page,
                    self.generation
                );
                Some(PendingFetch {
                    category: self.category,
                    page: self.next_page,
                    generation: self.generation,
                })
            }
        }
    }

    /// Drop everything fetched and start again from page 1.
    pub fn refresh(&mut self) -> Option<PendingFetch> {
        self.items.clear();
        self.next_page = 1;
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Idle;
        self.load_next()
    }

    /// Start a load when the viewport nears the end of the content.
    ///
    /// Scrolling never retries a failed load; that takes `load_next` or
    /// `refresh`.
    pub fn on_scroll(&mut self, position: ScrollPosition) -> Option<PendingFetch> {
        if matches!(self.state, LoadState::Failed(_)) {
            return None;
        }
        if position.is_near_end(self.load_more_threshold) {
            self.load_next()
        } else {
            None
        }
    }

    /// Apply a completed request.
    pub fn apply(&mut self, outcome: FetchOutcome) -> Applied {
        let FetchOutcome { request, result } = outcome;

        let in_flight = request.generation == self.generation
            && request.category == self.category
            && request.page == self.next_page
            && self.state == LoadState::Loading;
        if !in_flight {
            log::debug!(
                "{}: discarding stale {} page {} (generation {}, current {})",
                self.category,
                request.category,
                request.page,
                request.generation,
                self.generation
            );
            return Applied::Stale;
        }

        match result {
            Ok(items) if items.is_empty() => {
                log::info!("{}: exhausted at page {}", self.category, request.page);
                self.state = LoadState::Exhausted;
                Applied::Exhausted
            }
            Ok(items) => {
                let count = items.len();
                self.items.extend(items);
                self.next_page += 1;
                self.state = LoadState::Idle;
                log::info!(
                    "{}: page {} added {} item(s), {} total",
                    self.category,
                    request.page,
                    count,
                    self.items.len()
                );
                Applied::Appended(count)
            }
            Err(e) => {
                log::warn!("{}: page {} failed: {}", self.category, request.page, e);
                self.state = LoadState::Failed(e.to_string());
                Applied::Failed
            }
        }
    }

    /// Case-insensitive name filter over what has been fetched.
    ///
    /// Empty text matches everything. Never fetches, never mutates.
    pub fn filter(&self, text: &str) -> Vec<&CatalogItem> {
        let needle = text.to_lowercase();
        self.items
            .iter()
            .filter(|item| needle.is_empty() || item.name_contains(&needle))
            .collect()
    }

    /// `load_next` and apply the result in one step.
    pub async fn load_next_now(&mut self, repo: &dyn CatalogRepository) -> Option<Applied> {
        let pending = self.load_next()?;
        let outcome = pending.run(repo).await;
        Some(self.apply(outcome))
    }

    /// `refresh` and apply the result in one step.
    pub async fn refresh_now(&mut self, repo: &dyn CatalogRepository) -> Option<Applied> {
        let pending = self.refresh()?;
        let outcome = pending.run(repo).await;
        Some(self.apply(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeRepository, people, person};

    fn ok_outcome(pending: PendingFetch, items: Vec<CatalogItem>) -> FetchOutcome {
        FetchOutcome {
            request: pending,
            result: Ok(items),
        }
    }

    #[tokio::test]
    async fn test_pages_accumulate_in_order() {
        let p1 = people(1, 3);
        let p2 = people(4, 2);
        let repo = FakeRepository::new()
            .with_page(Category::People, 1, p1.clone())
            .with_page(Category::People, 2, p2.clone());
        let mut list = ListController::new(Category::People);

        assert_eq!(list.load_next_now(&repo).await, Some(Applied::Appended(3)));
        assert_eq!(list.load_next_now(&repo).await, Some(Applied::Appended(2)));

        let expected: Vec<CatalogItem> = p1.into_iter().chain(p2).collect();
        assert_eq!(list.items(), expected.as_slice());
        assert_eq!(list.next_page(), 3);
        assert_eq!(list.state(), &LoadState::Idle);
    }

    #[test]
    fn test_load_next_while_loading_is_noop() {
        let mut list = ListController::new(Category::People);
        let pending = list.load_next().unwrap();
        assert!(list.is_loading());
        assert!(list.load_next().is_none());
        assert!(list.load_next().is_none());

        assert_eq!(list.apply(ok_outcome(pending, people(1, 2))), Applied::Appended(2));
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.next_page(), 2);
    }

    #[tokio::test]
    async fn test_people_scenario_exhausts_after_empty_page() {
        let repo = FakeRepository::new()
            .with_page(Category::People, 1, people(1, 10))
            .with_page(Category::People, 2, people(11, 10));
        let mut list = ListController::new(Category::People);

        list.load_next_now(&repo).await;
        list.load_next_now(&repo).await;
        assert_eq!(list.load_next_now(&repo).await, Some(Applied::Exhausted));

        assert_eq!(list.items().len(), 20);
        assert!(list.is_exhausted());
        assert_eq!(repo.page_requests(), 3);

        // No further requests once exhausted.
        assert_eq!(list.load_next_now(&repo).await, None);
        assert!(list.load_next().is_none());
        assert_eq!(list.items().len(), 20);
        assert_eq!(repo.page_requests(), 3);
        assert_eq!(list.next_page(), 3);
    }

    #[tokio::test]
    async fn test_failure_keeps_items_and_retries_same_page() {
        let repo = FakeRepository::new()
            .with_page(Category::Planets, 1, people(1, 2))
            .with_failing_page(Category::Planets, 2, 500);
        let mut list = ListController::new(Category::Planets);

        list.load_next_now(&repo).await;
        assert_eq!(list.load_next_now(&repo).await, Some(Applied::Failed));
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.error_message(), Some("Server error: HTTP 500"));

        // Manual retry asks for the same page again.
        let pending = list.load_next().unwrap();
        assert_eq!(pending.page, 2);
    }

    #[test]
    fn test_scroll_does_not_retry_failed_load() {
        let mut list = ListController::new(Category::People);
        let pending = list.load_next().unwrap();
        list.apply(FetchOutcome {
            request: pending,
            result: Err(crate::error::AppError::server(503)),
        });

        let bottom = ScrollPosition::new(1200.0, 2000.0, 800.0);
        assert!(list.on_scroll(bottom).is_none());
        assert!(list.load_next().is_some());
    }

    #[test]
    fn test_scroll_triggers_only_near_end() {
        let mut list = ListController::with_threshold(Category::People, 100.0);
        assert!(list.on_scroll(ScrollPosition::new(0.0, 2000.0, 800.0)).is_none());
        assert_eq!(list.state(), &LoadState::Idle);

        let pending = list.on_scroll(ScrollPosition::new(1150.0, 2000.0, 800.0));
        assert_eq!(pending.map(|p| p.page), Some(1));
        assert!(list.on_scroll(ScrollPosition::new(1200.0, 2000.0, 800.0)).is_none());
    }

    #[test]
    fn test_refresh_resets_and_discards_stale_response() {
        let mut list = ListController::new(Category::People);
        let first = list.load_next().unwrap();
        list.apply(ok_outcome(first, people(1, 5)));

        let in_flight = list.load_next().unwrap();
        assert_eq!(in_flight.page, 2);

        let fresh = list.refresh().unwrap();
        assert!(list.items().is_empty());
        assert_eq!(fresh.page, 1);
        assert_ne!(fresh.generation, in_flight.generation);

        // The old page-2 response lands after the refresh.
        assert_eq!(list.apply(ok_outcome(in_flight, people(6, 5))), Applied::Stale);
        assert!(list.items().is_empty());
        assert!(list.is_loading());

        assert_eq!(list.apply(ok_outcome(fresh, people(1, 3))), Applied::Appended(3));
        assert_eq!(list.next_page(), 2);
    }

    #[test]
    fn test_outcome_for_other_request_is_dropped() {
        let mut people_list = ListController::new(Category::People);
        let mut planets_list = ListController::new(Category::Planets);
        let people_pending = people_list.load_next().unwrap();
        let planets_pending = planets_list.load_next().unwrap();

        // Same generation, different category.
        assert_eq!(
            people_list.apply(ok_outcome(planets_pending, people(1, 3))),
            Applied::Stale
        );
        assert!(people_list.items().is_empty());
        assert!(people_list.is_loading());

        // Same category and generation, wrong page.
        let other_page = PendingFetch {
            page: 2,
            ..people_pending.clone()
        };
        assert_eq!(people_list.apply(ok_outcome(other_page, people(1, 3))), Applied::Stale);
        assert!(people_list.items().is_empty());

        assert_eq!(
            people_list.apply(ok_outcome(people_pending, people(1, 3))),
            Applied::Appended(3)
        );
        assert_eq!(people_list.next_page(), 2);
    }

    #[tokio::test]
    async fn test_refresh_clears_exhaustion() {
        let repo = FakeRepository::new().with_page(Category::Films, 1, people(1, 1));
        let mut list = ListController::new(Category::Films);

        list.load_next_now(&repo).await;
        list.load_next_now(&repo).await;
        assert!(list.is_exhausted());

        assert_eq!(list.refresh_now(&repo).await, Some(Applied::Appended(1)));
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.state(), &LoadState::Idle);
    }

    #[tokio::test]
    async fn test_filter_is_a_pure_view() {
        let repo = FakeRepository::new().with_page(
            Category::People,
            1,
            vec![person("Luke Skywalker", 1), person("Leia Organa", 5)],
        );
        let mut list = ListController::new(Category::People);
        list.load_next_now(&repo).await;
        let requests = repo.page_requests();

        let hits = list.filter("luke");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_name(), "Luke Skywalker");

        assert_eq!(list.filter("LUKE").len(), 1);
        assert_eq!(list.filter("").len(), 2);
        assert!(list.filter("vader").is_empty());

        assert_eq!(list.items().len(), 2);
        assert_eq!(repo.page_requests(), requests);
        assert_eq!(list.state(), &LoadState::Idle);
    }
}
