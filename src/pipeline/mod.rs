//! Browsing pipeline: paging, filtering and search.
//!
//! - `ListController`: pages through one category and filters what it holds
//! - `SearchController`: upstream search plus recent-query bookkeeping
//! - `ScrollPosition`: the "load more" trigger geometry

pub mod list;
pub mod scroll;
pub mod search;

pub use list::{Applied, FetchOutcome, ListController, LoadState, PendingFetch};
pub use scroll::ScrollPosition;
pub use search::SearchController;
