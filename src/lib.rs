// src/lib.rs

//! Galactic Archives data layer
//!
//! Browses the public Star Wars catalog API (people, planets, films, species,
//! vehicles, starships): paginated listing with a local name filter, people
//! search with recent queries, persisted favorites, a random pick and a small
//! character quiz.

pub mod context;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use context::ArchivesContext;
