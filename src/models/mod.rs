// src/models/mod.rs

//! Domain models for the archives library.
//!
//! This module contains all data structures used throughout the library,
//! organized by their primary purpose.

mod category;
mod config;
mod item;
mod page;
pub mod quiz;

// Re-export all public types
pub use category::Category;
pub use config::{ApiConfig, BrowseConfig, Config, LoggingConfig, StorageConfig};
pub use item::{CatalogItem, Film, Person, Planet, Species, Starship, Vehicle};
pub use page::{PageEnvelope, decode_page};
pub use quiz::{Archetype, Quiz};
