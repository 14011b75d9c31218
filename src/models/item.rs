//! Catalog records.
//!
//! The upstream API returns a different record shape per category, so a
//! [`CatalogItem`] is a tagged union with one variant per [`Category`]. Every
//! variant carries the record's canonical source URL, which is the item's
//! identity: equality, hashing and favorites deduplication all go through it.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Category;

/// A character record (`/people/`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub homeworld: Option<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: String,
}

/// A planet record (`/planets/`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Planet {
    pub name: String,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
    pub diameter: Option<String>,
    pub climate: Option<String>,
    pub gravity: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<String>,
    pub population: Option<String>,
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: String,
}

/// A film record (`/films/`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Film {
    pub title: String,
    pub episode_id: Option<u32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: String,
}

/// A species record (`/species/`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Species {
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub average_height: Option<String>,
    pub skin_colors: Option<String>,
    pub hair_colors: Option<String>,
    pub eye_colors: Option<String>,
    pub average_lifespan: Option<String>,
    /// `null` upstream for species without a homeworld.
    pub homeworld: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: String,
}

/// A vehicle record (`/vehicles/`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub vehicle_class: Option<String>,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: String,
}

/// A starship record (`/starships/`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Starship {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub hyperdrive_rating: Option<String>,
    #[serde(rename = "MGLT")]
    pub mglt: Option<String>,
    pub starship_class: Option<String>,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: Option<String>,
    pub edited: Option<String>,
    pub url: String,
}

/// A catalog record tagged with the category it belongs to.
///
/// Serialized with a `category` field holding the path segment, which is the
/// shape persisted under the `favorites` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum CatalogItem {
    #[serde(rename = "people")]
    Person(Person),
    #[serde(rename = "planets")]
    Planet(Planet),
    #[serde(rename = "films")]
    Film(Film),
    #[serde(rename = "species")]
    Species(Species),
    #[serde(rename = "vehicles")]
    Vehicle(Vehicle),
    #[serde(rename = "starships")]
    Starship(Starship),
}

impl CatalogItem {
    /// Canonical source URL; the item's stable identity.
    pub fn url(&self) -> &str {
        match self {
            CatalogItem::Person(p) => &p.url,
            CatalogItem::Planet(p) => &p.url,
            CatalogItem::Film(f) => &f.url,
            CatalogItem::Species(s) => &s.url,
            CatalogItem::Vehicle(v) => &v.url,
            CatalogItem::Starship(s) => &s.url,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            CatalogItem::Person(_) => Category::People,
            CatalogItem::Planet(_) => Category::Planets,
            CatalogItem::Film(_) => Category::Films,
            CatalogItem::Species(_) => Category::Species,
            CatalogItem::Vehicle(_) => Category::Vehicles,
            CatalogItem::Starship(_) => Category::Starships,
        }
    }

    /// Name (or title, for films); `"Unknown"` when blank.
    pub fn display_name(&self) -> &str {
        let name = match self {
            CatalogItem::Person(p) => &p.name,
            CatalogItem::Planet(p) => &p.name,
            CatalogItem::Film(f) => &f.title,
            CatalogItem::Species(s) => &s.name,
            CatalogItem::Vehicle(v) => &v.name,
            CatalogItem::Starship(s) => &s.name,
        };
        if name.trim().is_empty() {
            "Unknown"
        } else {
            name
        }
    }

    /// Long-form description; only films carry one upstream.
    pub fn display_description(&self) -> &str {
        match self {
            CatalogItem::Film(f) => match f.opening_crawl.as_deref() {
                Some(crawl) if !crawl.trim().is_empty() => crawl,
                _ => "No description available",
            },
            _ => "No description available",
        }
    }

    /// Labeled, non-empty attributes in display order.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        match self {
            CatalogItem::Person(p) => {
                push_detail(&mut out, "Height", &p.height);
                push_detail(&mut out, "Mass", &p.mass);
                push_detail(&mut out, "Hair Color", &p.hair_color);
                push_detail(&mut out, "Skin Color", &p.skin_color);
                push_detail(&mut out, "Eye Color", &p.eye_color);
                push_detail(&mut out, "Birth Year", &p.birth_year);
                push_detail(&mut out, "Gender", &p.gender);
                push_detail(&mut out, "Homeworld", &p.homeworld);
            }
            CatalogItem::Planet(p) => {
                push_detail(&mut out, "Climate", &p.climate);
                push_detail(&mut out, "Terrain", &p.terrain);
                push_detail(&mut out, "Gravity", &p.gravity);
                push_detail(&mut out, "Diameter", &p.diameter);
                push_detail(&mut out, "Rotation Period", &p.rotation_period);
                push_detail(&mut out, "Orbital Period", &p.orbital_period);
                push_detail(&mut out, "Surface Water", &p.surface_water);
                push_detail(&mut out, "Population", &p.population);
            }
            CatalogItem::Film(f) => {
                if let Some(episode) = f.episode_id {
                    out.push(("Episode", episode.to_string()));
                }
                push_detail(&mut out, "Release Date", &f.release_date);
                push_detail(&mut out, "Director", &f.director);
                push_detail(&mut out, "Producer", &f.producer);
            }
            CatalogItem::Species(s) => {
                push_detail(&mut out, "Classification", &s.classification);
                push_detail(&mut out, "Designation", &s.designation);
                push_detail(&mut out, "Average Height", &s.average_height);
                push_detail(&mut out, "Average Lifespan", &s.average_lifespan);
                push_detail(&mut out, "Language", &s.language);
                push_detail(&mut out, "Homeworld", &s.homeworld);
            }
            CatalogItem::Vehicle(v) => {
                push_detail(&mut out, "Model", &v.model);
                push_detail(&mut out, "Manufacturer", &v.manufacturer);
                push_detail(&mut out, "Class", &v.vehicle_class);
                push_detail(&mut out, "Cost", &v.cost_in_credits);
                push_detail(&mut out, "Crew", &v.crew);
                push_detail(&mut out, "Passengers", &v.passengers);
            }
            CatalogItem::Starship(s) => {
                push_detail(&mut out, "Model", &s.model);
                push_detail(&mut out, "Manufacturer", &s.manufacturer);
                push_detail(&mut out, "Class", &s.starship_class);
                push_detail(&mut out, "Hyperdrive Rating", &s.hyperdrive_rating);
                push_detail(&mut out, "MGLT", &s.mglt);
                push_detail(&mut out, "Crew", &s.crew);
            }
        }
        out
    }

    /// Text handed to a share sheet.
    pub fn share_text(&self) -> String {
        format!(
            "Check out {} in the Galactic Databank!",
            self.display_name()
        )
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.display_name().to_lowercase().contains(needle)
    }
}

fn push_detail(out: &mut Vec<(&'static str, String)>, label: &'static str, value: &Option<String>) {
    if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        out.push((label, v.to_string()));
    }
}

impl PartialEq for CatalogItem {
    fn eq(&self, other: &Self) -> bool {
        self.url() == other.url()
    }
}

impl Eq for CatalogItem {}

impl Hash for CatalogItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url().hash(state);
    }
}
