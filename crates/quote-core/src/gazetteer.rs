//! City lookup used to resolve route selections to coordinates.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{read_file, CatalogError};
use crate::models::City;

/// Cities offered in the route pickers when no external list is supplied.
const BUILTIN_CITIES: &[(&str, f64, f64)] = &[
    ("Delhi", 28.6139, 77.2090),
    ("Mumbai", 19.0760, 72.8777),
    ("Bengaluru", 12.9716, 77.5946),
    ("Kolkata", 22.5726, 88.3639),
    ("Chennai", 13.0827, 80.2707),
    ("Hyderabad", 17.3850, 78.4867),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Pune", 18.5204, 73.8567),
    ("Jaipur", 26.9124, 75.7873),
    ("Lucknow", 26.8467, 80.9462),
    ("Chandigarh", 30.7333, 76.7794),
    ("Kochi", 9.9312, 76.2673),
    ("Guwahati", 26.1445, 91.7362),
    ("Bhubaneswar", 20.2961, 85.8245),
    ("Srinagar", 34.0837, 74.7973),
    ("Goa", 15.2993, 74.1240),
];

/// Ordered, read-only list of cities keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Gazetteer {
    cities: Vec<City>,
}

impl Gazetteer {
    /// Build from a city list. Names must be unique, ignoring case.
    pub fn new(cities: Vec<City>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for city in &cities {
            if !seen.insert(city.name.to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateCity(city.name.clone()));
            }
        }
        Ok(Self { cities })
    }

    pub fn builtin() -> Self {
        Self {
            cities: BUILTIN_CITIES
                .iter()
                .map(|(name, lat, lon)| City::new(*name, *lat, *lon))
                .collect(),
        }
    }

    /// Parse a JSON array of cities.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cities: Vec<City> = serde_json::from_str(json)?;
        Self::new(cities)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_json(&read_file(path.as_ref())?)
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn find(&self, name: &str) -> Option<&City> {
        let name = name.trim();
        self.cities
            .iter()
            .find(|city| city.name.eq_ignore_ascii_case(name))
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}
