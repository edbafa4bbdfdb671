//! Campus location and connection tables
//!
//! The tables are the read-only input of every search: a location table
//! (`name -> latitude, longitude, category`) and a direction-agnostic
//! connection table (`from, to, distance_meters`). They load from TOML or
//! JSON files, or from the bundled campus dataset.

mod coordinates;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{CampathError, Result};

pub use coordinates::Coordinates;

/// Bundled campus dataset
const BUNDLED_CAMPUS: &str = include_str!("../../data/campus.toml");

/// A named campus point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Display-only tag (e.g. "academic", "dining")
    #[serde(default = "default_category")]
    pub category: String,
    /// Short names accepted by free-text questions (e.g. "gym")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Location {
            name: name.into(),
            latitude,
            longitude,
            category: default_category(),
            aliases: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

fn default_category() -> String {
    "building".to_string()
}

/// A bidirectional walking connection between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub distance_meters: f64,
    /// Intermediate points for drawing the connection; never part of its cost
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<Coordinates>,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance_meters: f64) -> Self {
        Connection {
            from: from.into(),
            to: to.into(),
            distance_meters,
            waypoints: Vec::new(),
        }
    }
}

/// Location and connection tables for one campus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusMap {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl CampusMap {
    pub fn new(locations: Vec<Location>, connections: Vec<Connection>) -> Self {
        CampusMap {
            locations,
            connections,
        }
    }

    /// The campus dataset shipped with campath
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CAMPUS)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load campus tables from a `.toml` or `.json` file
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CampathError::io_operation("read campus file", path.display(), e))?;

        let parsed = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        };

        let map = parsed.map_err(|e| CampathError::InvalidCampus {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            locations = map.locations.len(),
            connections = map.connections.len(),
            "campus_loaded"
        );
        Ok(map)
    }

    /// Load from `path` when given, otherwise the bundled dataset
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.location(name).is_some()
    }

    /// The location named `name`. A name listed twice resolves to its
    /// last row, matching the coordinates the graph builder keeps.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().rev().find(|loc| loc.name == name)
    }

    /// Resolve a user-typed name or alias to the canonical location name,
    /// ignoring case and surrounding whitespace
    pub fn resolve_name(&self, input: &str) -> Option<&str> {
        let wanted = input.trim();
        self.location(wanted)
            .or_else(|| {
                self.locations
                    .iter()
                    .rev()
                    .find(|loc| loc.name.eq_ignore_ascii_case(wanted))
            })
            .or_else(|| {
                self.locations.iter().find(|loc| {
                    loc.aliases
                        .iter()
                        .any(|alias| alias.eq_ignore_ascii_case(wanted))
                })
            })
            .map(|loc| loc.name.as_str())
    }

    /// Move or add a location. An existing location keeps its category
    /// unless one is given; a new one defaults to `building`.
    /// Returns true when the location was added.
    pub fn upsert_location(
        &mut self,
        name: &str,
        coordinates: Coordinates,
        category: Option<&str>,
    ) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            bail_invalid!("location name", "(empty)");
        }
        if !coordinates.is_valid() {
            bail_invalid!("location coordinates", coordinates);
        }

        let existing = self.locations.iter_mut().rev().find(|loc| loc.name == name);
        let added = match existing {
            Some(location) => {
                location.latitude = coordinates.latitude;
                location.longitude = coordinates.longitude;
                if let Some(category) = category {
                    location.category = category.to_string();
                }
                false
            }
            None => {
                let mut location =
                    Location::new(name, coordinates.latitude, coordinates.longitude);
                if let Some(category) = category {
                    location.category = category.to_string();
                }
                self.locations.push(location);
                true
            }
        };
        Ok(added)
    }

    /// Write the tables to `path`, as JSON for `.json` files and TOML otherwise
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            _ => toml::to_string_pretty(self).map_err(|e| {
                CampathError::Other(format!("failed to serialize campus: {}", e))
            })?,
        };

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                CampathError::io_operation("create campus directory", dir.display(), e)
            })?;
        }
        fs::write(path, content)
            .map_err(|e| CampathError::io_operation("write campus file", path.display(), e))?;

        tracing::info!(locations = self.locations.len(), "campus_saved");
        Ok(())
    }

    /// Locations in table order, optionally restricted to one category
    pub fn locations_in(&self, category: Option<&str>) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|loc| category.is_none_or(|c| loc.category.eq_ignore_ascii_case(c)))
            .collect()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .locations
            .iter()
            .map(|loc| loc.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }
}
