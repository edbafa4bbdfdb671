//! Custom user-drawn paths
//!
//! Named coordinate sequences kept in a flat JSON file. Writes replace the
//! whole file; concurrent writers follow last-write-wins.

mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campus::Coordinates;

pub use store::PathStore;

/// A saved custom path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPath {
    pub id: u64,
    pub name: String,
    pub coordinates: Vec<Coordinates>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub coordinate_count: usize,
}

/// Input for saving a path
#[derive(Debug, Clone, Default)]
pub struct NewPath {
    pub name: String,
    pub coordinates: Vec<Coordinates>,
    pub description: String,
}

/// Changes applied by an update; empty coordinates leave the existing ones
#[derive(Debug, Clone, Default)]
pub struct PathUpdate {
    pub coordinates: Vec<Coordinates>,
    pub description: Option<String>,
}

impl PathUpdate {
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty() && self.description.is_none()
    }
}
