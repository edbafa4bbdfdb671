//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::types::{Algorithm, DuplicateEdgePolicy};

/// Average walking speed used for time estimates
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

/// Origin assumed by chat route requests that name only a destination
pub const DEFAULT_ORIGIN: &str = "Main Gate";

/// campath configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampathConfig {
    /// Campus tables file (TOML or JSON); the bundled campus when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<PathBuf>,

    /// Custom path store file; `paths.json` next to the config when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths_file: Option<PathBuf>,

    /// Routing behavior
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing and formatting options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Algorithm used by `route` when none is given
    #[serde(default)]
    pub default_algorithm: Algorithm,

    /// Walking speed for time estimates
    #[serde(default = "default_walking_speed")]
    pub walking_speed_kmh: f64,

    /// How repeated connections between the same pair are merged
    #[serde(default)]
    pub duplicate_edges: DuplicateEdgePolicy,

    /// Start of chat route requests that name only a destination
    #[serde(default = "default_origin")]
    pub default_origin: String,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::default(),
            walking_speed_kmh: default_walking_speed(),
            duplicate_edges: DuplicateEdgePolicy::default(),
            default_origin: default_origin(),
        }
    }
}

fn default_walking_speed() -> f64 {
    DEFAULT_WALKING_SPEED_KMH
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}
