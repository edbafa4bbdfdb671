//! Route formatting
//!
//! Turns a found path into the turn-by-turn figures shown to users: steps
//! with running totals, the coordinates to draw, straight-line distance and
//! an estimated walking time.

use serde::Serialize;

use crate::campus::Coordinates;
use crate::graph::{haversine_distance, Algorithm, GraphProvider, Meters, SearchResult};

/// One leg of a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub from: String,
    pub to: String,
    pub distance_m: Meters,
    /// Distance walked from the start once this leg is done
    pub cumulative_m: Meters,
}

impl RouteStep {
    /// Single-line human rendering
    pub fn describe(&self) -> String {
        format!(
            "{} -> {} ({}, total {})",
            self.from, self.to, self.distance_m, self.cumulative_m
        )
    }
}

/// A found path rendered for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub algorithm: Algorithm,
    pub path: Vec<String>,
    pub steps: Vec<RouteStep>,
    /// Coordinates of the path locations that have them, in path order
    pub coordinates: Vec<Coordinates>,
    pub total_distance_m: Meters,
    /// Great-circle distance between the endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub straight_line_m: Option<Meters>,
    /// Locations passed between start and end
    pub num_stops: usize,
    pub walking_time_minutes: f64,
}

impl Route {
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

/// Minutes needed to walk `distance` at `speed_kmh`, rounded to 0.1
pub fn walking_time_minutes(distance: Meters, speed_kmh: f64) -> f64 {
    if speed_kmh <= 0.0 {
        return 0.0;
    }
    let minutes = distance.value() / 1000.0 / speed_kmh * 60.0;
    (minutes * 10.0).round() / 10.0
}

/// Format a search result. Returns `None` when the result has no path.
pub fn format_route(
    provider: &dyn GraphProvider,
    result: &SearchResult,
    walking_speed_kmh: f64,
) -> Option<Route> {
    let path = result.path.as_ref()?;

    let mut cumulative = Meters::ZERO;
    let steps: Vec<RouteStep> = path
        .windows(2)
        .map(|pair| {
            let distance = provider
                .neighbors(&pair[0])
                .iter()
                .find(|n| n.name == pair[1])
                .map(|n| n.distance)
                .unwrap_or_default();
            cumulative = cumulative + distance;
            RouteStep {
                from: pair[0].clone(),
                to: pair[1].clone(),
                distance_m: distance,
                cumulative_m: cumulative,
            }
        })
        .collect();

    let total = result.distance.unwrap_or(cumulative);

    let coordinates: Vec<Coordinates> = path
        .iter()
        .filter_map(|name| provider.coordinates(name))
        .collect();

    let straight_line = match (path.first(), path.last()) {
        (Some(first), Some(last)) => provider
            .coordinates(first)
            .zip(provider.coordinates(last))
            .map(|(a, b)| haversine_distance(a, b)),
        _ => None,
    };

    Some(Route {
        algorithm: result.algorithm,
        path: path.clone(),
        steps,
        coordinates,
        total_distance_m: total,
        straight_line_m: straight_line,
        num_stops: path.len().saturating_sub(2),
        walking_time_minutes: walking_time_minutes(total, walking_speed_kmh),
    })
}
