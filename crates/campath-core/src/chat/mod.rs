//! Free-text campus questions
//!
//! A small pattern-based dispatcher: the parser turns a message into an
//! [`Intent`], and [`respond`] answers it with the pathfinding engine.

mod parser;

use serde::Serialize;

use crate::campus::CampusMap;
use crate::config::CampathConfig;
use crate::error::Result;
use crate::graph::{Algorithm, GraphProvider};
use crate::route::{format_route, walking_time_minutes, Route};
use crate::runner::PathFinder;

pub use parser::{find_location, ChatParser};

/// Neighbors listed when describing a location
const DESCRIBE_NEIGHBOR_LIMIT: usize = 3;

/// What a message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Route { start: String, end: String },
    Describe { location: String },
    Help,
    Greeting,
    /// A route or description request naming no known location
    UnknownLocation { text: String },
    Unknown,
}

/// Kind of answer, for clients that style responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Route,
    NoPath,
    Information,
    Help,
    Greeting,
    UnknownLocation,
}

/// Answer to one message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub kind: ResponseKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

impl ChatResponse {
    fn text(kind: ResponseKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            route: None,
        }
    }
}

/// Parse and answer a message in one step
pub fn ask(message: &str, map: &CampusMap, config: &CampathConfig) -> Result<ChatResponse> {
    let parser = ChatParser::new()?;
    let intent = parser.parse(message, map, &config.routing.default_origin)?;
    tracing::debug!(?intent, "chat_intent");
    respond(&intent, map, config)
}

/// Answer a parsed intent. Routes use A*.
pub fn respond(intent: &Intent, map: &CampusMap, config: &CampathConfig) -> Result<ChatResponse> {
    let finder = PathFinder::new(map).with_duplicate_edges(config.routing.duplicate_edges);

    let response = match intent {
        Intent::Route { start, end } => {
            if !map.contains(start) {
                return Ok(ChatResponse::text(
                    ResponseKind::UnknownLocation,
                    format!("I don't know where {} is.", start),
                ));
            }
            let result = finder.find_path(start, end, Algorithm::AStar)?;
            let graph = finder.graph();
            match format_route(&graph, &result, config.routing.walking_speed_kmh) {
                Some(route) => ChatResponse {
                    kind: ResponseKind::Route,
                    text: describe_route(&route),
                    route: Some(route),
                },
                None => ChatResponse::text(
                    ResponseKind::NoPath,
                    format!("I couldn't find a path from {} to {}.", start, end),
                ),
            }
        }
        Intent::Describe { location } => ChatResponse::text(
            ResponseKind::Information,
            describe_location(map, &finder, location, config.routing.walking_speed_kmh),
        ),
        Intent::Help => ChatResponse::text(ResponseKind::Help, help_text()),
        Intent::Greeting => ChatResponse::text(
            ResponseKind::Greeting,
            "Hello! Ask me for directions or where a campus location is.",
        ),
        Intent::UnknownLocation { text } => ChatResponse::text(
            ResponseKind::UnknownLocation,
            format!(
                "I couldn't match \"{}\" to a campus location. \
                 Try `campath locations` for the list.",
                text
            ),
        ),
        Intent::Unknown => ChatResponse::text(ResponseKind::Help, help_text()),
    };
    Ok(response)
}

fn describe_route(route: &Route) -> String {
    format!(
        "Route from {} to {}: {} via {} stop(s), about {} minutes on foot.\n{}",
        route.start().unwrap_or_default(),
        route.end().unwrap_or_default(),
        route.total_distance_m,
        route.num_stops,
        route.walking_time_minutes,
        route.path.join(" -> ")
    )
}

fn describe_location(
    map: &CampusMap,
    finder: &PathFinder<'_>,
    name: &str,
    walking_speed_kmh: f64,
) -> String {
    let Some(location) = map.location(name) else {
        return format!("I don't know where {} is.", name);
    };

    let mut lines = vec![
        location.name.clone(),
        format!("Category: {}", location.category),
        format!("Coordinates: {}", location.coordinates()),
    ];

    let graph = finder.graph();
    let neighbors = graph.neighbors(name);
    if !neighbors.is_empty() {
        lines.push("Connected to:".to_string());
        for neighbor in neighbors.iter().take(DESCRIBE_NEIGHBOR_LIMIT) {
            lines.push(format!(
                "  {} ({} away, {} min walk)",
                neighbor.name,
                neighbor.distance,
                walking_time_minutes(neighbor.distance, walking_speed_kmh)
            ));
        }
        if neighbors.len() > DESCRIBE_NEIGHBOR_LIMIT {
            lines.push(format!(
                "  ... and {} more locations",
                neighbors.len() - DESCRIBE_NEIGHBOR_LIMIT
            ));
        }
    }
    lines.join("\n")
}

fn help_text() -> &'static str {
    "I can find routes and describe campus locations. Try:\n  \
     How do I get from Main Gate to Library?\n  \
     Find route to Computer Center\n  \
     Where is the Food Court?"
}
