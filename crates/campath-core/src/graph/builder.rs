//! Adjacency construction from campus tables

use std::collections::HashMap;

use crate::campus::{CampusMap, Coordinates};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{DuplicateEdgePolicy, Meters, Neighbor};

/// Undirected weighted adjacency view over one campus snapshot.
///
/// Neighbor lists keep connection-table order, so two builds from unchanged
/// tables iterate identically.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    adjacency: HashMap<String, Vec<Neighbor>>,
    coordinates: HashMap<String, Coordinates>,
    names: Vec<String>,
    edge_count: usize,
    dropped: usize,
}

impl CampusGraph {
    /// Build the adjacency structure.
    ///
    /// Connections naming an unknown location, carrying a negative or
    /// non-finite distance, or looping back to their own endpoint are
    /// skipped with a warning. Disconnected components are left as they are.
    #[tracing::instrument(
        skip(map),
        fields(locations = map.locations.len(), connections = map.connections.len())
    )]
    pub fn build(map: &CampusMap, policy: DuplicateEdgePolicy) -> Self {
        let mut graph = CampusGraph::default();

        for location in &map.locations {
            if graph
                .coordinates
                .insert(location.name.clone(), location.coordinates())
                .is_some()
            {
                tracing::warn!(
                    location = %location.name,
                    "duplicate location, keeping last coordinates"
                );
                continue;
            }
            graph.names.push(location.name.clone());
            graph.adjacency.insert(location.name.clone(), Vec::new());
        }

        for conn in &map.connections {
            if !graph.contains(&conn.from) || !graph.contains(&conn.to) {
                tracing::warn!(
                    from = %conn.from,
                    to = %conn.to,
                    "connection references unknown location, dropped"
                );
                graph.dropped += 1;
                continue;
            }
            if !conn.distance_meters.is_finite() || conn.distance_meters < 0.0 {
                tracing::warn!(
                    from = %conn.from,
                    to = %conn.to,
                    distance = conn.distance_meters,
                    "connection has invalid distance, dropped"
                );
                graph.dropped += 1;
                continue;
            }
            if conn.from == conn.to {
                tracing::warn!(location = %conn.from, "self-loop connection, dropped");
                graph.dropped += 1;
                continue;
            }

            let distance = Meters::new(conn.distance_meters);
            let added = graph.insert_directed(&conn.from, &conn.to, distance, policy);
            graph.insert_directed(&conn.to, &conn.from, distance, policy);
            if added {
                graph.edge_count += 1;
            }
        }

        tracing::debug!(
            nodes = graph.names.len(),
            edges = graph.edge_count,
            dropped = graph.dropped,
            "graph_built"
        );
        graph
    }

    /// Returns true when the edge is new, false when it merged into an existing one
    fn insert_directed(
        &mut self,
        from: &str,
        to: &str,
        distance: Meters,
        policy: DuplicateEdgePolicy,
    ) -> bool {
        let Some(neighbors) = self.adjacency.get_mut(from) else {
            return false;
        };

        if let Some(existing) = neighbors.iter_mut().find(|n| n.name == to) {
            let kept = policy.resolve(existing.distance, distance);
            tracing::debug!(
                from,
                to,
                existing = existing.distance.value(),
                incoming = distance.value(),
                kept = kept.value(),
                "duplicate connection merged"
            );
            existing.distance = kept;
            return false;
        }

        neighbors.push(Neighbor {
            name: to.to_string(),
            distance,
        });
        true
    }

    /// Location names in table order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Connections skipped while building
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    /// Weight of the direct edge between two locations
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Meters> {
        self.neighbors(from)
            .iter()
            .find(|n| n.name == to)
            .map(|n| n.distance)
    }

    /// Sum of edge weights along consecutive path entries.
    /// `None` when two consecutive entries are not adjacent.
    pub fn path_distance(&self, path: &[String]) -> Option<Meters> {
        path.windows(2)
            .map(|pair| self.edge_weight(&pair[0], &pair[1]))
            .sum()
    }
}

impl GraphProvider for CampusGraph {
    fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    fn neighbors(&self, name: &str) -> &[Neighbor] {
        self.adjacency
            .get(name)
            .map(|n| n.as_slice())
            .unwrap_or(&[])
    }

    fn coordinates(&self, name: &str) -> Option<Coordinates> {
        self.coordinates.get(name).copied()
    }
}
