use crate::campus::Coordinates;
use crate::graph::types::Neighbor;

/// Trait for providing graph adjacency and node positions to the search algorithms
pub trait GraphProvider {
    fn contains(&self, name: &str) -> bool;

    /// Neighbors in adjacency order; empty for unknown names
    fn neighbors(&self, name: &str) -> &[Neighbor];

    fn coordinates(&self, name: &str) -> Option<Coordinates>;
}
