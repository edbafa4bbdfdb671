//! Campus graph and path-finding operations
//!
//! - Graph builder turning campus tables into an adjacency view
//! - BFS, DFS, uniform-cost and A* searches
//! - Haversine heuristic shared by A* and the route formatter
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod builder;
pub mod heuristic;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{astar_search, bfs_search, dfs_search, search, ucs_search};
pub use builder::CampusGraph;
pub use heuristic::haversine_distance;
pub use traversal::GraphProvider;
pub use types::{Algorithm, AlgorithmSelection, DuplicateEdgePolicy, Meters, Neighbor, SearchResult};
