//! Search algorithm implementations
//!
//! - `bfs`: fewest-hop search
//! - `dfs`: depth-first search, first path found
//! - `ucs`: uniform-cost search and the shared best-first core
//! - `astar`: best-first search guided by the haversine estimate
//! - `shared`: frontier entry and result assembly

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod shared;
pub mod ucs;


pub use astar::astar_search;
pub use bfs::bfs_search;
pub use dfs::dfs_search;
pub use shared::HeapEntry;
pub use ucs::ucs_search;

use crate::graph::types::{Algorithm, SearchResult};
use crate::graph::GraphProvider;

/// Run one algorithm between two locations of `provider`
pub fn search(
    provider: &dyn GraphProvider,
    algorithm: Algorithm,
    start: &str,
    goal: &str,
) -> SearchResult {
    match algorithm {
        Algorithm::Bfs => bfs_search(provider, start, goal),
        Algorithm::Dfs => dfs_search(provider, start, goal),
        Algorithm::Ucs => ucs_search(provider, start, goal),
        Algorithm::AStar => astar_search(provider, start, goal),
    }
}
