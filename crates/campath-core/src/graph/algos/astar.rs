use crate::graph::algos::ucs::best_first;
use crate::graph::heuristic::haversine_distance;
use crate::graph::types::{Algorithm, Meters, SearchResult};
use crate::graph::GraphProvider;

/// A* search guided by the great-circle distance to the goal.
///
/// Locations without coordinates get a zero estimate, which degrades to
/// uniform-cost ordering for those nodes but keeps the result optimal.
#[tracing::instrument(skip(provider), fields(start = %start, goal = %goal))]
pub fn astar_search(provider: &dyn GraphProvider, start: &str, goal: &str) -> SearchResult {
    let target = provider.coordinates(goal);

    let estimate = |node: &str| match (provider.coordinates(node), target) {
        (Some(here), Some(there)) => haversine_distance(here, there),
        _ => Meters::ZERO,
    };

    best_first(provider, Algorithm::AStar, start, goal, estimate)
}
