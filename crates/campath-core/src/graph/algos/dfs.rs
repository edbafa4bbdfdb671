use std::collections::HashSet;
use std::time::Instant;

use crate::graph::algos::shared::{finish, unknown_endpoint_result, Exploration};
use crate::graph::types::{Algorithm, SearchResult};
use crate::graph::GraphProvider;

/// Depth-first search returning the first path it reaches.
///
/// The stack may hold several entries for one location; entries popped
/// after their node was visited are skipped and not counted. Neighbors are
/// pushed in reverse adjacency order so the first-listed neighbor is tried
/// first. The predecessor of a node is the one that pushed it first.
#[tracing::instrument(skip(provider), fields(start = %start, goal = %goal))]
pub fn dfs_search(provider: &dyn GraphProvider, start: &str, goal: &str) -> SearchResult {
    let started = Instant::now();
    if !provider.contains(start) || !provider.contains(goal) {
        return unknown_endpoint_result(Algorithm::Dfs, started);
    }

    let mut exploration = Exploration::default();
    let mut visited: HashSet<String> = HashSet::new();
    let mut stack: Vec<String> = vec![start.to_string()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        exploration.record_pop(&current);
        tracing::trace!(node = %current, frontier = stack.len(), "dfs_pop");

        if current == goal {
            exploration.found = true;
            break;
        }

        for neighbor in provider.neighbors(&current).iter().rev() {
            if visited.contains(&neighbor.name) {
                continue;
            }
            exploration
                .predecessors
                .entry(neighbor.name.clone())
                .or_insert_with(|| current.clone());
            stack.push(neighbor.name.clone());
        }
    }

    finish(provider, Algorithm::Dfs, start, goal, exploration, started)
}
