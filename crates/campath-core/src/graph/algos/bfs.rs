use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use crate::graph::algos::shared::{finish, unknown_endpoint_result, Exploration};
use crate::graph::types::{Algorithm, SearchResult};
use crate::graph::GraphProvider;

/// Breadth-first search for the path with the fewest hops.
///
/// Nodes are marked visited when enqueued, so each location enters the
/// queue at most once. The reported distance is the sum of the actual edge
/// weights along the hop-minimal path, which need not be the shortest walk.
#[tracing::instrument(skip(provider), fields(start = %start, goal = %goal))]
pub fn bfs_search(provider: &dyn GraphProvider, start: &str, goal: &str) -> SearchResult {
    let started = Instant::now();
    if !provider.contains(start) || !provider.contains(goal) {
        return unknown_endpoint_result(Algorithm::Bfs, started);
    }

    let mut exploration = Exploration::default();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        exploration.record_pop(&current);
        tracing::trace!(node = %current, frontier = queue.len(), "bfs_pop");

        if current == goal {
            exploration.found = true;
            break;
        }

        for neighbor in provider.neighbors(&current) {
            if visited.insert(neighbor.name.clone()) {
                exploration
                    .predecessors
                    .insert(neighbor.name.clone(), current.clone());
                queue.push_back(neighbor.name.clone());
            }
        }
    }

    finish(provider, Algorithm::Bfs, start, goal, exploration, started)
}
