use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Instant;

use crate::graph::path::reconstruct_path;
use crate::graph::types::{Algorithm, Meters, SearchResult};
use crate::graph::GraphProvider;

/// Priority frontier entry, ordered as a min-heap under `Reverse`.
///
/// Entries with equal priority pop in insertion order (`seq`), which keeps
/// results stable across runs.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: String,
    /// Cumulative cost from the start
    pub cost: Meters,
    /// Frontier key: `cost` for UCS, `cost + heuristic` for A*
    pub priority: Meters,
    pub seq: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Bookkeeping shared by every search strategy
#[derive(Debug, Default)]
pub struct Exploration {
    pub predecessors: HashMap<String, String>,
    /// Finalized nodes in pop order
    pub order: Vec<String>,
    pub found: bool,
    /// Cost reported by the strategy itself (UCS/A* finalized distance)
    pub reported_cost: Option<Meters>,
}

impl Exploration {
    pub fn record_pop(&mut self, node: &str) {
        self.order.push(node.to_string());
    }
}

/// Result for a search whose endpoints are not in the graph
pub fn unknown_endpoint_result(algorithm: Algorithm, started: Instant) -> SearchResult {
    SearchResult {
        algorithm,
        path: None,
        distance: None,
        nodes_explored: 0,
        exploration_order: Vec::new(),
        execution_time_ms: elapsed_ms(started),
        is_optimal: algorithm.is_optimal(),
    }
}

/// Turn the exploration state into a `SearchResult`.
///
/// For strategies that do not track cost (BFS, DFS) the distance is the sum
/// of edge weights along the reconstructed path.
pub fn finish(
    provider: &dyn GraphProvider,
    algorithm: Algorithm,
    start: &str,
    goal: &str,
    exploration: Exploration,
    started: Instant,
) -> SearchResult {
    let path = if exploration.found {
        reconstruct_path(start, goal, &exploration.predecessors)
    } else {
        None
    };

    let distance = path.as_ref().and_then(|p| {
        exploration
            .reported_cost
            .or_else(|| path_weight(provider, p))
    });

    let result = SearchResult {
        algorithm,
        path,
        distance,
        nodes_explored: exploration.order.len(),
        exploration_order: exploration.order,
        execution_time_ms: elapsed_ms(started),
        is_optimal: algorithm.is_optimal(),
    };

    tracing::debug!(
        algorithm = %algorithm,
        start,
        goal,
        found = result.found(),
        distance = result.distance.map(|d| d.value()),
        nodes_explored = result.nodes_explored,
        "search_complete"
    );
    result
}

fn path_weight(provider: &dyn GraphProvider, path: &[String]) -> Option<Meters> {
    path.windows(2)
        .map(|pair| {
            provider
                .neighbors(&pair[0])
                .iter()
                .find(|n| n.name == pair[1])
                .map(|n| n.distance)
        })
        .sum()
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    fn entry(node: &str, priority: f64, seq: u64) -> HeapEntry {
        HeapEntry {
            node_id: node.to_string(),
            cost: Meters::new(priority),
            priority: Meters::new(priority),
            seq,
        }
    }

    #[test]
    fn test_min_heap_pops_lowest_priority() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(entry("far", 300.0, 0)));
        heap.push(Reverse(entry("near", 10.0, 1)));
        heap.push(Reverse(entry("mid", 150.0, 2)));

        let order: Vec<String> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node_id))
            .collect();
        assert_eq!(order, vec!["near", "mid", "far"]);
    }

    #[test]
    fn test_equal_priorities_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(entry("second", 50.0, 2)));
        heap.push(Reverse(entry("first", 50.0, 1)));
        heap.push(Reverse(entry("third", 50.0, 3)));

        let order: Vec<String> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node_id))
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }
}
