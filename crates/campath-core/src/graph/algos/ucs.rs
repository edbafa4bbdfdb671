use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use crate::graph::algos::shared::{finish, unknown_endpoint_result, Exploration, HeapEntry};
use crate::graph::types::{Algorithm, Meters, SearchResult};
use crate::graph::GraphProvider;

/// State tracked during a best-first search
struct BestFirstState {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    best_cost: HashMap<String, Meters>,
    finalized: HashSet<String>,
    next_seq: u64,
}

impl BestFirstState {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            best_cost: HashMap::new(),
            finalized: HashSet::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, node_id: &str, cost: Meters, estimate: Meters) {
        self.heap.push(Reverse(HeapEntry {
            node_id: node_id.to_string(),
            cost,
            priority: cost + estimate,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }
}

/// Lowest-cost-first search keyed by `cost + heuristic(node)`.
///
/// Stale heap entries (nodes already finalized) are discarded without being
/// counted. A neighbor is relaxed only when the new cost is strictly lower
/// than the best known one. With a zero heuristic this is uniform-cost search.
pub(crate) fn best_first<H>(
    provider: &dyn GraphProvider,
    algorithm: Algorithm,
    start: &str,
    goal: &str,
    heuristic: H,
) -> SearchResult
where
    H: Fn(&str) -> Meters,
{
    let started = Instant::now();
    if !provider.contains(start) || !provider.contains(goal) {
        return unknown_endpoint_result(algorithm, started);
    }

    let mut exploration = Exploration::default();
    let mut state = BestFirstState::new();

    state.best_cost.insert(start.to_string(), Meters::ZERO);
    state.push(start, Meters::ZERO, heuristic(start));

    while let Some(Reverse(entry)) = state.heap.pop() {
        if !state.finalized.insert(entry.node_id.clone()) {
            continue;
        }
        exploration.record_pop(&entry.node_id);
        tracing::trace!(
            node = %entry.node_id,
            cost = entry.cost.value(),
            priority = entry.priority.value(),
            frontier = state.heap.len(),
            "best_first_pop"
        );

        if entry.node_id == goal {
            exploration.found = true;
            exploration.reported_cost = Some(entry.cost);
            break;
        }

        for neighbor in provider.neighbors(&entry.node_id) {
            if state.finalized.contains(&neighbor.name) {
                continue;
            }
            let new_cost = entry.cost + neighbor.distance;
            let improves = state
                .best_cost
                .get(&neighbor.name)
                .is_none_or(|known| new_cost < *known);
            if !improves {
                continue;
            }

            state.best_cost.insert(neighbor.name.clone(), new_cost);
            exploration
                .predecessors
                .insert(neighbor.name.clone(), entry.node_id.clone());
            state.push(&neighbor.name, new_cost, heuristic(&neighbor.name));
        }
    }

    finish(provider, algorithm, start, goal, exploration, started)
}

/// Uniform-cost search (Dijkstra): the minimum-distance path.
#[tracing::instrument(skip(provider), fields(start = %start, goal = %goal))]
pub fn ucs_search(provider: &dyn GraphProvider, start: &str, goal: &str) -> SearchResult {
    best_first(provider, Algorithm::Ucs, start, goal, |_| Meters::ZERO)
}
