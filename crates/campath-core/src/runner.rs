//! Algorithm runner and comparator
//!
//! Validates endpoints, builds a fresh graph for every request and runs one
//! or all of the search algorithms. The comparator never aborts a batch: a
//! failing algorithm is recorded as an error entry next to the others.

use std::time::Instant;

use serde::Serialize;

use crate::campus::CampusMap;
use crate::error::{CampathError, Result};
use crate::graph::{
    search, Algorithm, AlgorithmSelection, CampusGraph, DuplicateEdgePolicy, SearchResult,
};
use crate::trace_time;

/// One entry of a comparison: a search result or the error that prevented it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComparisonEntry {
    Completed(SearchResult),
    Failed { algorithm: Algorithm, error: String },
}

impl ComparisonEntry {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            ComparisonEntry::Completed(result) => result.algorithm,
            ComparisonEntry::Failed { algorithm, .. } => *algorithm,
        }
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            ComparisonEntry::Completed(result) => Some(result),
            ComparisonEntry::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ComparisonEntry::Completed(_) => None,
            ComparisonEntry::Failed { error, .. } => Some(error),
        }
    }
}

/// Results of running several algorithms between the same endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub start: String,
    pub end: String,
    pub entries: Vec<ComparisonEntry>,
}

impl Comparison {
    /// Entry with the fewest explored nodes among entries that found a path.
    /// Ties go to the entry run first.
    pub fn most_efficient(&self) -> Option<&SearchResult> {
        self.found().reduce(|best, r| {
            if r.nodes_explored < best.nodes_explored {
                r
            } else {
                best
            }
        })
    }

    /// Entries that found a path, ordered by explored nodes, stable on ties
    pub fn ranking(&self) -> Vec<&SearchResult> {
        let mut ranked: Vec<&SearchResult> = self.found().collect();
        ranked.sort_by_key(|r| r.nodes_explored);
        ranked
    }

    pub fn completed(&self) -> impl Iterator<Item = &SearchResult> {
        self.entries.iter().filter_map(ComparisonEntry::result)
    }

    /// Completed entries whose search reached the destination
    pub fn found(&self) -> impl Iterator<Item = &SearchResult> {
        self.completed().filter(|r| r.found())
    }

    /// Completed entries whose search exhausted the graph
    pub fn unreachable(&self) -> impl Iterator<Item = &SearchResult> {
        self.completed().filter(|r| !r.found())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries.iter().filter(|e| e.error().is_some())
    }
}

/// Runs searches over one set of campus tables
#[derive(Debug, Clone)]
pub struct PathFinder<'a> {
    map: &'a CampusMap,
    duplicate_edges: DuplicateEdgePolicy,
}

impl<'a> PathFinder<'a> {
    pub fn new(map: &'a CampusMap) -> Self {
        Self {
            map,
            duplicate_edges: DuplicateEdgePolicy::default(),
        }
    }

    pub fn with_duplicate_edges(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.duplicate_edges = policy;
        self
    }

    /// Graph snapshot for one request
    pub fn graph(&self) -> CampusGraph {
        CampusGraph::build(self.map, self.duplicate_edges)
    }

    fn ensure_known(&self, start: &str, end: &str) -> Result<()> {
        for name in [start, end] {
            if !self.map.contains(name) {
                return Err(CampathError::location_not_found(name));
            }
        }
        Ok(())
    }

    /// Run one algorithm. Unknown endpoints are `LocationNotFound`; an
    /// unreachable destination is a result without a path.
    #[tracing::instrument(skip(self), fields(algorithm = %algorithm))]
    pub fn find_path(
        &self,
        start: &str,
        end: &str,
        algorithm: Algorithm,
    ) -> Result<SearchResult> {
        let started = Instant::now();
        self.ensure_known(start, end)?;
        let graph = self.graph();
        let result = search(&graph, algorithm, start, end);
        trace_time!(started, "find_path", nodes_explored = result.nodes_explored);
        Ok(result)
    }

    /// Run the selected algorithms in comparison order, recording failures per entry
    pub fn run(
        &self,
        start: &str,
        end: &str,
        selection: AlgorithmSelection,
    ) -> Vec<ComparisonEntry> {
        selection
            .algorithms()
            .into_iter()
            .map(|algorithm| match self.find_path(start, end, algorithm) {
                Ok(result) => ComparisonEntry::Completed(result),
                Err(e) => {
                    tracing::warn!(algorithm = %algorithm, error = %e, "algorithm failed");
                    ComparisonEntry::Failed {
                        algorithm,
                        error: e.to_string(),
                    }
                }
            })
            .collect()
    }

    /// Run BFS, DFS, UCS and A* between the same endpoints
    #[tracing::instrument(skip(self))]
    pub fn compare(&self, start: &str, end: &str) -> Comparison {
        let started = Instant::now();
        let entries = self.run(start, end, AlgorithmSelection::All);
        trace_time!(started, "compare", entries = entries.len());
        Comparison {
            start: start.to_string(),
            end: end.to_string(),
            entries,
        }
    }
}

/// Run one algorithm over `map` with default graph options
pub fn find_path(
    map: &CampusMap,
    start: &str,
    end: &str,
    algorithm: Algorithm,
) -> Result<SearchResult> {
    PathFinder::new(map).find_path(start, end, algorithm)
}

/// Run the selected algorithms over `map`
pub fn run_algorithms(
    map: &CampusMap,
    start: &str,
    end: &str,
    selection: AlgorithmSelection,
) -> Vec<ComparisonEntry> {
    PathFinder::new(map).run(start, end, selection)
}

/// Compare all four algorithms over `map`
pub fn compare_algorithms(map: &CampusMap, start: &str, end: &str) -> Comparison {
    PathFinder::new(map).compare(start, end)
}
