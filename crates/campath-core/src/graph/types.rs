use serde::{Deserialize, Serialize};

use crate::error::CampathError;

/// A walking distance in meters.
/// Edge weights, accumulated path costs and heuristic estimates all use this unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    pub fn new(meters: f64) -> Self {
        Meters(meters)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order over distances, used to key priority frontiers
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Meters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Meters(self.0 + other.0)
    }
}

impl std::iter::Sum for Meters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Meters::ZERO, |acc, m| acc + m)
    }
}

impl From<f64> for Meters {
    fn from(meters: f64) -> Self {
        Meters(meters)
    }
}

impl std::fmt::Display for Meters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} m", self.0)
    }
}

/// One entry of a location's neighbor list
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub name: String,
    pub distance: Meters,
}

/// Policy for a connection table holding several edges between the same pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateEdgePolicy {
    /// Keep the smallest weight
    #[default]
    Min,
    /// Keep the weight seen first in the table
    First,
    /// Keep the weight seen last in the table
    Last,
}

impl DuplicateEdgePolicy {
    /// Weight to keep when `incoming` duplicates an edge currently weighted `existing`
    pub fn resolve(self, existing: Meters, incoming: Meters) -> Meters {
        match self {
            DuplicateEdgePolicy::Min => {
                if incoming < existing {
                    incoming
                } else {
                    existing
                }
            }
            DuplicateEdgePolicy::First => existing,
            DuplicateEdgePolicy::Last => incoming,
        }
    }
}

impl std::fmt::Display for DuplicateEdgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DuplicateEdgePolicy::Min => "min",
            DuplicateEdgePolicy::First => "first",
            DuplicateEdgePolicy::Last => "last",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for DuplicateEdgePolicy {
    type Err = CampathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" => Ok(DuplicateEdgePolicy::Min),
            "first" => Ok(DuplicateEdgePolicy::First),
            "last" => Ok(DuplicateEdgePolicy::Last),
            other => Err(CampathError::invalid_value(
                "duplicate edge policy (expected: min, first, last)",
                other,
            )),
        }
    }
}

/// The four search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// Breadth-first search (fewest hops)
    Bfs,
    /// Depth-first search (first path found)
    Dfs,
    /// Uniform-cost search (Dijkstra)
    Ucs,
    /// A* with a great-circle heuristic
    #[default]
    AStar,
}

impl Algorithm {
    /// Every algorithm, in comparison order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::AStar,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
            Algorithm::AStar => "A*",
        }
    }

    /// Whether the algorithm guarantees a minimum-cost path.
    /// A property of the strategy, not of any particular run.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Algorithm::Ucs | Algorithm::AStar)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = CampathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "ucs" | "dijkstra" | "uniform-cost" => Ok(Algorithm::Ucs),
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(CampathError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = CampathError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.label().to_string()
    }
}

/// Which algorithms a run should execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmSelection {
    One(Algorithm),
    All,
}

impl AlgorithmSelection {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            AlgorithmSelection::One(algorithm) => vec![*algorithm],
            AlgorithmSelection::All => Algorithm::ALL.to_vec(),
        }
    }
}

impl std::str::FromStr for AlgorithmSelection {
    type Err = CampathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(AlgorithmSelection::All)
        } else {
            s.parse().map(AlgorithmSelection::One)
        }
    }
}

/// Outcome of one algorithm invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Inclusive of start and end; `None` when the goal is unreachable
    pub path: Option<Vec<String>>,
    /// Sum of edge weights along `path`; `None` when unreachable
    pub distance: Option<Meters>,
    /// Frontier pops that finalized a node
    pub nodes_explored: usize,
    /// Finalized nodes in pop order
    pub exploration_order: Vec<String>,
    pub execution_time_ms: f64,
    pub is_optimal: bool,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges on the path
    pub fn hop_count(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}
