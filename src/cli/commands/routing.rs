//! Routing command argument structures

use clap::Args;

use crate::cli::parse::parse_algorithm_selection;
use campath_core::graph::AlgorithmSelection;

/// Arguments for the route command.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Start location
    pub from: String,

    /// Destination
    pub to: String,

    /// Algorithm: bfs, dfs, ucs (dijkstra), a* (astar), or all
    #[arg(long, short, value_parser = parse_algorithm_selection)]
    pub algorithm: Option<AlgorithmSelection>,

    /// Also print the order in which locations were explored
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Start location
    pub from: String,

    /// Destination
    pub to: String,
}

/// Arguments for the ask command.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question, as one or more words
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}
