//! Main CLI commands enum

use clap::Subcommand;

pub mod campus;
pub mod routing;

use crate::cli::config::ConfigCommands;
use crate::cli::paths::PathCommands;
use campus::*;
use routing::*;

/// Top-level campath commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a path between two locations
    Route(RouteArgs),

    /// Run BFS, DFS, UCS and A* and rank them by explored nodes
    Compare(CompareArgs),

    /// List campus locations
    Locations(LocationsArgs),

    /// Show one location and its connections
    Show(ShowArgs),

    /// Ask a free-text question ("how do I get from Main Gate to Library?")
    Ask(AskArgs),

    /// Manage saved custom paths
    Paths {
        #[command(subcommand)]
        command: PathCommands,
    },

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
