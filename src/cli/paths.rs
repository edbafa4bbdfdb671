//! Custom path subcommands

use clap::Subcommand;

use super::parse::parse_coordinates;
use campath_core::campus::Coordinates;

/// Custom path subcommands
#[derive(Subcommand, Debug)]
pub enum PathCommands {
    /// Save a path (replaces an existing path of the same name)
    Save {
        /// Path name
        name: String,

        /// Point as `lat,lng`; repeat in drawing order
        #[arg(
            long = "point",
            short = 'p',
            required = true,
            allow_hyphen_values = true,
            value_parser = parse_coordinates
        )]
        points: Vec<Coordinates>,

        /// Free-text description
        #[arg(long, short, default_value = "")]
        description: String,
    },

    /// List saved paths
    List,

    /// Show one saved path
    Show {
        /// Path name
        name: String,
    },

    /// Replace a path's points and/or description
    Update {
        /// Path name
        name: String,

        /// Replacement point as `lat,lng`; repeat in drawing order
        #[arg(
            long = "point",
            short = 'p',
            allow_hyphen_values = true,
            value_parser = parse_coordinates
        )]
        points: Vec<Coordinates>,

        /// Replacement description
        #[arg(long, short)]
        description: Option<String>,
    },

    /// Delete a saved path
    Delete {
        /// Path name
        name: String,
    },
}
