//! Campus browsing argument structures

use clap::{Args, Subcommand};

/// Arguments for the locations command.
#[derive(Args, Debug)]
pub struct LocationsArgs {
    #[command(subcommand)]
    pub command: Option<LocationCommands>,

    /// Only list locations in this category
    #[arg(long, short)]
    pub category: Option<String>,
}

/// Location editing subcommands
#[derive(Subcommand, Debug)]
pub enum LocationCommands {
    /// Move a location, or add it when the name is new
    Set {
        /// Location name
        name: String,

        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Category (new locations default to "building")
        #[arg(long, short)]
        category: Option<String>,
    },
}

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Location name (case-insensitive)
    pub name: String,
}
