//! Command implementations for all campath commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use campath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route(args) => commands::route::execute(ctx, args),
            Commands::Compare(args) => commands::compare::execute(ctx, args),
            Commands::Locations(args) => commands::locations::execute(ctx, args),
            Commands::Show(args) => commands::show::execute(ctx, args),
            Commands::Ask(args) => commands::ask::execute(ctx, args),
            Commands::Paths { command } => commands::paths::execute(ctx, command),
            Commands::Config { command } => commands::config::execute(ctx, command),
        }
    }
}
