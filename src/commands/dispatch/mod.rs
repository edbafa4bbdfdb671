//! Command dispatch logic for campath

use std::time::Instant;

use crate::cli::Cli;
use campath_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{CommandContext, Session};
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), "dispatch");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
