//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use campath_core::campus::CampusMap;
use campath_core::config::CampathConfig;
use campath_core::error::Result;
use campath_core::runner::PathFinder;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Config file in effect: `--config`, else the default location
    pub fn config_path(&self) -> Result<PathBuf> {
        CampathConfig::resolve_path(self.cli.config.as_deref())
    }

    pub fn load_config(&self) -> Result<(CampathConfig, PathBuf)> {
        let path = self.config_path()?;
        let config = CampathConfig::load(&path)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), config = %path.display(), "load_config");
        Ok((config, path))
    }

    /// Load configuration and campus tables
    pub fn session(&self) -> Result<Session> {
        let (config, config_path) = self.load_config()?;
        let campus_path = self.cli.campus.clone().or_else(|| config.campus.clone());
        let map = CampusMap::load_or_bundled(campus_path.as_deref())?;
        tracing::debug!(
            elapsed = ?self.start.elapsed(),
            locations = map.locations.len(),
            "load_campus"
        );
        Ok(Session {
            config,
            config_path,
            campus_path,
            map,
        })
    }

    /// Custom path store file: `--paths-file`, else the configured one
    pub fn paths_file(&self, config: &CampathConfig, config_path: &std::path::Path) -> PathBuf {
        self.cli
            .paths_file
            .clone()
            .unwrap_or_else(|| config.paths_file_for(config_path))
    }
}

/// Configuration and campus tables for one invocation
pub struct Session {
    pub config: CampathConfig,
    pub config_path: PathBuf,
    /// Campus file in use; `None` for the bundled campus
    pub campus_path: Option<PathBuf>,
    pub map: CampusMap,
}

impl Session {
    pub fn finder(&self) -> PathFinder<'_> {
        PathFinder::new(&self.map).with_duplicate_edges(self.config.routing.duplicate_edges)
    }

    /// Canonical spelling of a typed location name. Unknown names pass
    /// through so the search reports them.
    pub fn resolve(&self, input: &str) -> String {
        self.map
            .resolve_name(input)
            .map(str::to_string)
            .unwrap_or_else(|| input.trim().to_string())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("campath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Campus navigation: routes, algorithm comparison and custom paths.");
        println!();
        println!("Run `campath --help` for usage information.");
        Ok(())
    }
}
