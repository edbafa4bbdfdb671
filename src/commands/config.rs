//! Config commands

use serde_json::json;

use crate::cli::config::ConfigCommands;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use campath_core::config::CampathConfig;
use campath_core::error::{CampathError, Result};
use campath_core::records::header;

/// Execute a config subcommand
pub fn execute(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Init { force } => init(ctx, *force),
    }
}

fn show(ctx: &CommandContext) -> Result<()> {
    let (config, config_path) = ctx.load_config()?;
    let paths_file = ctx.paths_file(&config, &config_path);

    match ctx.cli.format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("# source: {}", CampathConfig::source_display(&config_path));
                println!("# paths file: {}", paths_file.display());
                println!();
            }
            print!("{}", config.to_toml_string()?);
        }
        OutputFormat::Json => {
            let output = json!({
                "source": config_path,
                "exists": config_path.exists(),
                "paths_file": paths_file,
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "config",
                    &[
                        ("source", format!("\"{}\"", config_path.display())),
                        ("exists", config_path.exists().to_string()),
                    ]
                )
            );
            let routing = &config.routing;
            println!("K default_algorithm {}", routing.default_algorithm);
            println!("K walking_speed_kmh {}", routing.walking_speed_kmh);
            println!("K duplicate_edges {}", routing.duplicate_edges);
            println!("K default_origin \"{}\"", routing.default_origin);
            println!("K paths_file \"{}\"", paths_file.display());
        }
    }
    Ok(())
}

fn init(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = ctx.config_path()?;
    if path.exists() && !force {
        return Err(CampathError::UsageError(format!(
            "config file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    CampathConfig::default().save(&path)?;
    tracing::info!(path = %path.display(), "config initialized");

    match ctx.cli.format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Wrote default configuration to {}", path.display());
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "path": path, "written": true }))?
            );
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header("config", &[("written", format!("\"{}\"", path.display()))])
            );
        }
    }
    Ok(())
}
