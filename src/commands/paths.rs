//! Custom path commands

use crate::cli::paths::PathCommands;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use campath_core::bail_usage;
use campath_core::error::Result;
use campath_core::paths::{CustomPath, NewPath, PathStore, PathUpdate};
use campath_core::records::{escape_quotes, header};

/// Execute a paths subcommand
pub fn execute(ctx: &CommandContext, command: &PathCommands) -> Result<()> {
    let (config, config_path) = ctx.load_config()?;
    let mut store = PathStore::open(&ctx.paths_file(&config, &config_path))?;

    match command {
        PathCommands::Save {
            name,
            points,
            description,
        } => {
            let saved = store.save(NewPath {
                name: name.clone(),
                coordinates: points.clone(),
                description: description.clone(),
            })?;
            output_saved(ctx, &saved, "Saved")
        }
        PathCommands::List => output_list(ctx, &store),
        PathCommands::Show { name } => output_path(ctx, store.get(name)?),
        PathCommands::Update {
            name,
            points,
            description,
        } => {
            let update = PathUpdate {
                coordinates: points.clone(),
                description: description.clone(),
            };
            if update.is_empty() {
                bail_usage!("nothing to update: pass --point or --description");
            }
            let updated = store.update(name, update)?;
            output_saved(ctx, &updated, "Updated")
        }
        PathCommands::Delete { name } => {
            let removed = store.delete(name)?;
            output_saved(ctx, &removed, "Deleted")
        }
    }
}

fn output_saved(ctx: &CommandContext, path: &CustomPath, verb: &str) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Human => {
            println!("{} path '{}' (id {})", verb, path.name, path.id);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(path)?),
        OutputFormat::Records => {
            println!("{}", header("paths", &[("action", verb.to_lowercase())]));
            println!("{}", path_record(path));
        }
    }
    Ok(())
}

fn output_list(ctx: &CommandContext, store: &PathStore) -> Result<()> {
    let paths = store.list();
    match ctx.cli.format {
        OutputFormat::Human => {
            if paths.is_empty() {
                if !ctx.cli.quiet {
                    println!("No saved paths");
                }
                return Ok(());
            }
            for path in paths {
                let mut line = format!(
                    "{:>3}  {}  ({} points)",
                    path.id, path.name, path.coordinate_count
                );
                if !path.description.is_empty() {
                    line.push_str(&format!(" - {}", path.description));
                }
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(paths)?),
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "paths",
                    &[
                        ("action", "list".to_string()),
                        ("count", paths.len().to_string()),
                    ]
                )
            );
            for path in paths {
                println!("{}", path_record(path));
            }
        }
    }
    Ok(())
}

fn output_path(ctx: &CommandContext, path: &CustomPath) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Human => {
            println!("{} (id {})", path.name, path.id);
            if !path.description.is_empty() {
                println!("{}", path.description);
            }
            println!("Created: {}", path.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
            if let Some(updated) = path.updated_at {
                println!("Updated: {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
            }
            println!("Points:");
            for (i, point) in path.coordinates.iter().enumerate() {
                println!("  {}. {}", i + 1, point);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(path)?),
        OutputFormat::Records => {
            println!("{}", header("paths", &[("action", "show".to_string())]));
            println!("{}", path_record(path));
            for point in &path.coordinates {
                println!("X {:.6} {:.6}", point.latitude, point.longitude);
            }
        }
    }
    Ok(())
}

fn path_record(path: &CustomPath) -> String {
    format!(
        "P {} points={} created={} \"{}\" \"{}\"",
        path.id,
        path.coordinate_count,
        path.created_at.to_rfc3339(),
        escape_quotes(&path.name),
        escape_quotes(&path.description)
    )
}

