//! Show command

use serde_json::json;

use crate::cli::commands::campus::ShowArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use campath_core::error::{CampathError, Result};
use campath_core::graph::GraphProvider;
use campath_core::records::{escape_quotes, format_location_record, header};
use campath_core::route::walking_time_minutes;

/// Execute the show command
pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let session = ctx.session()?;
    let name = session.resolve(&args.name);
    let location = session
        .map
        .location(&name)
        .ok_or_else(|| CampathError::location_not_found(&name))?;

    let graph = session.finder().graph();
    let neighbors = graph.neighbors(&name);
    let speed = session.config.routing.walking_speed_kmh;

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("{}", location.name);
            println!("Category: {}", location.category);
            println!("Coordinates: {}", location.coordinates());
            if neighbors.is_empty() {
                println!("No connections");
            } else {
                println!();
                println!("Connections:");
                for neighbor in neighbors {
                    println!(
                        "  {} ({}, {} min walk)",
                        neighbor.name,
                        neighbor.distance,
                        walking_time_minutes(neighbor.distance, speed)
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "name": location.name,
                "category": location.category,
                "latitude": location.latitude,
                "longitude": location.longitude,
                "connections": neighbors
                    .iter()
                    .map(|n| json!({
                        "name": n.name,
                        "distance": n.distance,
                        "walking_time_minutes": walking_time_minutes(n.distance, speed),
                    }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header("show", &[("connections", neighbors.len().to_string())])
            );
            println!("{}", format_location_record(location));
            for neighbor in neighbors {
                println!(
                    "C distance={:.1} \"{}\"",
                    neighbor.distance.value(),
                    escape_quotes(&neighbor.name)
                );
            }
        }
    }
    Ok(())
}
