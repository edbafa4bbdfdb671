//! Locations command

use serde_json::json;

use crate::cli::commands::campus::{LocationCommands, LocationsArgs};
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use campath_core::campus::Coordinates;
use campath_core::error::{CampathError, Result};
use campath_core::records::{escape_quotes, format_location_record, header};

/// Execute the locations command
pub fn execute(ctx: &CommandContext, args: &LocationsArgs) -> Result<()> {
    if let Some(LocationCommands::Set {
        name,
        lat,
        lng,
        category,
    }) = &args.command
    {
        return set_location(ctx, name, Coordinates::new(*lat, *lng), category.as_deref());
    }

    let session = ctx.session()?;
    let locations = session.map.locations_in(args.category.as_deref());

    match ctx.cli.format {
        OutputFormat::Human => {
            if locations.is_empty() {
                if !ctx.cli.quiet {
                    println!("No locations found");
                    if args.category.is_some() {
                        println!("Categories: {}", session.map.categories().join(", "));
                    }
                }
                return Ok(());
            }
            let width = locations.iter().map(|l| l.name.len()).max().unwrap_or(0);
            for location in &locations {
                println!(
                    "{:<width$}  {:<12} {}",
                    location.name,
                    location.category,
                    location.coordinates(),
                    width = width
                );
            }
            if !ctx.cli.quiet {
                println!();
                println!("{} location(s)", locations.len());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&locations)?);
        }
        OutputFormat::Records => {
            let mut fields = vec![("count", locations.len().to_string())];
            if let Some(category) = &args.category {
                fields.push(("category", category.clone()));
            }
            println!("{}", header("locations", &fields));
            for location in &locations {
                println!("{}", format_location_record(location));
            }
        }
    }
    Ok(())
}

/// Move or add a location and write the campus file back. Edits to the
/// bundled campus go to a new file beside the config, which the config
/// then points at.
fn set_location(
    ctx: &CommandContext,
    name: &str,
    coordinates: Coordinates,
    category: Option<&str>,
) -> Result<()> {
    let mut session = ctx.session()?;
    let added = session.map.upsert_location(name, coordinates, category)?;

    let file = match session.campus_path.clone() {
        Some(path) => {
            session.map.save(&path)?;
            path
        }
        None => {
            let path = session.config.campus_file_for(&session.config_path);
            session.map.save(&path)?;
            session.config.campus = Some(path.clone());
            session.config.save(&session.config_path)?;
            tracing::info!(campus = %path.display(), "campus_config_updated");
            path
        }
    };

    let location = session
        .map
        .location(name.trim())
        .ok_or_else(|| CampathError::location_not_found(name.trim()))?;
    let verb = if added { "Added" } else { "Updated" };

    match ctx.cli.format {
        OutputFormat::Human => {
            println!(
                "{} location '{}' at {} in {}",
                verb,
                location.name,
                location.coordinates(),
                file.display()
            );
        }
        OutputFormat::Json => {
            let output = json!({
                "location": location,
                "created": added,
                "file": file.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                header(
                    "locations",
                    &[
                        ("action", verb.to_lowercase()),
                        ("file", format!("\"{}\"", escape_quotes(&file.display().to_string()))),
                    ]
                )
            );
            println!("{}", format_location_record(location));
        }
    }
    Ok(())
}
