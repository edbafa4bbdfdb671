//! Route command

use serde_json::{json, Value};

use crate::cli::commands::routing::RouteArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::{CommandContext, Session};
use campath_core::error::Result;
use campath_core::graph::{AlgorithmSelection, CampusGraph, SearchResult};
use campath_core::records::{escape_quotes, format_result_record, format_step_record, header};
use campath_core::route::{format_route, Route};
use campath_core::runner::ComparisonEntry;

/// Execute the route command
pub fn execute(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let session = ctx.session()?;
    let from = session.resolve(&args.from);
    let to = session.resolve(&args.to);
    let selection = args
        .algorithm
        .unwrap_or(AlgorithmSelection::One(session.config.routing.default_algorithm));

    let finder = session.finder();
    let graph = finder.graph();

    let entries = match selection {
        AlgorithmSelection::One(algorithm) => {
            vec![ComparisonEntry::Completed(finder.find_path(&from, &to, algorithm)?)]
        }
        AlgorithmSelection::All => finder.run(&from, &to, AlgorithmSelection::All),
    };

    tracing::debug!(elapsed = ?ctx.start.elapsed(), entries = entries.len(), "route");

    match ctx.cli.format {
        OutputFormat::Human => output_human(ctx, &session, &graph, &entries, args.trace),
        OutputFormat::Json => output_json(&session, &graph, &from, &to, &entries, selection)?,
        OutputFormat::Records => output_records(&session, &graph, &from, &to, &entries),
    }
    Ok(())
}

fn route_for(session: &Session, graph: &CampusGraph, result: &SearchResult) -> Option<Route> {
    format_route(graph, result, session.config.routing.walking_speed_kmh)
}

fn output_human(
    ctx: &CommandContext,
    session: &Session,
    graph: &CampusGraph,
    entries: &[ComparisonEntry],
    trace: bool,
) {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match entry {
            ComparisonEntry::Failed { algorithm, error } => {
                println!("{}: error: {}", algorithm, error);
            }
            ComparisonEntry::Completed(result) => {
                print_result_human(ctx, session, graph, result, trace);
            }
        }
    }
}

fn print_result_human(
    ctx: &CommandContext,
    session: &Session,
    graph: &CampusGraph,
    result: &SearchResult,
    trace: bool,
) {
    match route_for(session, graph, result) {
        None => println!(
            "No path found ({} explored {} locations)",
            result.algorithm, result.nodes_explored
        ),
        Some(route) => {
            println!(
                "{} -> {} ({})",
                route.start().unwrap_or_default(),
                route.end().unwrap_or_default(),
                result.algorithm
            );
            for (i, step) in route.steps.iter().enumerate() {
                println!("  {}. {}", i + 1, step.describe());
            }
            println!(
                "Total: {}, {} stop(s), walking time {} min",
                route.total_distance_m, route.num_stops, route.walking_time_minutes
            );
            if !ctx.cli.quiet {
                if let Some(straight) = route.straight_line_m {
                    println!("Straight line: {}", straight);
                }
                println!(
                    "Explored {} locations in {:.3} ms{}",
                    result.nodes_explored,
                    result.execution_time_ms,
                    if result.is_optimal { " (optimal)" } else { "" }
                );
            }
        }
    }
    if trace {
        println!("Exploration order: {}", result.exploration_order.join(", "));
    }
}

/// A search result with its formatted route under `route`
pub fn result_json(session: &Session, graph: &CampusGraph, result: &SearchResult) -> Result<Value> {
    let mut value = serde_json::to_value(result)?;
    let route = route_for(session, graph, result);
    if let Some(obj) = value.as_object_mut() {
        obj.insert("route".to_string(), serde_json::to_value(route)?);
    }
    Ok(value)
}

/// JSON for one comparison entry
pub fn entry_json(
    session: &Session,
    graph: &CampusGraph,
    entry: &ComparisonEntry,
) -> Result<Value> {
    match entry {
        ComparisonEntry::Completed(result) => result_json(session, graph, result),
        failed => Ok(serde_json::to_value(failed)?),
    }
}

fn output_json(
    session: &Session,
    graph: &CampusGraph,
    from: &str,
    to: &str,
    entries: &[ComparisonEntry],
    selection: AlgorithmSelection,
) -> Result<()> {
    let output = match (selection, entries) {
        (AlgorithmSelection::One(_), [entry]) => entry_json(session, graph, entry)?,
        _ => {
            let results = entries
                .iter()
                .map(|e| entry_json(session, graph, e))
                .collect::<Result<Vec<_>>>()?;
            json!({
                "start": from,
                "end": to,
                "results": results,
            })
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(
    session: &Session,
    graph: &CampusGraph,
    from: &str,
    to: &str,
    entries: &[ComparisonEntry],
) {
    println!(
        "{}",
        header(
            "route",
            &[
                ("from", format!("\"{}\"", escape_quotes(from))),
                ("to", format!("\"{}\"", escape_quotes(to))),
            ]
        )
    );
    for entry in entries {
        match entry {
            ComparisonEntry::Failed { algorithm, error } => {
                println!("E {} \"{}\"", algorithm, escape_quotes(error));
            }
            ComparisonEntry::Completed(result) => {
                println!("{}", format_result_record(result));
                if let Some(route) = route_for(session, graph, result) {
                    for (i, step) in route.steps.iter().enumerate() {
                        println!("{}", format_step_record(i, step));
                    }
                }
            }
        }
    }
}
