//! Compare command

use serde_json::json;

use crate::cli::commands::routing::CompareArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::route::entry_json;
use campath_core::error::Result;
use campath_core::records::{escape_quotes, format_result_record, header};
use campath_core::runner::{Comparison, ComparisonEntry};

/// Execute the compare command
pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let session = ctx.session()?;
    let from = session.resolve(&args.from);
    let to = session.resolve(&args.to);

    let finder = session.finder();
    let comparison = finder.compare(&from, &to);

    tracing::debug!(
        elapsed = ?ctx.start.elapsed(),
        completed = comparison.completed().count(),
        failed = comparison.failures().count(),
        "compare"
    );

    match ctx.cli.format {
        OutputFormat::Human => output_human(ctx, &comparison),
        OutputFormat::Json => {
            let graph = finder.graph();
            let entries = comparison
                .entries
                .iter()
                .map(|e| entry_json(&session, &graph, e))
                .collect::<Result<Vec<_>>>()?;
            let output = json!({
                "start": comparison.start,
                "end": comparison.end,
                "entries": entries,
                "ranking": comparison
                    .ranking()
                    .iter()
                    .map(|r| r.algorithm)
                    .collect::<Vec<_>>(),
                "most_efficient": comparison.most_efficient().map(|r| r.algorithm),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => output_records(&comparison),
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, comparison: &Comparison) {
    println!("{} -> {}", comparison.start, comparison.end);
    println!();
    println!(
        "{:<4} {:<4} {:>10} {:>9} {:>10}  {}",
        "#", "ALGO", "DISTANCE", "EXPLORED", "TIME (ms)", "PATH"
    );
    for (rank, result) in comparison.ranking().iter().enumerate() {
        let distance = result
            .distance
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let path = result
            .path
            .as_ref()
            .map(|p| p.join(" -> "))
            .unwrap_or_default();
        println!(
            "{:<4} {:<4} {:>10} {:>9} {:>10.3}  {}",
            rank + 1,
            result.algorithm.to_string(),
            distance,
            result.nodes_explored,
            result.execution_time_ms,
            path
        );
    }

    for result in comparison.unreachable() {
        println!(
            "{:<4} {:<4} {:>10} {:>9} {:>10.3}  no path",
            "-",
            result.algorithm.to_string(),
            "-",
            result.nodes_explored,
            result.execution_time_ms
        );
    }

    for entry in comparison.failures() {
        if let ComparisonEntry::Failed { algorithm, error } = entry {
            println!("{}: error: {}", algorithm, error);
        }
    }

    if !ctx.cli.quiet {
        println!();
    }
    match comparison.most_efficient() {
        Some(best) => println!(
            "Most efficient: {} ({} nodes explored)",
            best.algorithm, best.nodes_explored
        ),
        None => println!("No algorithm found a path"),
    }
}

fn output_records(comparison: &Comparison) {
    let best = comparison
        .most_efficient()
        .map(|r| r.algorithm.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{}",
        header(
            "compare",
            &[
                ("from", format!("\"{}\"", escape_quotes(&comparison.start))),
                ("to", format!("\"{}\"", escape_quotes(&comparison.end))),
                ("best", best),
            ]
        )
    );
    for entry in &comparison.entries {
        match entry {
            ComparisonEntry::Completed(result) => println!("{}", format_result_record(result)),
            ComparisonEntry::Failed { algorithm, error } => {
                println!("E {} \"{}\"", algorithm, escape_quotes(error))
            }
        }
    }
}
