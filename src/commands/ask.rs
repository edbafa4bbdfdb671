//! Ask command

use crate::cli::commands::routing::AskArgs;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use campath_core::chat;
use campath_core::error::Result;
use campath_core::records::{escape_quotes, format_step_record, header};

/// Execute the ask command
pub fn execute(ctx: &CommandContext, args: &AskArgs) -> Result<()> {
    let session = ctx.session()?;
    let message = args.message.join(" ");
    let response = chat::ask(&message, &session.map, &session.config)?;

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", response.text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Records => {
            let kind = serde_json::to_value(response.kind)?;
            println!(
                "{}",
                header("ask", &[("kind", kind.as_str().unwrap_or_default().to_string())])
            );
            for line in response.text.lines() {
                println!("T \"{}\"", escape_quotes(line));
            }
            if let Some(route) = &response.route {
                for (i, step) in route.steps.iter().enumerate() {
                    println!("{}", format_step_record(i, step));
                }
            }
        }
    }
    Ok(())
}
