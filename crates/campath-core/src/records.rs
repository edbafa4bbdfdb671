//! Utilities for the records output format
//!
//! Every record is one line: a type letter followed by space-separated
//! fields. Free text goes last and is quoted.

use crate::campus::Location;
use crate::graph::SearchResult;
use crate::route::RouteStep;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Header line for one command's output
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H campath=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// R-line summarizing one search result
pub fn format_result_record(result: &SearchResult) -> String {
    let distance = result
        .distance
        .map(|d| format!("{:.1}", d.value()))
        .unwrap_or_else(|| "-".to_string());
    let path = result
        .path
        .as_ref()
        .map(|p| p.join(" -> "))
        .unwrap_or_default();
    format!(
        "R {} found={} distance={} explored={} time_ms={:.3} optimal={} \"{}\"",
        result.algorithm,
        result.found(),
        distance,
        result.nodes_explored,
        result.execution_time_ms,
        result.is_optimal,
        escape_quotes(&path)
    )
}

/// S-line for one leg of a route
pub fn format_step_record(index: usize, step: &RouteStep) -> String {
    format!(
        "S {} distance={:.1} cumulative={:.1} \"{}\" \"{}\"",
        index + 1,
        step.distance_m.value(),
        step.cumulative_m.value(),
        escape_quotes(&step.from),
        escape_quotes(&step.to)
    )
}

/// L-line for one campus location
pub fn format_location_record(location: &Location) -> String {
    format!(
        "L {:.6} {:.6} category={} \"{}\"",
        location.latitude,
        location.longitude,
        location.category,
        escape_quotes(&location.name)
    )
}
