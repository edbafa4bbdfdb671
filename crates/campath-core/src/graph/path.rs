//! Path reconstruction from predecessor chains

use std::collections::HashMap;

/// Walk the predecessor chain back from `goal` to `start`.
///
/// Returns the path in start-to-goal order, or `None` when the chain is
/// broken or revisits a node.
pub fn reconstruct_path(
    start: &str,
    goal: &str,
    predecessors: &HashMap<String, String>,
) -> Option<Vec<String>> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;

    while current != start {
        // A simple path never needs more steps than there are recorded links
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        current = predecessors.get(current).map(String::as_str)?;
        path.push(current.to_string());
    }

    path.reverse();
    Some(path)
}
