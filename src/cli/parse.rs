use campath_core::campus::Coordinates;
use campath_core::graph::AlgorithmSelection;

/// Parse an algorithm name or `all`
pub fn parse_algorithm_selection(s: &str) -> std::result::Result<AlgorithmSelection, String> {
    s.parse::<AlgorithmSelection>().map_err(|e| e.to_string())
}

/// Parse a `lat,lng` pair
pub fn parse_coordinates(s: &str) -> std::result::Result<Coordinates, String> {
    s.parse::<Coordinates>().map_err(|e| e.to_string())
}
