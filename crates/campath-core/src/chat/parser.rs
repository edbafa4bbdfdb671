use regex::Regex;

use super::Intent;
use crate::bail_usage;
use crate::campus::{CampusMap, Location};
use crate::error::{CampathError, Result};

/// Compiled intent patterns
#[derive(Debug, Clone)]
pub struct ChatParser {
    describe: Regex,
    from_to: Regex,
    to_from: Regex,
    route: Regex,
    destination: Regex,
    help: Regex,
    greeting: Regex,
}

fn compile(pattern: &str) -> Result<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Ok(re),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "failed to compile chat pattern");
            Err(CampathError::Other(format!("invalid chat pattern: {}", e)))
        }
    }
}

impl ChatParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            describe: compile(r"\b(?:where\s+is|tell\s+me\s+about)\b(.*)")?,
            from_to: compile(r"\bfrom\s+(.+?)\s+to\s+(.+)")?,
            to_from: compile(r"\bto\s+(.+?)\s+from\s+(.+)")?,
            route: compile(r"\b(?:route|get|directions|navigate|way)\b")?,
            destination: compile(r"\bto\s+(.+)")?,
            help: compile(r"\bhelp\b")?,
            greeting: compile(r"\b(?:hello|hi|hey)\b")?,
        })
    }

    /// Classify a free-text message.
    ///
    /// Route requests that only name a destination start from `origin`.
    pub fn parse(&self, message: &str, map: &CampusMap, origin: &str) -> Result<Intent> {
        let text = message.trim().to_lowercase();
        if text.is_empty() {
            bail_usage!("message cannot be empty");
        }

        if let Some(caps) = self.describe.captures(&text) {
            let subject = caps.get(1).map_or("", |m| m.as_str());
            return Ok(match find_location(map, subject) {
                Some(location) => Intent::Describe { location },
                None => Intent::UnknownLocation {
                    text: subject.trim().to_string(),
                },
            });
        }

        if let Some(caps) = self.from_to.captures(&text) {
            let from = caps.get(1).map_or("", |m| m.as_str());
            let to = caps.get(2).map_or("", |m| m.as_str());
            return Ok(route_between(map, from, to));
        }

        // "to <destination> from <start>"
        if let Some(caps) = self.to_from.captures(&text) {
            let to = caps.get(1).map_or("", |m| m.as_str());
            let from = caps.get(2).map_or("", |m| m.as_str());
            return Ok(route_between(map, from, to));
        }

        if self.route.is_match(&text) {
            let after_to = self
                .destination
                .captures(&text)
                .and_then(|caps| caps.get(1))
                .map_or("", |m| m.as_str());
            // The origin is only the destination when nothing else is named
            let end = best_match(map, after_to, Some(origin))
                .or_else(|| best_match(map, &text, Some(origin)))
                .or_else(|| best_match(map, &text, None));
            return Ok(match end {
                Some(end) => Intent::Route {
                    start: origin.to_string(),
                    end,
                },
                None => Intent::UnknownLocation { text },
            });
        }

        if self.help.is_match(&text) {
            return Ok(Intent::Help);
        }
        if self.greeting.is_match(&text) {
            return Ok(Intent::Greeting);
        }
        Ok(Intent::Unknown)
    }
}

fn route_between(map: &CampusMap, from: &str, to: &str) -> Intent {
    match (find_location(map, from), find_location(map, to)) {
        (Some(start), Some(end)) => Intent::Route { start, end },
        (None, _) => Intent::UnknownLocation {
            text: from.trim().to_string(),
        },
        (_, None) => Intent::UnknownLocation {
            text: to.trim().to_string(),
        },
    }
}

/// Location whose name or alias is the longest term found in `text`,
/// ignoring case. Equal lengths go to the location listed first.
pub fn find_location(map: &CampusMap, text: &str) -> Option<String> {
    best_match(map, text, None)
}

fn best_match(map: &CampusMap, text: &str, skip: Option<&str>) -> Option<String> {
    let haystack = text.to_lowercase();
    map.locations
        .iter()
        .filter(|loc| skip != Some(loc.name.as_str()))
        .filter_map(|loc| matched_len(&haystack, loc).map(|len| (len, loc)))
        .fold(None, |best: Option<(usize, &Location)>, (len, loc)| match best {
            Some((b, _)) if b >= len => best,
            _ => Some((len, loc)),
        })
        .map(|(_, loc)| loc.name.clone())
}

/// Length of the longest term of `location` present in `haystack`.
/// Names match anywhere; aliases only as whole words.
fn matched_len(haystack: &str, location: &Location) -> Option<usize> {
    let name = location.name.to_lowercase();
    let by_name = haystack.contains(&name).then_some(name.len());
    let by_alias = location
        .aliases
        .iter()
        .map(|alias| alias.to_lowercase())
        .filter(|alias| contains_word(haystack, alias))
        .map(|alias| alias.len())
        .max();
    by_name.max(by_alias)
}

fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    haystack.match_indices(word).any(|(at, _)| {
        let before = haystack[..at].chars().next_back();
        let after = haystack[at + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
