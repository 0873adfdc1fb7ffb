use std::fs;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::domain::models::{LineWarning, ParsedRoster, RosterEntry};
use crate::errors;

/// Field delimiter of the roster file: three consecutive spaces.
const FIELD_DELIMITER: &str = "   ";

pub struct IngestionService {
    input_path: String,
}

impl IngestionService {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
        }
    }

    pub fn run(&self) -> Result<ParsedRoster> {
        info!("=== Starting Roster Ingestion ===");

        // Step 1: Read the roster file (fatal if unavailable)
        let contents = fs::read_to_string(&self.input_path)
            .with_context(|| errors::read_context(&self.input_path))?;

        // Step 2: Parse line by line, collecting diagnostics for bad lines
        let roster = parse_roster(&contents);
        for warning in &roster.warnings {
            warn!(
                "Skipping line {}: {:?} ({})",
                warning.line_number, warning.line, warning.reason
            );
        }

        info!(
            "  → Parsed {} entries, skipped {} lines",
            roster.entries.len(),
            roster.warnings.len()
        );
        Ok(roster)
    }
}

/// Parse full roster contents. Malformed lines never fail the parse; they
/// are returned as warnings alongside the surviving entries.
pub fn parse_roster(contents: &str) -> ParsedRoster {
    let mut roster = ParsedRoster::default();

    for (index, line) in contents.lines().enumerate() {
        match parse_line(line) {
            Ok(entry) => roster.entries.push(entry),
            Err(reason) => roster.warnings.push(LineWarning {
                line_number: index + 1,
                line: line.to_string(),
                reason,
            }),
        }
    }

    roster
}

fn parse_line(line: &str) -> Result<RosterEntry, String> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() < 2 {
        return Err("expected at least name and rating".to_string());
    }

    let rating: i32 = parts[1]
        .parse()
        .map_err(|_| format!("rating {:?} is not an integer", parts[1]))?;

    // The comment is only taken from lines with exactly three fields.
    let comment = if parts.len() == 3 {
        parts[2].to_string()
    } else {
        String::new()
    };

    Ok(RosterEntry {
        name: parts[0].to_string(),
        rating,
        comment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_name_and_rating() {
        let roster = parse_roster("Alice   850");

        assert_eq!(roster.entries.len(), 1);
        assert!(roster.warnings.is_empty());
        assert_eq!(roster.entries[0].name, "Alice");
        assert_eq!(roster.entries[0].rating, 850);
        assert_eq!(roster.entries[0].comment, "");
    }

    #[test]
    fn test_preserves_comment_field() {
        let roster = parse_roster("Carol   950   needs review");

        assert_eq!(roster.entries[0].comment, "needs review");
    }

    #[test]
    fn test_extra_fields_leave_comment_empty() {
        let roster = parse_roster("Dave   900   one   two");

        assert_eq!(roster.entries.len(), 1);
        assert_eq!(roster.entries[0].comment, "");
    }

    #[test]
    fn test_negative_ratings_are_accepted() {
        let roster = parse_roster("Nadia   -50");

        assert_eq!(roster.entries[0].rating, -50);
    }

    #[test]
    fn test_non_integer_rating_is_skipped_with_warning() {
        let roster = parse_roster("Alice   850\nFrank   abc\nBob   875");

        assert_eq!(roster.entries.len(), 2);
        assert_eq!(roster.warnings.len(), 1);
        assert_eq!(roster.warnings[0].line_number, 2);
        assert_eq!(roster.warnings[0].line, "Frank   abc");
    }

    #[test]
    fn test_short_line_is_skipped_with_warning() {
        let roster = parse_roster("just-a-name\nAlice   850\n");

        assert_eq!(roster.entries.len(), 1);
        assert_eq!(roster.warnings.len(), 1);
        assert_eq!(roster.warnings[0].line_number, 1);
    }

    #[test]
    fn test_single_spaces_do_not_delimit() {
        // "Alice 850" has no three-space delimiter, so it is one field.
        let roster = parse_roster("Alice 850");

        assert!(roster.entries.is_empty());
        assert_eq!(roster.warnings.len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_roster() {
        let roster = parse_roster("");

        assert!(roster.entries.is_empty());
        assert!(roster.warnings.is_empty());
    }
}
