use serde::{Deserialize, Serialize};

/// One well-formed roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub rating: i32,
    pub comment: String,
}

/// A roster line that was skipped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

/// Parse result: surviving entries plus diagnostics for skipped lines.
#[derive(Debug, Default)]
pub struct ParsedRoster {
    pub entries: Vec<RosterEntry>,
    pub warnings: Vec<LineWarning>,
}

/// A roster entry enriched with its derived standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub level: i32,
    pub league: String,
    pub tier: i32,
    pub rating: i32,
    pub comment: String,
    pub background: String,
    pub foreground: String,
}
