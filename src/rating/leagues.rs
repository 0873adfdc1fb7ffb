use crate::config::leagues::LEAGUE_CYCLE;
use crate::rating::types::{League, Level};

/// Map a level onto the league cycle.
///
/// Levels are 1-based; a level outside the cycle wraps around. The clamp to
/// the last entry only fires for malformed levels below 1.
pub fn league_for_level(level: Level) -> &'static League {
    let cycle_length = LEAGUE_CYCLE.len() as i32;
    let index = ((level - 1) % cycle_length) as usize;
    LEAGUE_CYCLE
        .get(index)
        .unwrap_or(&LEAGUE_CYCLE[LEAGUE_CYCLE.len() - 1])
}

/// Count how many full league cycles a level has completed, starting at 1.
pub fn tier_for_level(level: Level) -> i32 {
    let cycle_length = LEAGUE_CYCLE.len() as i32;
    (level - 1) / cycle_length + 1
}
