use log::info;

use crate::config::settings::AppConfig;
use crate::domain::models::{RankedEntry, RosterEntry};
use crate::rating;

pub struct ProcessingService {
    config: AppConfig,
}

impl ProcessingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, entries: Vec<RosterEntry>) -> Vec<RankedEntry> {
        info!("=== Starting Standings Processing ===");

        // Step 1: Derive level, league, and tier for every entry
        let mut standings: Vec<RankedEntry> =
            entries.into_iter().map(|e| self.enrich(e)).collect();
        info!("  → Classified {} entries", standings.len());

        // Step 2: Order by level, demotion marker, then rating
        rating::order_standings(&mut standings);

        // Step 3: Assign dense 1-based ranks
        rating::assign_ranks(&mut standings);
        info!("  → Standings ordered and ranked");

        standings
    }

    fn enrich(&self, entry: RosterEntry) -> RankedEntry {
        let level = rating::level_for_rating(entry.rating, &self.config.levels);
        let league = rating::league_for_level(level);
        let tier = rating::tier_for_level(level);

        RankedEntry {
            rank: 0, // assigned after sorting
            name: entry.name,
            level,
            league: league.name.to_string(),
            tier,
            rating: entry.rating,
            comment: entry.comment,
            background: league.background.to_string(),
            foreground: league.foreground.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_entry(name: &str, rating: i32, comment: &str) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            rating,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn test_entry_level_ratings_map_to_first_league() {
        let service = ProcessingService::new(AppConfig::new());

        let standings = service.run(vec![roster_entry("Alice", 850, "")]);

        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[0].level, 1);
        assert_eq!(standings[0].tier, 1);
        assert_eq!(standings[0].league, "White");
        assert_eq!(standings[0].background, "#FFFFFF");
        assert_eq!(standings[0].foreground, "black");
    }

    #[test]
    fn test_threshold_rating_reaches_level_two() {
        let service = ProcessingService::new(AppConfig::new());

        let standings = service.run(vec![roster_entry("Bob", 875, "")]);

        assert_eq!(standings[0].level, 2);
        assert_eq!(standings[0].league, "Grey");
    }

    #[test]
    fn test_comment_survives_enrichment() {
        let service = ProcessingService::new(AppConfig::new());

        let standings = service.run(vec![roster_entry("Carol", 950, "needs review")]);

        assert_eq!(standings[0].level, 3);
        assert_eq!(standings[0].comment, "needs review");
    }

    #[test]
    fn test_standings_are_ranked_across_levels() {
        let service = ProcessingService::new(AppConfig::new());

        let standings = service.run(vec![
            roster_entry("Alice", 850, ""),
            roster_entry("Carol", 950, ""),
            roster_entry("Bob", 875, ""),
        ]);

        let names: Vec<&str> = standings.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
        let ranks: Vec<usize> = standings.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_demoted_entry_ranks_below_equal_rating() {
        let service = ProcessingService::new(AppConfig::new());

        // Both land on level 5 with equal rating.
        let standings = service.run(vec![
            roster_entry("---Dave", 1100, ""),
            roster_entry("Eve", 1100, ""),
        ]);

        assert_eq!(standings[0].name, "Eve");
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[1].name, "---Dave");
        assert_eq!(standings[1].rank, 2);
    }

    #[test]
    fn test_cycle_restart_keeps_colors_but_raises_tier() {
        let service = ProcessingService::new(AppConfig::new());

        // Level 26 = 875 + 24 * 75; level 1 is anything below 875.
        let standings = service.run(vec![
            roster_entry("veteran", 2675, ""),
            roster_entry("novice", 600, ""),
        ]);

        assert_eq!(standings[0].level, 26);
        assert_eq!(standings[0].tier, 2);
        assert_eq!(standings[1].level, 1);
        assert_eq!(standings[1].tier, 1);
        assert_eq!(standings[0].league, standings[1].league);
        assert_eq!(standings[0].background, standings[1].background);
    }
}
