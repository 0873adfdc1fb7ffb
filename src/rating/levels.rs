use crate::config::settings::LevelSettings;
use crate::rating::types::{Level, RatingPoints};

/// Map a rating to its ladder level.
///
/// Everything below the entry threshold collapses into level 1; from the
/// threshold up, levels advance every `points_per_level` rating points.
pub fn level_for_rating(rating: RatingPoints, settings: &LevelSettings) -> Level {
    if rating < settings.entry_threshold {
        1
    } else {
        (rating - settings.entry_threshold) / settings.points_per_level + 2
    }
}
