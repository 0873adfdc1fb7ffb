pub mod leagues;
pub mod levels;
pub mod standings;
pub mod types;

pub use leagues::{league_for_level, tier_for_level};
pub use levels::level_for_rating;
pub use standings::{assign_ranks, is_demoted, order_standings, DEMOTION_MARKER};
pub use types::{Foreground, League, Level, RatingPoints};
