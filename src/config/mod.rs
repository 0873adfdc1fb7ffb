pub mod leagues;
pub mod settings;

pub use leagues::LEAGUE_CYCLE;
pub use settings::{AppConfig, LevelSettings, ReportSettings};
