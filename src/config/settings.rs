pub struct LevelSettings {
    pub entry_threshold: i32,
    pub points_per_level: i32,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            entry_threshold: 875,
            points_per_level: 75,
        }
    }
}

pub struct ReportSettings {
    pub input_path: &'static str,
    pub output_path: &'static str,
    pub export_path: &'static str,
    pub title: &'static str,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            input_path: "running.txt",
            output_path: "index.html",
            export_path: "standings.json",
            title: "Level Report",
        }
    }
}

pub struct AppConfig {
    pub levels: LevelSettings,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            levels: LevelSettings::default(),
            report: ReportSettings::default(),
        }
    }
}
