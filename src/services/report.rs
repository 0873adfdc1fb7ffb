use std::fs;

use anyhow::{Context, Result};
use askama::Template;
use chrono::Utc;
use log::info;

use crate::domain::models::RankedEntry;
use crate::errors;

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    title: &'a str,
    generated_at: String,
    entries: &'a [RankedEntry],
}

pub struct ReportService {
    title: String,
}

impl ReportService {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Render the standings table to a self-contained HTML document.
    pub fn render(&self, entries: &[RankedEntry]) -> Result<String> {
        let template = ReportTemplate {
            title: &self.title,
            generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
            entries,
        };
        template
            .render()
            .context(errors::render_context("standings report"))
    }

    /// Render and write the HTML report.
    pub fn write_html(&self, entries: &[RankedEntry], output_path: &str) -> Result<()> {
        info!("=== Writing HTML Report ===");

        let html = self.render(entries)?;
        fs::write(output_path, html).with_context(|| errors::write_context(output_path))?;

        info!("  → Wrote {} rows to {}", entries.len(), output_path);
        Ok(())
    }

    /// Write the standings as pretty-printed JSON.
    pub fn write_json(&self, entries: &[RankedEntry], output_path: &str) -> Result<()> {
        info!("=== Writing JSON Standings ===");

        let json = serde_json::to_string_pretty(entries)
            .context(errors::serialize_context("standings"))?;
        fs::write(output_path, json).with_context(|| errors::write_context(output_path))?;

        info!("  → Wrote {} entries to {}", entries.len(), output_path);
        Ok(())
    }
}
