pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod rating;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::ingestion::IngestionService;
use crate::services::processing::ProcessingService;
use crate::services::report::ReportService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command.unwrap_or_default()
}

pub fn handle_report(input: Option<String>, output: Option<String>) -> Result<()> {
    let config = AppConfig::new();
    let input = input.unwrap_or_else(|| config.report.input_path.to_string());
    let output = output.unwrap_or_else(|| config.report.output_path.to_string());
    let title = config.report.title;

    let roster = IngestionService::new(&input).run()?;
    let standings = ProcessingService::new(config).run(roster.entries);
    ReportService::new(title).write_html(&standings, &output)
}

pub fn handle_check(input: Option<String>) -> Result<()> {
    let config = AppConfig::new();
    let input = input.unwrap_or_else(|| config.report.input_path.to_string());

    let roster = IngestionService::new(&input).run()?;
    info!(
        "Roster check complete: {} entries would be ranked, {} lines skipped",
        roster.entries.len(),
        roster.warnings.len()
    );
    Ok(())
}

pub fn handle_export(input: Option<String>, output: Option<String>) -> Result<()> {
    let config = AppConfig::new();
    let input = input.unwrap_or_else(|| config.report.input_path.to_string());
    let output = output.unwrap_or_else(|| config.report.export_path.to_string());
    let title = config.report.title;

    let roster = IngestionService::new(&input).run()?;
    let standings = ProcessingService::new(config).run(roster.entries);
    ReportService::new(title).write_json(&standings, &output)
}
