use anyhow::Result;

use level_report::cli::Command;
use level_report::{handle_check, handle_export, handle_report, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Report { input, output } => handle_report(input, output),
        Command::Check { input } => handle_check(input),
        Command::Export { input, output } => handle_export(input, output),
    }
}
