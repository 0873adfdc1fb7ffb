use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "pool ladder level report generator")]
pub struct Cli {
    /// Command (optional, defaults to report)
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Read the roster and write the HTML standings report
    Report {
        /// Roster file (optional, defaults to running.txt)
        #[arg(short, long)]
        input: Option<String>,
        /// Report file (optional, defaults to index.html)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse the roster and print diagnostics without writing anything
    Check {
        /// Roster file (optional, defaults to running.txt)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Read the roster and write the standings as JSON
    Export {
        /// Roster file (optional, defaults to running.txt)
        #[arg(short, long)]
        input: Option<String>,
        /// Export file (optional, defaults to standings.json)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Report {
            input: None,
            output: None,
        }
    }
}
