use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tienlen_rules::telemetry::init_tracing;

mod commands;
mod config;
mod error;

use config::CliConfig;
use error::CliError;

#[derive(Parser)]
#[command(name = "rules-cli")]
#[command(about = "Tiến Lên Miền Nam rules engine: JSON request in, JSON verdict out")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a proposed move
    Validate {
        /// Request file; `-` or absent reads stdin
        input: Option<PathBuf>,
    },
    /// Adjudicate a cut
    Cut {
        /// Request file; `-` or absent reads stdin
        input: Option<PathBuf>,
    },
    /// List the legal plays from a hand
    Hints {
        /// Request file; `-` or absent reads stdin
        input: Option<PathBuf>,
    },
    /// Classify card tokens such as 3S TD 2H
    Detect {
        #[arg(required = true)]
        cards: Vec<String>,
    },
}

fn run(command: &Command) -> Result<Value, CliError> {
    match command {
        Command::Validate { input } => commands::validate(&commands::read_input(input.as_deref())?),
        Command::Cut { input } => commands::cut(&commands::read_input(input.as_deref())?),
        Command::Hints { input } => commands::hints(&commands::read_input(input.as_deref())?),
        Command::Detect { cards } => commands::detect(cards),
    }
}

fn report(err: &CliError) -> ExitCode {
    tracing::warn!(code = err.code(), error = %err, "command failed");
    match serde_json::to_string(&err.problem()) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{err}"),
    }
    ExitCode::from(err.exit_code())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => return report(&err),
    };
    if let Err(err) = init_tracing(config.log_format, &config.log_filter) {
        eprintln!("Logging disabled: {err}");
    }

    match run(&args.command).and_then(|value| {
        serde_json::to_string_pretty(&value).map_err(CliError::encode)
    }) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err),
    }
}
