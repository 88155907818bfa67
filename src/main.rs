use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use secrecy::ExposeSecret;
use std::io::Write;
use std::process::ExitCode;

mod cli;

use cli::{write_saved_files, Cli, OutputFormat};
use seedkeys::logging::{init_logging, LogLevel};
use seedkeys::{DomainError, KeyGeneration, KeygenConfig, KeygenOutcome};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(LogLevel::from_verbosity(cli.verbose)) {
        eprintln!("Warning: {}", e);
    }

    let format = cli.format;
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e @ DomainError::Usage(_)) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", Cli::command().render_help());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &KeygenConfig, format: OutputFormat) -> Result<()> {
    let outcome = KeyGeneration::run(config).context("key generation failed")?;
    let mut stdout = std::io::stdout().lock();

    match outcome {
        KeygenOutcome::Printed(identity) => {
            writeln!(stdout, "{}", identity.expose_secret())?;
        }
        KeygenOutcome::Saved(files) => {
            write_saved_files(&mut stdout, &files, format)?;
        }
    }

    Ok(())
}
