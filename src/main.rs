//! csv2tsv CLI

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use csv2tsv::{Action, Error};
use tracing::{info, Level};
use tracing_subscriber::fmt;

mod cli;

use cli::{Cli, LogLevel};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.version {
        println!("Version: {VERSION}");
        return ExitCode::SUCCESS;
    }

    if let Err(err) = init_logging(args.log_level) {
        eprintln!("csv2tsv: {err:#}");
        return ExitCode::FAILURE;
    }

    let stdin = std::io::stdin();
    let options = args.into_options(std::env::args_os().len() > 1);
    let config = match options.resolve(&stdin) {
        Ok(Action::ShowHelp) => return show_help(),
        Ok(Action::Convert(config)) => config,
        Err(err) => return fail(&err),
    };

    match csv2tsv::run(&config, stdin.lock(), std::io::stdout().lock()) {
        Ok(stats) => {
            info!(
                records = stats.records,
                fields = stats.fields,
                ambiguous_fields = stats.ambiguous_fields,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

/// Initialize logging to stderr, so stdout only carries converted data.
fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")
}

fn show_help() -> ExitCode {
    if Cli::command().print_help().is_err() {
        return ExitCode::FAILURE;
    }
    println!();
    ExitCode::SUCCESS
}

fn fail(err: &Error) -> ExitCode {
    eprintln!("csv2tsv: {err}");
    ExitCode::from(err.kind().exit_code())
}
