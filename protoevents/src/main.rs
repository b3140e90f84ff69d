//! # protoevents CLI Entry Point

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use protoevents::cli::{Cli, run};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_error(err),
    };

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Missing schema argument prints the usage line on stdout and exits with 1.
/// Everything else (help, version, bad flags) is left to clap.
fn usage_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => {
            println!("{}", Cli::command().render_usage());
            ExitCode::FAILURE
        }
        _ => err.exit(),
    }
}
