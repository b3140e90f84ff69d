//! Command-line interface for the `protoevents` binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use protoevents_codegen::config::DEFAULT_PACKAGE;
use protoevents_codegen::{CodegenConfig, FormatterCommand, GenerateReport, generate_file};

/// Generate Go event-type boilerplate from a protobuf schema.
///
/// Every top-level `message` in the schema gets an `EventType` constant and a
/// `Type()` accessor in `<schema>.gen.go`, next to the schema file.
#[derive(Parser, Debug)]
#[command(name = "protoevents", version, about)]
pub struct Cli {
    /// Protobuf schema to scan for `message` declarations.
    pub schema: PathBuf,

    /// Write the generated file here instead of next to the schema.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Go package name of the generated file.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Formatter run as `<PROGRAM> -w <file>` after writing.
    #[arg(long, value_name = "PROGRAM", default_value = "gofmt")]
    pub formatter: String,

    /// Skip the formatter pass.
    #[arg(long, conflicts_with = "formatter")]
    pub no_format: bool,
}

impl Cli {
    /// Builds the generator configuration from the parsed flags.
    #[must_use]
    pub fn config(&self) -> CodegenConfig {
        let config = CodegenConfig::new().package(&self.package);
        if self.no_format {
            config.without_formatter()
        } else {
            config.formatter(FormatterCommand::new(&self.formatter).arg("-w"))
        }
    }
}

/// Runs a generation for the parsed command line.
///
/// # Errors
/// Returns the generation error with the schema path attached as context.
pub fn run(cli: &Cli) -> anyhow::Result<GenerateReport> {
    let config = cli.config();
    tracing::debug!("Generating with {:?}", config);

    generate_file(&cli.schema, cli.output.as_deref(), &config)
        .with_context(|| format!("failed to generate events from {}", cli.schema.display()))
}
