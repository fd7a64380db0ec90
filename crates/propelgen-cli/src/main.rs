//! propelgen CLI - Generate Java classes from a Propel schema
//!
//! ```text
//! propelgen -s schema.yml -p co.nstant.in -o src/main/java/co/nstant/in
//! ```
//!
//! Exit status is 0 when the schema was read, even if some entities or
//! properties were skipped; `--strict` turns those into a failure. Missing
//! flags exit with status 2 before anything is read.

use anyhow::{Context, Result};
use clap::Parser;
use propelgen_core::{GenerationReport, Generator, GeneratorConfig, Schema};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

mod logging;

#[derive(Parser)]
#[command(name = "propelgen")]
#[command(author, version, about = "Generate Java classes from a Propel schema", long_about = None)]
#[command(after_help = "Example: propelgen -s schema.yml -p co.nstant.in -o /tmp/")]
struct Cli {
    /// Path to the Propel schema (YAML, JSON or TOML)
    #[arg(short, long)]
    schema: PathBuf,

    /// Java package of the generated classes
    #[arg(short, long)]
    package: String,

    /// Output directory for generated code
    #[arg(short, long)]
    output: PathBuf,

    /// Exit with a failure status if any entity or property was skipped
    #[arg(long)]
    strict: bool,

    /// Log debug output (overridden by PROPELGEN_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(report) if cli.strict && report.has_errors() => {
            error!(
                errors = report.error_count(),
                "Generation finished with errors"
            );
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<GenerationReport> {
    let config = GeneratorConfig::new(&cli.schema, &cli.package, &cli.output);
    let generator = Generator::new(&config).context("Invalid settings")?;

    let schema = Schema::load(config.schema_path())
        .with_context(|| format!("Failed to load schema {:?}", config.schema_path()))?;

    let report = generator.run(&schema)?;

    Ok(report)
}
