//! # wsc-cli
//!
//! Command-line front end for the contract validator.
//!
//! Loads a serialized contract model, runs every validation rule over it and
//! prints the report. The exit code is 0 when the report passes at the chosen
//! strictness, 1 when it does not, and 2 when the model or configuration
//! cannot be loaded.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wsc_model::ModelLoader;
use wsc_validation::{StrictnessLevel, ValidationConfig, validate_with_config};

#[derive(Parser)]
#[command(name = "wsc")]
#[command(about = "Web service contract validator")]
#[command(version)]
struct Cli {
    /// Log validator progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a contract model
    Validate {
        /// Model file path (JSON, or YAML with a .yaml/.yml extension)
        model: PathBuf,

        /// Validation config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Strictness level, overriding the config file
        #[arg(short, long)]
        strictness: Option<StrictnessLevel>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a command, returning whether its report passed
fn run(command: Commands) -> anyhow::Result<bool> {
    match command {
        Commands::Validate {
            model,
            config,
            format,
            strictness,
        } => {
            tracing::info!("Validating {}", model.display());

            let mut validation_config = match &config {
                Some(path) => ValidationConfig::from_file(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => ValidationConfig::default(),
            };
            if let Some(level) = strictness {
                validation_config.strictness = level;
            }

            let contract = ModelLoader::new()
                .load_from_file(&model)
                .with_context(|| format!("Failed to load model {}", model.display()))?;

            let report = validate_with_config(&contract, &validation_config);
            match format {
                OutputFormat::Text => print!("{}", report.render_text()),
                OutputFormat::Json => println!("{}", report.to_json()?),
            }

            Ok(report.passed)
        }
    }
}
