//! Clientsmith CLI
//!
//! Generates a Ruby HTTP client gem from a YAML API configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clientsmith_define::{ConfigError, load_config};
use clientsmith_gen::builder::{BuildReport, Builder};
use clientsmith_gen::errors::GeneratorError;
use clientsmith_gen::output::{DryRunSink, FsSink};
use colored::Colorize;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Clientsmith - turns an API configuration into a Ruby client gem
#[derive(Parser, Debug)]
#[command(name = "clientsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the client gem described by a configuration file
    Build {
        /// Path to the YAML configuration
        #[arg(value_name = "CONFIG_FILE")]
        config_file: PathBuf,

        /// Directory the gem is written into
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Print generated files instead of writing them
        #[arg(long)]
        dry_run: bool,
    },
}

fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,clientsmith_gen=info,clientsmith_define=info".to_string(),
            2 => "info,clientsmith_gen=debug,clientsmith_define=debug".to_string(),
            _ => "debug,clientsmith_gen=trace,clientsmith_define=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn build(config_file: &Path, output: &Path, dry_run: bool) -> Result<BuildReport, GeneratorError> {
    let config = load_config(config_file)?;
    tracing::info!(
        config = %config_file.display(),
        output = %output.display(),
        dry_run,
        "generating client"
    );

    let builder = Builder::new(&config);
    if dry_run {
        builder.build(&mut DryRunSink::stdout())
    } else {
        builder.build(&mut FsSink::new(output)?)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    match cli.command {
        Commands::Build {
            config_file,
            output,
            dry_run,
        } => match build(&config_file, &output, dry_run) {
            Ok(report) if dry_run => {
                println!("{}", format!("Dry run complete ({} files)", report.len()).green());
            }
            Ok(report) => {
                println!(
                    "{}",
                    format!("Wrapper generated successfully ({} files)", report.len()).green()
                );
            }
            Err(GeneratorError::Config(err @ ConfigError::NotFound { .. })) => {
                eprintln!("{}", format!("Error: {}", err).red());
                std::process::exit(1);
            }
            Err(err) => {
                eprintln!("{}", format!("Error generating wrapper: {}", err).red());
                std::process::exit(1);
            }
        },
    }
}
