mod cli;
mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doomloader",
    version,
    about = "DOOMLOADER - NAM model loader and amp simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a directory for NAM models, metadata and audio files.
    Scan {
        /// Directory to scan (recursively).
        directory: PathBuf,
        /// Check that models and metadata files pair up.
        #[arg(long)]
        validate: bool,
        /// Write a JSON manifest of the directory to this file.
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },
    /// Show what a .nam or .json file loads as.
    Info {
        /// Model or metadata file.
        file: PathBuf,
        /// Also show model name, payload keys and file details.
        #[arg(long)]
        detailed: bool,
    },
    /// Load a model and run a 440 Hz test tone through the amp chain.
    Simulate(cli::simulate::SimulateArgs),
}

/// Logs go to stderr so they never mix with command output.
/// Level comes from `RUST_LOG`, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints `Error: <message>` to stdout for a failed command and returns the
/// process exit status.
fn exit_status(result: Result<(), CliError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            println!("{}", error_line(&e));
            1
        }
    }
}

fn error_line(error: &CliError) -> String {
    format!("Error: {error}")
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Scan {
            directory,
            validate,
            manifest,
        } => cli::scan::run(&directory, validate, manifest.as_deref()),
        Command::Info { file, detailed } => cli::info::run(&file, detailed),
        Command::Simulate(args) => cli::simulate::run(&args),
    };

    let status = exit_status(result);
    if status != 0 {
        std::process::exit(status);
    }
}
