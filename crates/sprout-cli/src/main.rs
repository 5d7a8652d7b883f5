//! # sprout-cli
//!
//! Packaging toolkit for Python distributions.
//!
//! This is the main entry point for the Sprout CLI tool. It handles command
//! parsing, sets up logging and error handling, and dispatches to the
//! appropriate command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use sprout_core::error::SproutResult;
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Packaging toolkit for Python distributions
#[derive(Parser)]
#[command(name = "sprout", version, about = "Packaging toolkit for Python distributions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory to operate on (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project_root: Option<Utf8PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a project in the current directory
    Init,
    /// Check the manifest, requirements, and packages
    Check,
    /// List the dependency entries from the requirements file
    Requirements {
        /// Requirements file to read instead of the configured one
        #[arg(value_name = "FILE")]
        file: Option<Utf8PathBuf>,
        /// Emit the entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the packages that would ship with the distribution
    Packages {
        /// Emit the package list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the distribution metadata
    Metadata {
        /// Emit the assembled distribution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting Sprout CLI v{}", env!("CARGO_PKG_VERSION"));

    if let Err(error) = run_cli(cli) {
        let formatter = ErrorFormatter::new();
        eprintln!("{}", formatter.format_error(&error));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> SproutResult<()> {
    let ctx = CommandContext::new(cli.project_root)?;

    commands::dispatch_command(cli.command, &ctx)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "sprout_cli={},sprout_manifest={},sprout_core={}",
            level, level, level
        ))
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Sprout encountered an unexpected error: {}", panic_info);
        eprintln!("🌱 Sprout crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/sprout-dist/sprout/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
