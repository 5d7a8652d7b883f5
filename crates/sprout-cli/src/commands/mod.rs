//! Command implementations and dispatch logic.
//!
//! This module contains all command handlers and the central dispatch system.
//! Each command is implemented as a function that takes a CommandContext.

use camino::Utf8PathBuf;
use serde::Serialize;
use sprout_core::error::{SproutError, SproutResult};
use sprout_manifest::config::{load_from_file, SproutToml};
use sprout_manifest::MANIFEST_FILE;
use tracing::info;

pub mod check;
pub mod init;
pub mod metadata;
pub mod packages;
pub mod requirements;

#[cfg(test)]
mod tests;

use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(project_root: Option<Utf8PathBuf>) -> SproutResult<Self> {
        let cwd = match project_root {
            Some(root) => root,
            None => {
                let cwd = std::env::current_dir().map_err(|e| SproutError::Io {
                    message: "Failed to get current directory".to_string(),
                    source: e,
                })?;

                Utf8PathBuf::from_path_buf(cwd).map_err(|path| SproutError::ConfigValidation {
                    field: "cwd".to_string(),
                    reason: format!("current directory {} is not valid UTF-8", path.display()),
                })?
            },
        };

        let output = OutputHandler::new();

        Ok(Self { cwd, output })
    }

    /// Path of the project manifest
    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.cwd.join(MANIFEST_FILE)
    }

    /// Load the project manifest
    pub fn load_config(&self) -> SproutResult<SproutToml> {
        load_from_file(&self.manifest_path())
    }
}

/// Dispatch a command to its handler
pub fn dispatch_command(command: Commands, ctx: &CommandContext) -> SproutResult<()> {
    match command {
        Commands::Init => {
            info!("Initializing project in current directory");
            init::execute(ctx)
        },
        Commands::Check => {
            info!("Checking project configuration");
            check::execute(ctx)
        },
        Commands::Requirements { file, json } => {
            info!("Listing requirements (file: {:?}, json: {})", file, json);
            requirements::execute(file, json, ctx)
        },
        Commands::Packages { json } => {
            info!("Listing packages (json: {})", json);
            packages::execute(json, ctx)
        },
        Commands::Metadata { json } => {
            info!("Rendering distribution metadata (json: {})", json);
            metadata::execute(json, ctx)
        },
        Commands::Version => {
            info!("Showing version information");
            show_version(ctx)
        },
    }
}

/// Serialize a value for `--json` output
pub(crate) fn to_json<T: Serialize>(value: &T) -> SproutResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        SproutError::io(
            "Failed to serialize JSON output".to_string(),
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
        )
    })
}

fn show_version(ctx: &CommandContext) -> SproutResult<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("BUILD_DATE");
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.entry(&format!("🌱 Sprout v{}", version));
    ctx.output.entry(&format!("Built: {}", build_date));
    ctx.output.entry(&format!("Target: {}", target));
    ctx.output.entry(&format!("Rust: {}", env!("RUSTC_VERSION")));

    Ok(())
}
