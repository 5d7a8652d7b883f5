//! `sprout init` command implementation.
//!
//! Initializes a Sprout project in the current directory: a sprout.toml
//! manifest, a requirements file, and a starter package.

use super::CommandContext;
use sprout_core::error::{SproutError, SproutResult};
use sprout_manifest::discover::INIT_FILE;
use sprout_manifest::requirements::EDITABLE_SELF_MARKER;
use std::fs;

/// Execute the `sprout init` command
pub fn execute(ctx: &CommandContext) -> SproutResult<()> {
    let manifest_path = ctx.manifest_path();

    if manifest_path.exists() {
        ctx.output.info("sprout.toml already exists, skipping initialization");
        return Ok(());
    }

    ctx.output.step("🌱", "Initializing Sprout project in current directory");

    let dir_name = ctx.cwd.file_name().unwrap_or("my-project");
    let name = sanitize_distribution_name(dir_name);

    fs::write(&manifest_path, create_sprout_toml_content(&name)).map_err(|e| SproutError::Io {
        message: format!("Failed to create {}", manifest_path),
        source: e,
    })?;
    ctx.output.success("Created sprout.toml");

    // Requirements file listing the project itself as an editable install
    let requirements_path = ctx.cwd.join("requirements.txt");
    if !requirements_path.exists() {
        fs::write(&requirements_path, format!("{}\n", EDITABLE_SELF_MARKER)).map_err(|e| {
            SproutError::Io {
                message: format!("Failed to create {}", requirements_path),
                source: e,
            }
        })?;
        ctx.output.success("Created requirements.txt");
    }

    // Starter package so discovery has something to find
    let module = module_name(&name);
    let package_dir = ctx.cwd.join(&module);
    if !package_dir.exists() {
        ctx.output.step("📁", &format!("Creating package directory {}", module));
        fs::create_dir_all(&package_dir).map_err(|e| SproutError::Io {
            message: format!("Failed to create {}", package_dir),
            source: e,
        })?;
        fs::write(package_dir.join(INIT_FILE), "").map_err(|e| SproutError::Io {
            message: format!("Failed to create {}/{}", package_dir, INIT_FILE),
            source: e,
        })?;
    }

    ctx.output.success("Initialized Sprout project");
    ctx.output.info("");
    ctx.output.info("Next steps:");
    ctx.output.info("  sprout check");
    ctx.output.info("  sprout metadata");

    Ok(())
}

/// Turn a directory name into a valid distribution name
pub(crate) fn sanitize_distribution_name(raw: &str) -> String {
    let mapped: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = mapped.trim_matches(|c: char| !c.is_ascii_alphanumeric());
    if trimmed.is_empty() {
        "my-project".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Turn a distribution name into an importable module name
pub(crate) fn module_name(name: &str) -> String {
    let mapped: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    match mapped.chars().next() {
        None => "app".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", mapped),
        Some(_) => mapped,
    }
}

fn create_sprout_toml_content(name: &str) -> String {
    format!(
        r#"[package]
name = "{}"
version = "0.1.0"

[requirements]
file = "requirements.txt"
"#,
        name
    )
}
