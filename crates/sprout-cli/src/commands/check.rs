//! `sprout check` command implementation.
//!
//! Validates the manifest, the requirements file, and the package list, and
//! reports what the assembled distribution would contain.

use super::CommandContext;
use sprout_core::error::{SproutError, SproutResult};
use sprout_manifest::discover::INIT_FILE;
use sprout_manifest::requirements::collect_specs;
use sprout_manifest::Distribution;

/// Execute the `sprout check` command
pub fn execute(ctx: &CommandContext) -> SproutResult<()> {
    ctx.output.step("🔍", "Checking project configuration");

    let config = ctx.load_config()?;

    // Included packages bypass discovery, so verify them on disk here
    let packages_root = ctx.cwd.join(&config.packages.root);
    for name in &config.packages.include {
        let marker = packages_root.join(name.replace('.', "/")).join(INIT_FILE);
        if !marker.is_file() {
            ctx.output
                .error(&format!("Included package '{}' has no {} on disk", name, INIT_FILE));
            return Err(SproutError::ConfigValidation {
                field: "packages.include".to_string(),
                reason: format!("package '{}' not found under {}", name, packages_root),
            });
        }
    }

    let dist = Distribution::assemble(&ctx.cwd, &config)?;
    let specs = collect_specs(&dist.install_requires)?;

    ctx.output.success(&format!(
        "Manifest OK: {} v{}",
        dist.metadata.name, dist.metadata.version
    ));
    ctx.output.info(&format!(
        "{} dependency entries ({} installable)",
        dist.install_requires.len(),
        specs.len()
    ));

    if dist.packages.is_empty() {
        ctx.output.warn("No packages found; the distribution would ship no code");
    } else {
        ctx.output.info(&format!("{} packages", dist.packages.len()));
    }

    ctx.output.success("Project is ready to package");

    Ok(())
}
