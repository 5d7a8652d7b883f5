//! `sprout packages` command implementation.

use super::{to_json, CommandContext};
use sprout_core::error::SproutResult;
use sprout_manifest::resolve_packages;

/// Execute the `sprout packages` command
pub fn execute(json: bool, ctx: &CommandContext) -> SproutResult<()> {
    let config = ctx.load_config()?;
    let packages = resolve_packages(&ctx.cwd, &config)?;

    if json {
        println!("{}", to_json(&packages)?);
    } else {
        for package in &packages {
            ctx.output.entry(package);
        }
        ctx.output.info(&format!("{} packages", packages.len()));
    }

    Ok(())
}
