//! `sprout metadata` command implementation.
//!
//! Assembles the distribution and renders it as a core metadata document,
//! or as JSON with `--json`.

use super::{to_json, CommandContext};
use sprout_core::error::SproutResult;
use sprout_manifest::Distribution;

/// Execute the `sprout metadata` command
pub fn execute(json: bool, ctx: &CommandContext) -> SproutResult<()> {
    let config = ctx.load_config()?;
    let dist = Distribution::assemble(&ctx.cwd, &config)?;

    if json {
        println!("{}", to_json(&dist)?);
    } else {
        print!("{}", dist.render_core_metadata()?);
    }

    Ok(())
}
