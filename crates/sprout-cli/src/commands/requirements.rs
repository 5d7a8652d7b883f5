//! `sprout requirements` command implementation.
//!
//! Prints the dependency entries loaded from the requirements file, after
//! the editable self-install entry has been dropped.

use super::{to_json, CommandContext};
use camino::Utf8PathBuf;
use sprout_core::error::SproutResult;
use sprout_manifest::load_requirements;

/// Execute the `sprout requirements` command
pub fn execute(file: Option<Utf8PathBuf>, json: bool, ctx: &CommandContext) -> SproutResult<()> {
    let path = match file {
        Some(path) if path.is_absolute() => path,
        Some(path) => ctx.cwd.join(path),
        None => {
            let config = ctx.load_config()?;
            ctx.cwd.join(&config.requirements.file)
        },
    };

    let entries = load_requirements(&path)?;

    if json {
        println!("{}", to_json(&entries)?);
    } else {
        for entry in &entries {
            ctx.output.entry(entry);
        }
        ctx.output.info(&format!("{} entries from {}", entries.len(), path));
    }

    Ok(())
}
