//! User confirmation prompts for potentially destructive operations

use std::path::PathBuf;

use dialoguer::Confirm;

use crate::error::Result;

/// Output files that already exist on disk
pub fn existing_files<'a>(paths: &[&'a PathBuf]) -> Vec<&'a PathBuf> {
    paths.iter().copied().filter(|p| p.exists()).collect()
}

/// Ask before overwriting existing output files
///
/// Returns `true` when there is nothing to overwrite, when `force` is set, or
/// when the user agrees. In batch mode without `force` it returns `false`
/// (fails safe) instead of prompting.
pub fn confirm_overwrite(existing: &[&PathBuf], force: bool, batch_mode: bool) -> Result<bool> {
    if existing.is_empty() || force {
        return Ok(true);
    }

    let names = existing
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    if batch_mode {
        eprintln!(
            "Refusing to overwrite {} in batch mode. Use --force to overwrite.",
            names
        );
        return Ok(false);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Overwrite {}?", names))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
