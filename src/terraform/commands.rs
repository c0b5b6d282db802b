//! Terraform command handler

use std::path::Path;

use log::{debug, info};

use crate::cli::TerraformArgs;
use crate::error::{Result, RetoolError};
use crate::output::output_resources;
use crate::retool::{ConnectionSettings, RetoolClient};
use crate::ui::{clear_spinner, confirm_overwrite, create_spinner, existing_files, finish_spinner};

use super::emit::{render_config, render_imports};
use super::import::import_retool_config;

fn write_output(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {} byte(s) to {}", contents.len(), path.display());
    std::fs::write(path, contents)
        .map_err(|e| RetoolError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

/// Run the terraform command
pub async fn run_terraform_command(args: &TerraformArgs, batch: bool) -> Result<()> {
    if !args.has_output() {
        return Err(RetoolError::Config(
            "No output requested. Please provide at least one of:\n\
             \n\
             --imports <FILE>   write import blocks\n\
             --config <FILE>    write resource configuration\n\
             --list             print discovered resources\n"
                .to_string(),
        ));
    }

    let settings = ConnectionSettings::resolve(&args.connection)?;

    let existing = existing_files(&args.output_paths());
    if !confirm_overwrite(&existing, args.force, batch)? {
        return Err(RetoolError::Config(
            "Aborted: output file already exists".to_string(),
        ));
    }

    let client = RetoolClient::new(&settings);
    let spinner = create_spinner("Discovering Retool resources...", batch);
    let snapshot = match import_retool_config(&client).await {
        Ok(snapshot) => {
            finish_spinner(
                spinner,
                &format!("Discovered {} resource(s)", snapshot.resources.len()),
            );
            snapshot
        }
        Err(e) => {
            clear_spinner(spinner);
            return Err(e);
        }
    };

    // Render before writing so a broken reference leaves no partial output
    let config = match &args.config {
        Some(_) => Some(render_config(&snapshot)?),
        None => None,
    };

    if args.list {
        output_resources(&snapshot.resources);
    }

    if let Some(path) = &args.imports {
        write_output(path, &render_imports(&snapshot.resources))?;
        println!(
            "Wrote {} import block(s) to {}",
            snapshot.resources.len(),
            path.display()
        );
    }

    if let (Some(path), Some(config)) = (&args.config, config) {
        write_output(path, &config)?;
        println!(
            "Wrote configuration for {} resource(s) to {}",
            snapshot.resources.len(),
            path.display()
        );
    }

    info!("Terraform generation complete");
    Ok(())
}
