//! CLI argument parsing

mod common;
mod terraform;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::Scheme;
pub use terraform::{ConnectionArgs, TerraformArgs};

/// Retool command-line client
#[derive(Parser, Debug)]
#[command(name = "retool")]
#[command(version)]
#[command(about = "Work with a Retool organization from the command line", long_about = None)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate Terraform import blocks and configuration for the organization
    #[command(visible_alias = "tf")]
    Terraform(TerraformArgs),
}
