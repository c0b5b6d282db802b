//! Terraform command arguments

use std::path::PathBuf;

use clap::Parser;

use super::common::Scheme;
use crate::config::{defaults, env};

/// Arguments for 'terraform' command
#[derive(Parser, Debug)]
pub struct TerraformArgs {
    /// Write `import` blocks to this file
    #[arg(short = 'i', long, value_name = "FILE")]
    pub imports: Option<PathBuf>,

    /// Write resource configuration to this file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a table of discovered resources
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Overwrite existing output files without asking
    #[arg(short = 'f', long, default_value_t = false)]
    pub force: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl TerraformArgs {
    /// Whether anything would be produced by this invocation
    pub fn has_output(&self) -> bool {
        self.imports.is_some() || self.config.is_some() || self.list
    }

    /// Requested output files, import blocks first
    pub fn output_paths(&self) -> Vec<&PathBuf> {
        self.imports.iter().chain(self.config.iter()).collect()
    }
}

/// Where and how to reach the Retool API
#[derive(Parser, Debug, Clone)]
pub struct ConnectionArgs {
    /// Retool host, e.g. my-org.retool.com
    #[arg(short = 'H', long, env = env::HOST)]
    pub host: Option<String>,

    /// Retool API access token
    #[arg(short = 't', long, env = env::ACCESS_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// URL scheme
    #[arg(long, value_enum, env = env::SCHEME, default_value_t = Scheme::Https, ignore_case = true)]
    pub scheme: Scheme,

    /// Request timeout in seconds
    #[arg(long, env = env::TIMEOUT, default_value_t = defaults::TIMEOUT_SECS)]
    pub timeout: u64,
}
