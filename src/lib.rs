//! retool-cli - Work with a Retool organization from the command line
//!
//! Reads folders, groups, permissions, spaces, source control and SSO
//! settings through the Retool public API and renders them as Terraform
//! `import` blocks plus matching `resource` configuration.
//!
//! # Example
//!
//! ```bash
//! export RETOOL_HOST=my-org.retool.com
//! export RETOOL_ACCESS_TOKEN=retool_01...
//!
//! # Write import blocks and resource configuration
//! retool terraform --imports imports.tf --config main.tf
//!
//! # Only show what would be imported
//! retool tf --list
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod retool;
pub mod terraform;
pub mod ui;

pub use cli::{Cli, Command, ConnectionArgs, Scheme, TerraformArgs};
pub use error::{Result, RetoolError};
pub use output::{output_resources, ResourceRow};
pub use retool::{ConnectionSettings, RetoolClient};
pub use terraform::{
    import_retool_config, render_config, render_imports, run_terraform_command,
    ImportSnapshot, ImportableResource, ResourceKind,
};
