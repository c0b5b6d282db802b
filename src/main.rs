//! Retool CLI - Main entry point

use clap::Parser;
use log::{debug, info};

use retool_cli::{run_terraform_command, Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting retool v{}", env!("CARGO_PKG_VERSION"));
    debug!("Batch mode: {}", cli.batch);

    let result = match &cli.command {
        Command::Terraform(args) => run_terraform_command(args, cli.batch).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
