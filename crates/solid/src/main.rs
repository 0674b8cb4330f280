//! SOLID capability playground - Entry Point

// Force-link solid-providers to ensure linkme registrations are included
extern crate solid_providers;

use anyhow::Context;
use clap::Parser;
use solid::cli::{Cli, run_command};
use solid_infrastructure::config::ConfigLoader;
use solid_infrastructure::init_app;
use solid_infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("loading configuration")?;
    init_logging(&config.logging)?;

    let context = init_app(config).context("bootstrapping registry")?;
    for line in run_command(&context, &cli.command).await? {
        println!("{line}");
    }
    Ok(())
}
