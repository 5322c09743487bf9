//! swgen - service worker generator CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use swgen::cli::{Cli, Commands};
use swgen::config::SwgenConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Init { force } => swgen::cli::init::write_default_config(&cli.config, *force),
        Commands::Generate { .. } => {
            let config = SwgenConfig::load(&cli)?;
            swgen::cli::generate::run(&config)
        }
    }
}
