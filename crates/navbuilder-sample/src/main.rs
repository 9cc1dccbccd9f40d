mod commands;
mod config;
mod navigator;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::Destinations;
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::ui::list;

#[derive(Parser)]
#[command(name = "navbuilder-sample", about = "List/detail sample built on navbuilder")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every destination's route template and argument bindings
    Routes,
    /// Show the list screen
    List,
    /// Open the detail screen for a list entry
    Open {
        /// Index of the entry on the list screen
        index: usize,
        /// Pass the optional arguments instead of relying on defaults
        #[arg(long)]
        with_options: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let destinations = Destinations::new()?;
    info!("Loaded {} list entries", config.items.len());

    match cli.command {
        Command::Routes => println!("{}", commands::routes(&destinations)?),
        Command::List => print!("{}", list::render(&config.items)),
        Command::Open { index, with_options } => {
            print!("{}", commands::open(&destinations, &config.items, index, with_options)?)
        }
    }

    Ok(())
}
