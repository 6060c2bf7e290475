//! Wordbook CLI - keeps the static wordbook page and its data files in sync.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "wordbook")]
#[command(about = "Maintains the data files embedded in the static wordbook page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to wordbook.toml config file
    #[arg(short, long, default_value = "wordbook.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate manifest.json from the results directory
    Manifest {
        /// Results directory (defaults to config or "results")
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Embed the results JSON files into the page script
    Embed {
        /// HTML file to patch (defaults to config or "japan_wordbook.html")
        html: Option<PathBuf>,

        /// Results directory (defaults to config or "results")
        results: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Manifest { dir } => {
            commands::manifest::run(&cli.config, dir)?;
        }
        Commands::Embed { html, results } => {
            commands::embed::run(&cli.config, html, results)?;
        }
    }

    Ok(())
}
