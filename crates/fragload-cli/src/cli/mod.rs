//! CLI for the fragload fragment loader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fragload_core::config;
use std::path::PathBuf;

use commands::{run_check, run_fetch, run_render};

/// Top-level CLI for the fragload fragment loader.
#[derive(Debug, Parser)]
#[command(name = "fragload")]
#[command(about = "fragload: deferred fragment loading for page containers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load all marked containers in a page manifest and emit the page.
    Render {
        /// Path to the page manifest (TOML).
        manifest: PathBuf,

        /// Write the assembled page to this file instead of stdout.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Validate a page manifest and show its containers.
    Check {
        /// Path to the page manifest (TOML).
        manifest: PathBuf,
    },

    /// Fetch a single fragment URL and print the body.
    Fetch {
        /// Direct HTTP/HTTPS URL to fetch.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Render { manifest, output } => {
                run_render(&manifest, output.as_deref(), &cfg).await?;
            }
            CliCommand::Check { manifest } => run_check(&manifest)?,
            CliCommand::Fetch { url } => run_fetch(&url, &cfg).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
