//! `precon-tags` command-line entry point.
//!
//! Reports go to stdout; logs go to stderr and are filtered by `RUST_LOG`
//! (default `warn`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use precon_tags::{config, render, PreconTags};

/// Creature-type tag coverage and suggestions for the precon dataset
#[derive(Parser, Debug)]
#[command(name = "precon-tags")]
#[command(version)]
struct Cli {
    /// Path to the deck dataset (JSON, optionally .gz)
    #[arg(long, global = true, env = config::DATASET_ENV_VAR, default_value = config::DEFAULT_DATASET_PATH)]
    data: PathBuf,

    /// Emit the report as JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count decks missing primary or secondary creature types
    Coverage {
        /// Number of empty-primary decks to list
        #[arg(long, default_value_t = config::DEFAULT_COVERAGE_LIMIT)]
        limit: usize,
    },

    /// Suggest creature types from commander and deck names
    Suggest {
        /// Number of suggestions to print
        #[arg(long, default_value_t = config::DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,

        /// JSON object of trigger -> label to use instead of the built-in table
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// List every tag in use, power levels, and theme grouping sizes
    Catalog,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut builder = PreconTags::builder().dataset_path(&cli.data);
    if let Commands::Suggest {
        lexicon: Some(path),
        ..
    } = &cli.command
    {
        builder = builder.lexicon_path(path);
    }
    let tags = builder
        .build()
        .with_context(|| format!("Failed to load deck dataset from {}", cli.data.display()))?;
    info!("{}", tags);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Coverage { limit } => {
            let report = tags.coverage().report();
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                render::write_coverage(&mut out, &report, limit)?;
            }
        }
        Commands::Suggest { limit, .. } => {
            let suggestions = tags.suggester().suggestions();
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &suggestions)?;
                writeln!(out)?;
            } else {
                render::write_suggestions(&mut out, &suggestions, limit)?;
            }
        }
        Commands::Catalog => {
            let report = tags.catalog().report();
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &report)?;
                writeln!(out)?;
            } else {
                render::write_catalog(&mut out, &report)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
