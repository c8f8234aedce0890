//! modal - modal harmony from the command line
//!
//! Subcommands:
//! - `modal mode [ROOT]` - Resolve one mode of a parent scale
//! - `modal harmonize [ROOT]` - Seven-chord harmonization table
//! - `modal chord <INTERVAL>...` - Classify an interval set
//! - `modal modes` - List the mode names of a parent scale
//! - `modal config` - Print the effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modal::ModalEngine;
use modalconf::{ModalConfig, OutputFormat};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

use commands::ModeQuery;

#[derive(Parser)]
#[command(name = "modal")]
#[command(about = "Modes, chords and harmonizations of the heptatonic parent scales")]
#[command(version)]
struct Cli {
    /// Config file (replaces ./modal.toml)
    #[arg(long, global = true, env = "MODAL_CONFIG")]
    config: Option<PathBuf>,

    /// Output format: markdown or json
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one mode: notes and chords at every extension level
    Mode {
        /// Root note (C, D♭, Db, C#, ...)
        root: Option<String>,

        /// Parent scale: major, melodic minor, harmonic major, harmonic minor
        #[arg(short, long)]
        scale: Option<String>,

        /// Mode index within the parent scale (0-6)
        #[arg(short, long)]
        mode: Option<usize>,
    },

    /// Harmonize a mode: one chord stack per scale degree
    Harmonize {
        /// Root note
        root: Option<String>,

        /// Parent scale
        #[arg(short, long)]
        scale: Option<String>,

        /// Mode index within the parent scale (0-6)
        #[arg(short, long)]
        mode: Option<usize>,
    },

    /// Classify semitone offsets from a root
    Chord {
        /// Intervals in semitones (0-11)
        #[arg(required = true, value_parser = clap::value_parser!(u8).range(0..12))]
        intervals: Vec<u8>,

        /// Extension level: 3, 7, 9, 11 or 13
        #[arg(short, long)]
        level: Option<u8>,
    },

    /// List the seven mode names of a parent scale
    Modes {
        /// Parent scale
        #[arg(short, long)]
        scale: Option<String>,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries rendered output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, sources) = ModalConfig::load_with_sources_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    init_tracing(&config.telemetry.log_level);
    debug!(files = ?sources.files, env = ?sources.env_overrides, "configuration loaded");

    let format = cli.format.unwrap_or(config.output.format);
    let engine = ModalEngine::new();

    let output = match cli.command {
        Commands::Mode { root, scale, mode } => commands::mode(
            &engine,
            &config,
            format,
            &ModeQuery { root, scale, mode },
        )?,
        Commands::Harmonize { root, scale, mode } => commands::harmonize(
            &engine,
            &config,
            format,
            &ModeQuery { root, scale, mode },
        )?,
        Commands::Chord { intervals, level } => {
            commands::chord(&engine, &config, format, &intervals, level)?
        }
        Commands::Modes { scale } => {
            commands::modes(&engine, &config, format, scale.as_deref())?
        }
        Commands::Config => commands::show_config(&config),
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
