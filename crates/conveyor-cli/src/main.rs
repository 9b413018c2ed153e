//! conveyor-slicer CLI - inspect slicer presets and stored configurations
//!
//! Every command prints the wire representation handed to the slicer
//! invocation step. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use conveyor_slicer::{Extruder, Profile, Quality, SlicerConfiguration};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "conveyor-slicer")]
#[command(about = "Inspect conveyor slicer configurations", long_about = None)]
struct Cli {
    /// Log verbosity
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for TraceLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => TraceLevel::TRACE,
            LogLevel::Debug => TraceLevel::DEBUG,
            LogLevel::Info => TraceLevel::INFO,
            LogLevel::Warn => TraceLevel::WARN,
            LogLevel::Error => TraceLevel::ERROR,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration
    Defaults,
    /// Print the configuration for a quality tier
    Preset {
        /// Quality tier (low, medium, high)
        quality: Quality,
        /// Extruder to print with (left, right)
        #[arg(short, long)]
        extruder: Option<Extruder>,
    },
    /// Parse and validate a stored JSON representation
    Check {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Resolve a TOML print profile
    Profile {
        /// Path to the TOML profile
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(TraceLevel::from(cli.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match cli.command {
        Commands::Defaults => SlicerConfiguration::default_configuration(),
        Commands::Preset { quality, extruder } => preset(quality, extruder),
        Commands::Check { file } => check_file(&file)?,
        Commands::Profile { file } => Profile::load(&file)
            .and_then(|profile| profile.resolve())
            .with_context(|| format!("Failed to resolve profile {}", file.display()))?,
    };

    println!("{}", config.to_json()?);
    Ok(())
}

fn preset(quality: Quality, extruder: Option<Extruder>) -> SlicerConfiguration {
    let mut config = SlicerConfiguration::for_quality(quality);
    if let Some(extruder) = extruder {
        config.set_extruder(extruder);
    }
    config
}

fn check_file(path: &Path) -> Result<SlicerConfiguration> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = SlicerConfiguration::from_json(&json)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    info!(path = %path.display(), slicer = %config.slicer(), "configuration is valid");
    Ok(config)
}
