//! Colors Knob CLI - a headless host for the knob controller.
//!
//! Replays recorded gesture sessions, shows the color for a knob angle and
//! manages the knob configuration file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use knob_core::KnobConfig;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::{config as config_cmd, OutputFormat};
use config::Config;

/// Colors Knob CLI - drive the knob controller without a UI.
#[derive(Parser, Debug)]
#[command(
    name = "knob",
    author,
    version,
    about = "Colors Knob: replay gestures and inspect the angle-to-hue mapping",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file to use instead of the platform default.
    #[arg(short, long, global = true, env = "KNOB_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a recorded session and print the emitted effects.
    Replay {
        /// Session file (JSON).
        session: PathBuf,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the drag color for a knob angle in degrees.
    Color {
        /// Knob angle in degrees.
        #[arg(allow_negative_numbers = true)]
        degrees: f64,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Manage knob configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let explicit_path = cli.config.as_deref();

    match cli.command {
        Commands::Replay { session, format } => {
            let config = Config::load(explicit_path)?;
            let format: OutputFormat = format.parse()?;
            commands::replay::execute(&config, &session, format)?;
        }

        Commands::Color { degrees, format } => {
            let config = Config::load(explicit_path)?;
            let format: OutputFormat = format.parse()?;
            commands::color::execute(&config, degrees, format)?;
        }

        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => {
                let config = Config::load(explicit_path)?;
                config_cmd::show(&config)?;
            }
            ConfigCommands::Set { key, value } => {
                // Edit the file as stored, without environment overrides
                let mut config = Config::load_file(explicit_path)?;
                config_cmd::set(&mut config, &key, &value)?;
            }
            ConfigCommands::Get { key } => {
                let config = Config::load(explicit_path)?;
                config_cmd::get(&config, &key)?;
            }
            ConfigCommands::Reset => {
                let mut config = Config {
                    knob: KnobConfig::default(),
                    path: cli.config.clone().or_else(Config::config_file_path),
                };
                config_cmd::reset(&mut config)?;
            }
            ConfigCommands::Path => {
                match cli.config.clone().or_else(Config::config_file_path) {
                    Some(path) => println!("{}", path.display()),
                    None => println!("(no config file path available)"),
                }
            }
        },
    }

    Ok(())
}
