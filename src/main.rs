//! Zombordle - CLI
//!
//! Daily word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use zombordle::{
    commands::{GameSetup, run_simple, run_today},
    config::Config,
    interactive::{App, run_tui},
    wordlists::local_today,
};

#[derive(Parser)]
#[command(
    name = "zombordle",
    about = "Daily word-guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word (5, 6 or 7 with the built-in lists)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Guesses allowed per game
    #[arg(short, long, global = true)]
    attempts: Option<usize>,

    /// Custom word list file, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Play a random word instead of the word of the day
    #[arg(short, long, global = true)]
    practice: bool,

    /// Settings file (default: <config dir>/zombordle/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Show today's puzzle number
    Today {
        /// Also print the word
        #[arg(short, long)]
        reveal: bool,
    },

    /// Show the effective settings
    Settings {
        /// Save them to the settings file
        #[arg(long)]
        save: bool,
    },
}

/// Logs go to `--log-file` when given; otherwise stderr, silent unless
/// `RUST_LOG` is set, since the TUI owns the terminal
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Settings file values with command-line flags on top
fn effective_config(cli: &Cli) -> Config {
    let mut config = Config::load(cli.config.as_deref());
    if let Some(length) = cli.length {
        config.word_length = length;
    }
    if let Some(attempts) = cli.attempts {
        config.max_attempts = attempts;
    }
    if let Some(path) = &cli.wordlist {
        config.wordlist = Some(path.clone());
    }
    if cli.practice {
        config.practice = true;
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = effective_config(&cli);
    tracing::debug!(?config, "effective settings");

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => {
            let setup = GameSetup::prepare(&config, local_today())?;
            run_tui(App::new(setup))
        }
        Commands::Simple => {
            let setup = GameSetup::prepare(&config, local_today())?;
            run_simple(setup).context("Failed to read input")
        }
        Commands::Today { reveal } => run_today(&config, local_today(), *reveal),
        Commands::Settings { save } => run_settings_command(&cli, &config, *save),
    }
}

fn run_settings_command(cli: &Cli, config: &Config, save: bool) -> Result<()> {
    config.validate()?;
    print!("{}", toml::to_string_pretty(config)?);

    if save {
        let path = cli
            .config
            .clone()
            .or_else(Config::default_path)
            .context("Could not find config directory")?;
        config.save(&path)?;
        println!("\nSaved to {}", path.display());
    }
    Ok(())
}
