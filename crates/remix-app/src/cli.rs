//! CLI argument definitions for the `remix` binary.
//!
//! Uses `clap` with derive macros.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use remix_core::RemixConfig;

/// VideoRemix AI Assistant in the terminal.
#[derive(Parser, Debug)]
#[command(name = "remix", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// JSON knowledge catalog to use instead of the built-in FAQ.
    #[arg(long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Skip the thinking delay and typing effect.
    #[arg(long = "instant", global = true)]
    pub instant: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (default).
    Chat,
    /// Answer a single question and exit.
    Ask {
        /// The question; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Print the active knowledge catalog as JSON.
    Catalog,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > REMIX_CONFIG env var > ~/.remix/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("REMIX_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Resolve the catalog path.
    ///
    /// Priority: --catalog flag > config file value. `None` means built-in.
    pub fn resolve_catalog_path(&self, config: &RemixConfig) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| config.knowledge.catalog_path.as_ref().map(PathBuf::from))
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".remix").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".remix").join("config.toml");
    }
    PathBuf::from("config.toml")
}
