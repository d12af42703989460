use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{RemixError, Result};

/// Default opening message of every conversation.
pub const DEFAULT_GREETING: &str = "Hi there! I'm the VideoRemix AI Assistant. I can help you \
find templates, explain features and pricing, or point you to the right help article. \
What would you like to do today?";

/// Top-level configuration for the assistant.
///
/// Loaded from `~/.remix/config.toml` by default. Every section is optional;
/// missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemixConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

impl RemixConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RemixConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject settings the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        let a = &self.assistant;
        if a.response_delay_min_ms > a.response_delay_max_ms {
            return Err(RemixError::Config(format!(
                "response_delay_min_ms ({}) exceeds response_delay_max_ms ({})",
                a.response_delay_min_ms, a.response_delay_max_ms
            )));
        }
        if a.reveal_min_ms > a.reveal_max_ms {
            return Err(RemixError::Config(format!(
                "reveal_min_ms ({}) exceeds reveal_max_ms ({})",
                a.reveal_min_ms, a.reveal_max_ms
            )));
        }
        if a.greeting.trim().is_empty() {
            return Err(RemixError::Config("greeting cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Conversation pacing and presentation.
///
/// Delay ranges are half-open: a value is drawn from `[min, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Lower bound of the simulated "thinking" delay.
    pub response_delay_min_ms: u64,
    /// Upper bound (exclusive) of the simulated "thinking" delay.
    pub response_delay_max_ms: u64,
    /// Lower bound of the per-character reveal interval.
    pub reveal_min_ms: u64,
    /// Upper bound (exclusive) of the per-character reveal interval.
    pub reveal_max_ms: u64,
    /// Whether assistant replies are typed out character by character.
    pub typing_effect: bool,
    /// First assistant message of every conversation.
    pub greeting: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_min_ms: 800,
            response_delay_max_ms: 1600,
            reveal_min_ms: 15,
            reveal_max_ms: 25,
            typing_effect: true,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

/// Knowledge catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// JSON catalog that replaces the built-in FAQ. `None` uses the built-in one.
    pub catalog_path: Option<String>,
}
