use anyhow::Result;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, FileFormat};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationConfig {
    /// Upper bound on occurrences the CLI will print for one rule. Unbounded when absent.
    pub max_occurrences: Option<usize>,
}

impl GenerationConfig {
    /// ## Summary
    /// Returns `true` when `count` occurrences fit under the configured cap.
    #[must_use]
    pub fn allows(&self, count: usize) -> bool {
        self.max_occurrences.is_none_or(|max| count <= max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSet {
    #[default]
    Korean,
    English,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub labels: LabelSet,
}

impl Settings {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder().set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from defaults, an optional `cadence.toml`, and
    /// `CADENCE__`-prefixed environment variables, in increasing precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env, e.g. CADENCE__GENERATION__MAX_OCCURRENCES=500
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or does not match the settings shape.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` file, and `cadence.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
