use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Visual theme variants for the chat UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeVariant {
    /// Classic Blue (default)
    #[default]
    Classic,
    /// Ocean Tide
    Ocean,
    /// Midnight Navy
    Midnight,
    /// Sky Soft
    Sky,
}

impl ThemeVariant {
    pub const VALUES: &[ThemeVariant] =
        &[ThemeVariant::Classic, ThemeVariant::Ocean, ThemeVariant::Midnight, ThemeVariant::Sky];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Classic => "classic",
            ThemeVariant::Ocean => "ocean",
            ThemeVariant::Midnight => "midnight",
            ThemeVariant::Sky => "sky",
        }
    }

    /// Human-readable label shown in the theme menu
    pub fn label(&self) -> &'static str {
        match self {
            ThemeVariant::Classic => "Classic Blue",
            ThemeVariant::Ocean => "Ocean Tide",
            ThemeVariant::Midnight => "Midnight Navy",
            ThemeVariant::Sky => "Sky Soft",
        }
    }

    /// Position of this variant in [`ThemeVariant::VALUES`]
    pub fn index(&self) -> usize {
        Self::VALUES.iter().position(|v| v == self).unwrap_or(0)
    }

    /// The variant after this one, wrapping around
    pub fn next(&self) -> Self {
        Self::VALUES[(self.index() + 1) % Self::VALUES.len()]
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeVariant {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classic" => Ok(ThemeVariant::Classic),
            "ocean" => Ok(ThemeVariant::Ocean),
            "midnight" => Ok(ThemeVariant::Midnight),
            "sky" => Ok(ThemeVariant::Sky),
            _ => Err(Error::Config(ConfigError::InvalidTheme(s.to_string()).to_string())),
        }
    }
}

/// Provider-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase", deny_unknown_fields)]
pub enum ProviderConfig {
    /// Google Gemini `generateContent` endpoint
    #[serde(rename = "gemini")]
    Gemini {
        /// Model name (e.g., "gemini-3-flash-preview")
        #[serde(default = "default_gemini_model")]
        model: String,
        /// Base URL for the API
        #[serde(default = "default_gemini_base_url")]
        base_url: String,
        /// Environment variable holding the API key, read on every call
        #[serde(default = "default_api_key_env")]
        api_key_env: String,
        /// Sampling temperature
        #[serde(default = "default_temperature")]
        temperature: f32,
        /// Nucleus sampling probability
        #[serde(default = "default_top_p")]
        top_p: f32,
    },
}

impl ProviderConfig {
    pub fn model(&self) -> &str {
        match self {
            ProviderConfig::Gemini { model, .. } => model,
        }
    }

    pub fn api_key_env(&self) -> &str {
        match self {
            ProviderConfig::Gemini { api_key_env, .. } => api_key_env,
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            ProviderConfig::Gemini { temperature, .. } => *temperature,
        }
    }

    pub fn top_p(&self) -> f32 {
        match self {
            ProviderConfig::Gemini { top_p, .. } => *top_p,
        }
    }

    /// Replace the model name, keeping every other setting
    pub fn with_model(self, new_model: impl Into<String>) -> Self {
        match self {
            ProviderConfig::Gemini { base_url, api_key_env, temperature, top_p, .. } => {
                ProviderConfig::Gemini { model: new_model.into(), base_url, api_key_env, temperature, top_p }
            }
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Gemini {
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.95
}

/// Terminal UI settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Theme selected at startup
    #[serde(default)]
    pub theme: ThemeVariant,
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive for stderr output
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format for stderr: pretty, json or compact
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Rotating file output
    #[serde(default)]
    pub file: FileLoggingConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: FileLoggingConfig::default() }
    }
}

/// `[logging.file]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Filter directive for the file layer
    #[serde(default = "default_file_log_level")]
    pub level: String,
    /// Directory for log files (default: ~/.xofa/logs)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self { enabled: false, level: default_file_log_level(), dir: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_file_log_level() -> String {
    "debug".to_string()
}

/// Root configuration structure for xofa.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str).map_err(|e| Error::Config(ConfigError::from(e).to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        let ProviderConfig::Gemini { model, base_url, api_key_env, temperature, top_p } = &self.provider;

        if model.trim().is_empty() {
            return Err(Error::Config(ConfigError::EmptyField("provider.model").to_string()));
        }
        if base_url.trim().is_empty() {
            return Err(Error::Config(ConfigError::EmptyField("provider.base_url").to_string()));
        }
        if api_key_env.trim().is_empty() {
            return Err(Error::Config(ConfigError::EmptyField("provider.api_key_env").to_string()));
        }
        if !(0.0..=2.0).contains(temperature) {
            return Err(Error::Config(
                ConfigError::OutOfRange { field: "provider.temperature", value: *temperature }.to_string(),
            ));
        }
        if !(*top_p > 0.0 && *top_p <= 1.0) {
            return Err(Error::Config(ConfigError::OutOfRange { field: "provider.top_p", value: *top_p }.to_string()));
        }

        Ok(())
    }

    /// Get example configuration (as a string)
    pub fn example() -> &'static str {
        r#"# Xofa Configuration Example
# Copy this file to xofa.toml and customize as needed.
# Every key is optional; missing keys fall back to the values shown here.

[provider]
# Provider type (only "gemini" is supported)
provider = "gemini"
# Model name to use
model = "gemini-3-flash-preview"
# Base URL of the Gemini REST API
base_url = "https://generativelanguage.googleapis.com/v1beta"
# Environment variable holding the API key (read on every request)
api_key_env = "GEMINI_API_KEY"
# Sampling parameters
temperature = 0.7
top_p = 0.95

[ui]
# Theme: "classic", "ocean", "midnight" or "sky"
theme = "classic"

[logging]
# Filter for stderr output (XOFA_LOG overrides)
level = "warn"
# "pretty", "json" or "compact" (XOFA_LOG_FORMAT overrides)
format = "pretty"

[logging.file]
# Daily-rotated JSON logs in ~/.xofa/logs (XOFA_LOG_DIR overrides)
enabled = false
level = "debug"
"#
    }
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Unknown theme name
    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    /// Required field is empty
    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    /// Numeric field outside its allowed range
    #[error("value out of range for {field}: {value}")]
    OutOfRange { field: &'static str, value: f32 },

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err.to_string())
    }
}
