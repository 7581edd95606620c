//! Logging and observability.
//!
//! Built on the tracing ecosystem with structured events, optional rotating
//! file output and a switch to silence stderr while the terminal UI owns the
//! screen.
//!
//! # Environment Variables
//!
//! - `XOFA_LOG`: Filter directive (like `RUST_LOG`), e.g., `xofa_ui=debug`
//! - `XOFA_LOG_FORMAT`: Output format for stderr: `pretty`, `json`, `compact`
//! - `XOFA_LOG_DIR`: Directory for file logs (default `~/.xofa/logs`)
//!
//! # Configuration
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "pretty"
//!
//! [logging.file]
//! enabled = false
//! level = "debug"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use xofa_core::logging;
//!
//! let _guard = logging::init_logging(None)?;
//! # Ok::<(), xofa_core::Error>(())
//! ```

use crate::Error;
use crate::config::{FileLoggingConfig, LoggingConfig as ConfigLoggingConfig};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format for stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    Compact,
}

impl LogFormat {
    /// All available log formats.
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    /// Parse a log format from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    /// Get the string representation of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

/// Logging configuration wrapper that bridges config and logging modules.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level for stderr output.
    pub level: String,
    /// Output format for stderr.
    pub format: LogFormat,
    /// Whether stderr receives events at all.
    pub stderr: bool,
    /// File logging configuration (optional).
    pub file: Option<FileLoggingConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: LogFormat::default(), stderr: true, file: None }
    }
}

impl From<ConfigLoggingConfig> for LoggingConfig {
    fn from(config: ConfigLoggingConfig) -> Self {
        let format = LogFormat::parse_str(&config.format).unwrap_or_default();

        Self {
            level: config.level,
            format,
            stderr: true,
            file: if config.file.enabled { Some(config.file) } else { None },
        }
    }
}

impl LoggingConfig {
    /// Create a new logging config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable file logging.
    pub fn with_file_logging(mut self, config: FileLoggingConfig) -> Self {
        self.file = Some(config);
        self
    }

    /// Turn stderr output off (used while the terminal UI is drawing).
    pub fn without_stderr(mut self) -> Self {
        self.stderr = false;
        self
    }

    /// Filter directive for stderr: `XOFA_LOG`, then `RUST_LOG`, then the configured level.
    fn filter_directive(&self) -> String {
        env::var("XOFA_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.level.clone())
    }

    /// Detect if stderr is a TTY for pretty formatting.
    fn is_tty() -> bool {
        atty::is(atty::Stream::Stderr)
    }

    /// Determine the appropriate format for stderr output.
    fn detect_format(&self) -> LogFormat {
        if let Ok(fmt_str) = env::var("XOFA_LOG_FORMAT")
            && let Some(fmt) = LogFormat::parse_str(&fmt_str)
        {
            return fmt;
        }

        if self.format == LogFormat::Pretty && !Self::is_tty() { LogFormat::Compact } else { self.format }
    }

    /// Get the log directory path.
    fn log_dir(file: &FileLoggingConfig) -> Result<PathBuf, Error> {
        if let Ok(custom_dir) = env::var("XOFA_LOG_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }
        if let Some(dir) = &file.dir {
            return Ok(dir.clone());
        }

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;

        Ok(PathBuf::from(home).join(".xofa").join("logs"))
    }
}

/// Keeps the non-blocking file writer alive; drop it last.
#[derive(Debug, Default)]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the global tracing subscriber.
///
/// Sets up an optional stderr layer (pretty, json or compact) and an optional
/// daily-rotated JSON file layer, each with its own filter.
pub fn init_logging(config: Option<LoggingConfig>) -> Result<LoggingGuard, Error> {
    let config = config.unwrap_or_default();
    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut guard = LoggingGuard::default();

    if config.stderr {
        let filter = EnvFilter::try_new(config.filter_directive()).unwrap_or_else(|_| EnvFilter::new("warn"));
        let layer: BoxedLayer = match config.detect_format() {
            LogFormat::Pretty => fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(true)
                .with_filter(filter)
                .boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(io::stderr).with_filter(filter).boxed(),
            LogFormat::Compact => fmt::layer().compact().with_writer(io::stderr).with_filter(filter).boxed(),
        };
        layers.push(layer);
    }

    if let Some(file_config) = &config.file {
        let log_dir = LoggingConfig::log_dir(file_config)?;
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| Error::Config(format!("Failed to create log directory: {}", e)))?;

        let file_appender = tracing_appender::rolling::daily(log_dir, "xofa.log");
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard._file = Some(worker_guard);

        let filter = EnvFilter::try_new(&file_config.level).unwrap_or_else(|_| EnvFilter::new("debug"));
        layers.push(fmt::layer().json().with_writer(non_blocking).with_filter(filter).boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

/// Shorten user or model text before it goes into a debug event.
pub fn preview(content: &str, max_chars: usize) -> String {
    let total = content.chars().count();
    if total <= max_chars {
        return content.to_string();
    }

    let mut truncated = content.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated.push_str(&format!(" ({} total chars)", total));
    truncated
}
