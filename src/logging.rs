//! Logging configuration and structured logging setup
//!
//! Log records go to stderr so command output on stdout stays
//! machine-readable.

use std::env;
use std::io;
use std::str::FromStr;

use anyhow::Result;
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human format
    #[default]
    Pretty,
    /// One line per record
    Compact,
    /// `JSON` records for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log format '{}' (expected pretty, compact or json)",
                other
            )),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive (trace, debug, info, warn, error, or full `EnvFilter` syntax)
    pub level: String,
    pub format: LogFormat,
    /// Colour output; defaults to whether stderr is a terminal
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            ansi: io::stderr().is_terminal(),
        }
    }
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, format: LogFormat) -> Self {
        Self {
            level: level.into(),
            format,
            ..Self::default()
        }
    }

    /// Create logging configuration from environment variables
    ///
    /// `COOKMATE_LOG` wins over `RUST_LOG`; `COOKMATE_LOG_FORMAT` picks the format.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("COOKMATE_LOG")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".into());
        let format = env::var("COOKMATE_LOG_FORMAT")
            .ok()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();
        Self::new(level, format)
    }

    /// Builder: raise verbosity by `-v` count (1 = debug, 2+ = trace)
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.level = "debug".into(),
            _ => self.level = "trace".into(),
        }
        self
    }

    /// Filter for `level`; an unparsable directive falls back to `info`
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| {
            EnvFilter::default().add_directive(tracing::Level::INFO.into())
        })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.filter());

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_ansi(self.ansi)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_ansi(self.ansi)
                    .with_writer(io::stderr);
                registry.with(layer).try_init()?;
            }
        }

        tracing::debug!(level = %self.level, format = ?self.format, "logging initialized");
        Ok(())
    }
}
