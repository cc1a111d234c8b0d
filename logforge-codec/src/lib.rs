//! Logforge codec library.
//!
//! Shared building blocks for the logforge tools:
//!
//! - [`message`] - syslog data model (`MessageComponents`, `ParsedMessage`)
//! - [`priority`] - PRI encoding between facility/severity and priority
//! - [`rfc3164`] - BSD syslog parser and generator
//! - [`rfc5424`] - structured syslog parser and generator
//! - [`dispatch`] - parser/generator selection by RFC version tag
//! - [`config`] - configuration loading (JSON5 format)
//! - [`error`] - error types
//!
//! The codec is pure and stateless: parsers hold nothing beyond their
//! compiled grammar, so calls may run concurrently without coordination.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod priority;
pub mod rfc3164;
pub mod rfc5424;

// Re-export commonly used types at the crate root
pub use config::{LogFormat, LoggingConfig, load_config, parse_config};
pub use error::{Error, Result};
pub use message::{FormatFields, MessageComponents, ParsedMessage, RfcVersion};
pub use priority::{DEFAULT_PRIORITY, Facility, Severity};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// # Example
///
/// ```ignore
/// use logforge_codec::{LogFormat, LoggingConfig, init_tracing};
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Json,
/// };
/// init_tracing(&config)?;
/// ```
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
