use thiserror::Error;

/// Common error type for logforge components.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text does not match the grammar for the declared RFC version,
    /// or a structurally valid token holds an impossible value (unknown
    /// month name, day 32, hour 25).
    #[error("Format error: {0}")]
    Format(String),

    /// A caller-supplied argument is outside the recognized enumeration.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A network send failed or timed out.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using logforge's Error.
pub type Result<T> = std::result::Result<T, Error>;
