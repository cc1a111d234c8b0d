//! CLI configuration.

use serde::{Deserialize, Serialize};

use logforge_codec::LoggingConfig;

use crate::sender::Protocol;

/// Complete CLI configuration, loaded from a JSON5 file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default delivery target for `send` and `generate --send`.
    #[serde(default)]
    pub target: TargetConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Delivery target defaults. Command-line flags override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Collector host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Collector port. 514 is the registered syslog port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Transport protocol: "udp" or "tcp".
    #[serde(default)]
    pub protocol: Protocol,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    514
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            protocol: Protocol::default(),
        }
    }
}
