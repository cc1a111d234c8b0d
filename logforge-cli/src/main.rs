//! Command-line syslog toolbox.
//!
//! Generates, parses, and delivers RFC 3164 (BSD) and RFC 5424
//! (structured) syslog messages. Delivery targets come from an optional
//! JSON5 configuration file and can be overridden per invocation.

mod commands;
mod config;
mod sender;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use commands::Command;
use config::CliConfig;

#[derive(Parser, Debug)]
#[command(
    name = "logforge",
    version,
    about = "Generate, parse, and send RFC 3164/5424 syslog messages"
)]
struct Cli {
    /// Path to a JSON5 configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => logforge_codec::load_config::<CliConfig>(path)?,
        None => CliConfig::default(),
    };

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    logforge_codec::init_tracing(&config.logging)?;

    commands::run(cli.command, &config).await
}
