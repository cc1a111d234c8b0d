//! CLI subcommands: generate, parse, and send.

use std::io::Read;

use anyhow::Result;
use clap::{Args, Subcommand};

use logforge_codec::{Facility, MessageComponents, ParsedMessage, RfcVersion, Severity, dispatch};

use crate::config::CliConfig;
use crate::sender::{self, Protocol};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a syslog message from components.
    Generate(GenerateArgs),
    /// Parse a raw syslog message and print its fields as JSON.
    Parse(ParseArgs),
    /// Send a raw syslog message to a collector.
    Send(SendArgs),
}

/// Delivery target overrides. Unset values fall back to the config file.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Collector host.
    #[arg(long)]
    pub host: Option<String>,

    /// Collector port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Transport protocol: "udp" or "tcp".
    #[arg(long)]
    pub protocol: Option<String>,
}

impl TargetArgs {
    fn resolve(&self, config: &CliConfig) -> Result<(String, u16, Protocol)> {
        let protocol = match &self.protocol {
            Some(tag) => tag.parse()?,
            None => config.target.protocol,
        };

        Ok((
            self.host
                .clone()
                .unwrap_or_else(|| config.target.host.clone()),
            self.port.unwrap_or(config.target.port),
            protocol,
        ))
    }
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// RFC version: "3164" or "5424". Anything else means 3164.
    #[arg(long, default_value = "3164")]
    pub rfc: String,

    /// Explicit PRI value. Overrides facility/severity.
    #[arg(long)]
    pub priority: Option<u16>,

    /// Facility code (0-23).
    #[arg(long)]
    pub facility: Option<u16>,

    /// Severity code (0-7).
    #[arg(long)]
    pub severity: Option<u16>,

    /// Pre-formatted timestamp. Defaults to the current time.
    #[arg(long)]
    pub timestamp: Option<String>,

    #[arg(long)]
    pub hostname: Option<String>,

    /// RFC 3164 tag.
    #[arg(long)]
    pub tag: Option<String>,

    /// RFC 3164 process id, rendered as "[pid]" after the tag.
    #[arg(long)]
    pub pid: Option<u32>,

    /// RFC 5424 APP-NAME.
    #[arg(long)]
    pub app_name: Option<String>,

    /// RFC 5424 PROCID.
    #[arg(long)]
    pub proc_id: Option<String>,

    /// RFC 5424 MSGID.
    #[arg(long)]
    pub msg_id: Option<String>,

    /// RFC 5424 STRUCTURED-DATA, e.g. '[origin@1 ip="10.0.0.1"]'.
    #[arg(long)]
    pub structured_data: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Re-parse the generated message and print the fields.
    #[arg(long)]
    pub verify: bool,

    /// Send the generated message to the configured target.
    #[arg(long)]
    pub send: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

impl GenerateArgs {
    fn components(&self) -> MessageComponents {
        MessageComponents {
            rfc_version: RfcVersion::from_tag(&self.rfc),
            priority: self.priority,
            facility: self.facility,
            severity: self.severity,
            timestamp: self.timestamp.clone(),
            hostname: self.hostname.clone(),
            tag: self.tag.clone(),
            pid: self.pid,
            app_name: self.app_name.clone(),
            proc_id: self.proc_id.clone(),
            msg_id: self.msg_id.clone(),
            structured_data: self.structured_data.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// RFC version: "3164" or "5424". Anything else means 3164.
    #[arg(long, default_value = "3164")]
    pub rfc: String,

    /// Raw message. Reads stdin when omitted.
    pub raw_message: Option<String>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Raw message to deliver.
    pub raw_message: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

/// Run the selected subcommand.
pub async fn run(command: Command, config: &CliConfig) -> Result<()> {
    match command {
        Command::Generate(args) => generate(args, config).await,
        Command::Parse(args) => parse(args),
        Command::Send(args) => send(args, config).await,
    }
}

async fn generate(args: GenerateArgs, config: &CliConfig) -> Result<()> {
    let generated = dispatch::generate(&args.rfc, &args.components());
    println!("{generated}");

    if args.verify {
        let parsed = dispatch::parse(&args.rfc, &generated)?;
        print_parsed(&parsed)?;
    }

    if args.send {
        let (host, port, protocol) = args.target.resolve(config)?;
        sender::send(protocol, &generated, &host, port).await?;
        println!("Sent to {host}:{port} ({protocol})");
    }

    Ok(())
}

fn parse(args: ParseArgs) -> Result<()> {
    let raw = match args.raw_message {
        Some(raw) => raw,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let parsed = dispatch::parse(&args.rfc, &raw)?;
    print_parsed(&parsed)?;
    Ok(())
}

async fn send(args: SendArgs, config: &CliConfig) -> Result<()> {
    let (host, port, protocol) = args.target.resolve(config)?;
    sender::send(protocol, &args.raw_message, &host, port).await?;
    println!("Sent to {host}:{port} ({protocol})");
    Ok(())
}

/// Print a one-line facility.severity summary followed by the full field
/// set as pretty JSON.
fn print_parsed(parsed: &ParsedMessage) -> Result<()> {
    let facility = Facility::from_code(parsed.facility)
        .map(|facility| facility.as_str())
        .unwrap_or("unknown");
    let severity = Severity::from_code(parsed.severity)
        .map(|severity| severity.as_str())
        .unwrap_or("unknown");

    println!("# {facility}.{severity} (priority {})", parsed.priority);
    println!("{}", serde_json::to_string_pretty(parsed)?);
    Ok(())
}
