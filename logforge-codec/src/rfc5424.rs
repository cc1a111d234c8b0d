//! RFC 5424 (structured syslog) parser and generator.
//!
//! Wire shape:
//! ```text
//! <PRI>VERSION TIMESTAMP HOSTNAME APP-NAME PROCID MSGID STRUCTURED-DATA MSG
//! ```

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::message::{FormatFields, MessageComponents, ParsedMessage};
use crate::priority;

// <PRI>VERSION TIMESTAMP HOSTNAME APP-NAME PROCID MSGID SD MSG
// STRUCTURED-DATA is either the NILVALUE or one or more [..] elements;
// everything after it is the free-form message.
static RFC5424_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^<(\d+)>(\d+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(-|\[.*?\](?:\[.*?\])*)\s*(.*)$",
    )
    .unwrap()
});

/// Parse a raw RFC 5424 message.
///
/// The whole (trimmed) line must match; there is no partial recovery and
/// no leniency on field count. The timestamp is carried through verbatim:
/// RFC 5424 timestamps are already machine-readable, so unlike the BSD
/// format nothing is reformatted. APP-NAME, PROCID, MSGID and
/// STRUCTURED-DATA decode the NILVALUE (`-`) to `None`; the hostname is
/// always verbatim, even when it is `-`.
pub fn parse(raw: &str) -> Result<ParsedMessage> {
    let caps = RFC5424_REGEX
        .captures(raw.trim())
        .ok_or_else(|| Error::Format("Invalid RFC 5424 syslog format".to_string()))?;

    let priority = parse_field(&caps[1], "PRI")?;
    let version = parse_field(&caps[2], "VERSION")?;
    let (facility, severity) = priority::decode(priority);

    Ok(ParsedMessage {
        priority,
        facility,
        severity,
        timestamp: caps[3].to_string(),
        hostname: caps[4].to_string(),
        message: caps[9].to_string(),
        format: FormatFields::Rfc5424 {
            version,
            app_name: nilvalue(&caps[5]),
            proc_id: nilvalue(&caps[6]),
            msg_id: nilvalue(&caps[7]),
            structured_data: nilvalue(&caps[8]),
        },
    })
}

/// Render components as an RFC 5424 line. The version field is always the
/// literal `1`; absent optional fields render as the NILVALUE.
pub fn generate(components: &MessageComponents) -> String {
    let priority = components.resolved_priority();
    let timestamp = components
        .timestamp
        .clone()
        .unwrap_or_else(current_timestamp);
    let hostname = components.hostname.as_deref().unwrap_or("localhost");
    let app_name = components.app_name.as_deref().unwrap_or("-");
    let proc_id = components.proc_id.as_deref().unwrap_or("-");
    let msg_id = components.msg_id.as_deref().unwrap_or("-");
    let structured_data = components.structured_data.as_deref().unwrap_or("-");
    let message = components.message.as_deref().unwrap_or("");

    format!(
        "<{priority}>1 {timestamp} {hostname} {app_name} {proc_id} {msg_id} {structured_data} {message}"
    )
}

/// Current local time as ISO 8601 with a literal `Z` appended, e.g.
/// "2024-01-15T12:30:45.123456Z".
///
/// The suffix does not mean the time was converted to UTC; it is part of
/// the wire layout downstream consumers expect, so it stays as-is.
fn current_timestamp() -> String {
    format!("{}Z", Local::now().format("%Y-%m-%dT%H:%M:%S%.6f"))
}

/// Map the RFC 5424 NILVALUE (`-`) to `None`.
fn nilvalue(token: &str) -> Option<String> {
    if token == "-" {
        None
    } else {
        Some(token.to_string())
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, field: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Format(format!("Invalid {field} value: '{value}'")))
}
