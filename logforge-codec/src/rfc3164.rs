//! RFC 3164 (BSD syslog) parser and generator.
//!
//! Wire shape:
//! ```text
//! <PRI>Mon DD HH:MM:SS HOSTNAME TAG[PID]: MESSAGE
//! ```

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::message::{FormatFields, MessageComponents, ParsedMessage};
use crate::priority;

/// Month abbreviations in wire order. Lookup is case-sensitive.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// <PRI>Mon DD HH:MM:SS HOSTNAME TAG[PID]: MESSAGE
// The tag cannot contain ':', '[' or whitespace; the pid bracket captures
// any non-']' text, digits are not required.
static RFC3164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^<(\d+)>([A-Za-z]{3})\s+(\d{1,2})\s+(\d{2}):(\d{2}):(\d{2})\s+(\S+)\s+([^:\[\s]+)(?:\[([^\]]+)\])?:\s*(.*)$",
    )
    .unwrap()
});

/// Parse a raw RFC 3164 message.
///
/// The whole (trimmed) line must match the BSD shape; there is no partial
/// recovery. The timestamp is normalized to ISO 8601 using the current
/// year, since the wire format carries none.
pub fn parse(raw: &str) -> Result<ParsedMessage> {
    let caps = RFC3164_REGEX
        .captures(raw.trim())
        .ok_or_else(|| Error::Format("Invalid RFC 3164 syslog format".to_string()))?;

    let priority = parse_field(&caps[1], "PRI")?;
    let (facility, severity) = priority::decode(priority);

    let timestamp = timestamp_to_iso(
        &caps[2],
        parse_field(&caps[3], "day")?,
        parse_field(&caps[4], "hour")?,
        parse_field(&caps[5], "minute")?,
        parse_field(&caps[6], "second")?,
    )?;

    Ok(ParsedMessage {
        priority,
        facility,
        severity,
        timestamp,
        hostname: caps[7].to_string(),
        message: caps[10].to_string(),
        format: FormatFields::Rfc3164 {
            tag: caps[8].to_string(),
            pid: caps.get(9).map(|pid| pid.as_str().to_string()),
        },
    })
}

/// Render components as an RFC 3164 line.
///
/// All fields have defaults, so generation never fails. The `: ` separator
/// is emitted even when the message is empty.
pub fn generate(components: &MessageComponents) -> String {
    let priority = components.resolved_priority();
    let timestamp = components
        .timestamp
        .clone()
        .unwrap_or_else(current_timestamp);
    let hostname = components.hostname.as_deref().unwrap_or("localhost");
    let tag = components.tag.as_deref().unwrap_or("app");
    let pid = components
        .pid
        .map(|pid| format!("[{pid}]"))
        .unwrap_or_default();
    let message = components.message.as_deref().unwrap_or("");

    format!("<{priority}>{timestamp} {hostname} {tag}{pid}: {message}")
}

/// Current local time in BSD format, e.g. "Jan  1 12:30:45".
/// Single-digit days get a leading space, not a zero.
fn current_timestamp() -> String {
    Local::now().format("%b %e %H:%M:%S").to_string()
}

/// Convert BSD timestamp fields to ISO 8601, substituting the current
/// year. Unknown months and impossible calendar values are rejected.
fn timestamp_to_iso(month: &str, day: u32, hour: u32, minute: u32, second: u32) -> Result<String> {
    let month_index = MONTHS
        .iter()
        .position(|name| *name == month)
        .ok_or_else(|| Error::Format(format!("Invalid month: {month}")))?;

    let timestamp = NaiveDate::from_ymd_opt(Local::now().year(), month_index as u32 + 1, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| {
            Error::Format(format!(
                "Invalid timestamp: {month} {day} {hour:02}:{minute:02}:{second:02}"
            ))
        })?;

    Ok(timestamp.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn parse_field<T: std::str::FromStr>(value: &str, field: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Format(format!("Invalid {field} value: '{value}'")))
}
