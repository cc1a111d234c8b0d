//! Shared syslog message data model.

use serde::{Deserialize, Serialize};

use crate::priority::{self, DEFAULT_PRIORITY};

/// Syslog wire format selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RfcVersion {
    /// RFC 3164 (BSD syslog).
    #[default]
    #[serde(rename = "3164")]
    Rfc3164,
    /// RFC 5424 (structured syslog).
    #[serde(rename = "5424")]
    Rfc5424,
}

impl RfcVersion {
    /// Select a format from a version tag.
    ///
    /// "5424" selects RFC 5424; any other tag, including an empty one,
    /// falls back to RFC 3164. Callers that never declare a version get
    /// the BSD format, which is the historical default.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "5424" {
            Self::Rfc5424
        } else {
            Self::Rfc3164
        }
    }

    /// The version tag as it appears in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rfc3164 => "3164",
            Self::Rfc5424 => "5424",
        }
    }
}

impl std::fmt::Display for RfcVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input to message generation.
///
/// One structure covers both formats; each generator reads its own group
/// and ignores the other. Every field except `rfc_version` is optional
/// and defaulted at generation time, so generation never fails. Numeric
/// fields are not range-checked here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageComponents {
    #[serde(default)]
    pub rfc_version: RfcVersion,

    /// Explicit PRI value. Overrides facility/severity when present.
    pub priority: Option<u16>,
    pub facility: Option<u16>,
    pub severity: Option<u16>,

    /// Pre-formatted timestamp, emitted verbatim.
    pub timestamp: Option<String>,
    pub hostname: Option<String>,

    // RFC 3164 specific
    pub tag: Option<String>,
    pub pid: Option<u32>,

    // RFC 5424 specific
    pub app_name: Option<String>,
    pub proc_id: Option<String>,
    pub msg_id: Option<String>,
    pub structured_data: Option<String>,

    // Common
    pub message: Option<String>,
}

impl MessageComponents {
    /// Resolve the PRI value: explicit priority wins, then an encoded
    /// facility/severity pair, then the fixed default (auth.crit).
    pub fn resolved_priority(&self) -> u16 {
        self.priority
            .or_else(|| match (self.facility, self.severity) {
                (Some(facility), Some(severity)) => Some(priority::encode(facility, severity)),
                _ => None,
            })
            .unwrap_or(DEFAULT_PRIORITY)
    }
}

/// Fields that only exist in one of the two wire formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rfc_version")]
pub enum FormatFields {
    /// RFC 3164 remainder: the tag and its optional bracketed pid.
    #[serde(rename = "3164")]
    Rfc3164 { tag: String, pid: Option<String> },
    /// RFC 5424 remainder. `None` stands for the NILVALUE (`-`) token.
    #[serde(rename = "5424")]
    Rfc5424 {
        version: u16,
        app_name: Option<String>,
        proc_id: Option<String>,
        msg_id: Option<String>,
        structured_data: Option<String>,
    },
}

/// A fully parsed syslog message.
///
/// Produced only when the whole input line matched; a parse failure never
/// yields a partial value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMessage {
    pub priority: u16,
    /// Derived: `priority >> 3`.
    pub facility: u16,
    /// Derived: `priority & 7`.
    pub severity: u16,
    /// ISO 8601 for RFC 3164 input; verbatim for RFC 5424 input.
    pub timestamp: String,
    pub hostname: String,
    pub message: String,
    #[serde(flatten)]
    pub format: FormatFields,
}

impl ParsedMessage {
    /// Which wire format produced this message.
    pub fn rfc_version(&self) -> RfcVersion {
        match self.format {
            FormatFields::Rfc3164 { .. } => RfcVersion::Rfc3164,
            FormatFields::Rfc5424 { .. } => RfcVersion::Rfc5424,
        }
    }

    /// Rebuild generation inputs from the parsed fields.
    ///
    /// The timestamp carries over in its parsed representation (ISO 8601
    /// for RFC 3164 input), not the original wire form. A non-numeric
    /// RFC 3164 pid is dropped, since generation renders pids as integers.
    pub fn to_components(&self) -> MessageComponents {
        let mut components = MessageComponents {
            rfc_version: self.rfc_version(),
            priority: Some(self.priority),
            timestamp: Some(self.timestamp.clone()),
            hostname: Some(self.hostname.clone()),
            message: Some(self.message.clone()),
            ..MessageComponents::default()
        };

        match &self.format {
            FormatFields::Rfc3164 { tag, pid } => {
                components.tag = Some(tag.clone());
                components.pid = pid.as_ref().and_then(|pid| pid.parse().ok());
            }
            FormatFields::Rfc5424 {
                app_name,
                proc_id,
                msg_id,
                structured_data,
                ..
            } => {
                components.app_name = app_name.clone();
                components.proc_id = proc_id.clone();
                components.msg_id = msg_id.clone();
                components.structured_data = structured_data.clone();
            }
        }

        components
    }
}
