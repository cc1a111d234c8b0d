//! Format dispatch: route parse and generate calls by RFC version tag.

use crate::error::Result;
use crate::message::{MessageComponents, ParsedMessage, RfcVersion};
use crate::{rfc3164, rfc5424};

/// Generate a wire-format line for the given RFC version tag.
///
/// "5424" selects the structured generator; any other tag selects the BSD
/// generator (see [`RfcVersion::from_tag`]). Generation never fails.
pub fn generate(rfc_version: &str, components: &MessageComponents) -> String {
    let generated = match RfcVersion::from_tag(rfc_version) {
        RfcVersion::Rfc5424 => rfc5424::generate(components),
        RfcVersion::Rfc3164 => rfc3164::generate(components),
    };

    tracing::debug!("Generated message: {}", generated);
    generated
}

/// Parse a raw line according to the given RFC version tag.
///
/// Version routing is identical to [`generate`]. Returns a
/// [`crate::Error::Format`] when the line does not match the selected
/// grammar; no partial result is produced.
pub fn parse(rfc_version: &str, raw: &str) -> Result<ParsedMessage> {
    let parsed = match RfcVersion::from_tag(rfc_version) {
        RfcVersion::Rfc5424 => rfc5424::parse(raw),
        RfcVersion::Rfc3164 => rfc3164::parse(raw),
    }?;

    tracing::debug!("Message parsed successfully: {:?}", parsed);
    Ok(parsed)
}
