use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::MessageError;

/// JSON codec shared by all ceremony envelopes.
///
/// The wire contract is the serde field names; parsing is lenient and
/// tolerates unknown fields, so clients may attach extensions without
/// breaking older servers.
pub trait WireMessage: Serialize + DeserializeOwned + Sized {
    /// Serializes the message into its canonical JSON wire form.
    fn to_json(&self) -> String {
        serde_json::to_string(self).expect("Error serializing wire message")
    }

    /// Parses a message from its JSON wire form, checking structural shape
    /// only. The base64 payload fields stay opaque and are not decoded.
    fn from_json(json: &str) -> Result<Self, MessageError> {
        serde_json::from_str(json).map_err(|err| {
            debug!("rejecting malformed wire message: {}", err);
            MessageError::MalformedMessage(err.to_string())
        })
    }
}

/// Fail-fast presence check for required message fields. The empty string
/// is the "absent" condition; content beyond that is not inspected.
pub(crate) fn require(field: &'static str, value: &str) -> Result<String, MessageError> {
    if value.is_empty() {
        return Err(MessageError::InvalidArgument(field));
    }
    Ok(value.to_string())
}
