use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::U2F_VERSION;
use crate::common::error::MessageError;
use crate::common::message::{WireMessage, require};

/// Server-issued challenge opening an authentication ceremony.
///
/// The issuing service generates the challenge nonce and picks the key
/// handle of a previously registered credential; this envelope only carries
/// them to the client and later serves as the comparison reference when the
/// signed response comes back. All fields are set once at construction and
/// never mutated, so two instances are interchangeable iff they compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationChallengeMessage {
    /// Version of the protocol that the U2F token must speak.
    version: String,
    /// The websafe-base64-encoded challenge.
    challenge: String,
    /// The application id that the RP would like to assert. The U2F token
    /// enforces that the key handle below is associated with this
    /// application id.
    app_id: String,
    /// websafe-base64 encoding of the key handle obtained from the U2F
    /// token during registration.
    key_handle: String,
}

impl AuthenticationChallengeMessage {
    /// Builds a challenge message for the given credential. The version is
    /// pinned to [`U2F_VERSION`] and is not a caller input.
    pub fn new(challenge: &str, app_id: &str, key_handle: &str) -> Result<Self, MessageError> {
        Ok(Self {
            version: U2F_VERSION.to_string(),
            challenge: require("challenge", challenge)?,
            app_id: require("appId", app_id)?,
            key_handle: require("keyHandle", key_handle)?,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn challenge(&self) -> &str {
        &self.challenge
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn key_handle(&self) -> &str {
        &self.key_handle
    }
}

impl WireMessage for AuthenticationChallengeMessage {}

/// The client's reply to an [`AuthenticationChallengeMessage`]: the signed
/// client data and the raw signature produced by the token.
///
/// The signature is not checked here; the verification service decodes and
/// verifies it against the originally issued challenge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponseMessage {
    /// The websafe-base64-encoded client data the token signed over.
    client_data: String,
    /// websafe-base64 encoding of the raw authentication response.
    signature_data: String,
    /// The key handle echoed back from the challenge.
    key_handle: String,
}

impl AuthenticationResponseMessage {
    pub fn new(
        client_data: &str,
        signature_data: &str,
        key_handle: &str,
    ) -> Result<Self, MessageError> {
        Ok(Self {
            client_data: require("clientData", client_data)?,
            signature_data: require("signatureData", signature_data)?,
            key_handle: require("keyHandle", key_handle)?,
        })
    }

    pub fn client_data(&self) -> &str {
        &self.client_data
    }

    pub fn signature_data(&self) -> &str {
        &self.signature_data
    }

    pub fn key_handle(&self) -> &str {
        &self.key_handle
    }
}

impl WireMessage for AuthenticationResponseMessage {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn challenge_message() -> AuthenticationChallengeMessage {
        AuthenticationChallengeMessage::new("abc123", "https://example.com", "khABC").unwrap()
    }

    #[test]
    fn test_new_pins_protocol_version() {
        let msg = challenge_message();
        assert_eq!(msg.version(), U2F_VERSION);
        assert_eq!(msg.challenge(), "abc123");
        assert_eq!(msg.app_id(), "https://example.com");
        assert_eq!(msg.key_handle(), "khABC");
    }

    #[test]
    fn test_new_rejects_empty_required_fields() {
        let err = AuthenticationChallengeMessage::new("", "https://example.com", "khABC");
        assert!(matches!(err, Err(MessageError::InvalidArgument("challenge"))));

        let err = AuthenticationChallengeMessage::new("abc123", "", "khABC");
        assert!(matches!(err, Err(MessageError::InvalidArgument("appId"))));

        let err = AuthenticationChallengeMessage::new("abc123", "https://example.com", "");
        assert!(matches!(err, Err(MessageError::InvalidArgument("keyHandle"))));
    }

    #[test]
    fn test_serializes_to_exact_wire_form() {
        let json = challenge_message().to_json();
        assert_eq!(
            json,
            r#"{"version":"U2F_V2","challenge":"abc123","appId":"https://example.com","keyHandle":"khABC"}"#
        );
    }

    #[test]
    fn test_json_round_trip_preserves_equality() {
        let msg = challenge_message();
        let parsed = AuthenticationChallengeMessage::from_json(&msg.to_json()).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_parse_is_order_insensitive_and_tolerates_unknown_fields() {
        let json = r#"{
            "keyHandle": "khABC",
            "appId": "https://example.com",
            "challenge": "abc123",
            "version": "U2F_V2",
            "sessionId": "ignored"
        }"#;
        let parsed = AuthenticationChallengeMessage::from_json(json).unwrap();
        assert_eq!(parsed, challenge_message());
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let json = r#"{"version":"U2F_V2","challenge":"abc123","appId":"https://example.com"}"#;
        let err = AuthenticationChallengeMessage::from_json(json).unwrap_err();
        assert!(matches!(err, MessageError::MalformedMessage(_)));
    }

    #[test]
    fn test_parse_rejects_mistyped_field() {
        let json = r#"{"version":"U2F_V2","challenge":42,"appId":"https://example.com","keyHandle":"khABC"}"#;
        let err = AuthenticationChallengeMessage::from_json(json).unwrap_err();
        assert!(matches!(err, MessageError::MalformedMessage(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = AuthenticationChallengeMessage::from_json("not json").unwrap_err();
        assert!(matches!(err, MessageError::MalformedMessage(_)));
    }

    #[test]
    fn test_equal_instances_are_interchangeable_map_keys() {
        let a = challenge_message();
        let b = challenge_message();
        assert_eq!(a, b);

        let mut issued = HashMap::new();
        issued.insert(a, "pending");
        assert_eq!(issued.get(&b), Some(&"pending"));
    }

    #[test]
    fn test_key_handle_difference_breaks_equality() {
        let a = challenge_message();
        let b = AuthenticationChallengeMessage::new("abc123", "https://example.com", "khXYZ").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_response_round_trip_preserves_equality() {
        let msg = AuthenticationResponseMessage::new("Y2xpZW50", "c2ln", "khABC").unwrap();
        let parsed = AuthenticationResponseMessage::from_json(&msg.to_json()).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_response_rejects_empty_signature_data() {
        let err = AuthenticationResponseMessage::new("Y2xpZW50", "", "khABC");
        assert!(matches!(
            err,
            Err(MessageError::InvalidArgument("signatureData"))
        ));
    }
}
