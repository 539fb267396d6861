use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::U2F_VERSION;
use crate::common::error::MessageError;
use crate::common::message::{WireMessage, require};

/// Server-issued challenge opening a registration ceremony. Unlike the
/// authentication variant there is no key handle yet; the token mints one
/// and returns it inside the registration response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationChallengeMessage {
    /// Version of the protocol that the to-be-registered U2F token must
    /// speak.
    version: String,
    /// The websafe-base64-encoded challenge.
    challenge: String,
    /// The application id the credential will be bound to.
    app_id: String,
}

impl RegistrationChallengeMessage {
    /// Builds a registration challenge. The version is pinned to
    /// [`U2F_VERSION`] and is not a caller input.
    pub fn new(challenge: &str, app_id: &str) -> Result<Self, MessageError> {
        Ok(Self {
            version: U2F_VERSION.to_string(),
            challenge: require("challenge", challenge)?,
            app_id: require("appId", app_id)?,
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
}

impl WireMessage for RegistrationChallengeMessage {}

/// The client's reply to a [`RegistrationChallengeMessage`]: the raw
/// registration data from the token and the client data it attests to.
/// Attestation parsing and verification happen downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponseMessage {
    /// websafe-base64 encoding of the raw registration response.
    registration_data: String,
    /// The websafe-base64-encoded client data the token signed over.
    client_data: String,
}

impl RegistrationResponseMessage {
    pub fn new(registration_data: &str, client_data: &str) -> Result<Self, MessageError> {
        Ok(Self {
            registration_data: require("registrationData", registration_data)?,
            client_data: require("clientData", client_data)?,
        })
    }

    pub fn registration_data(&self) -> &str {
        &self.registration_data
    }

    pub fn client_data(&self) -> &str {
        &self.client_data
    }
}

impl WireMessage for RegistrationResponseMessage {}
