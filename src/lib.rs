//! Wire-message envelopes for the U2F registration and authentication
//! ceremonies, as exchanged between a relying-party server and a client.
//!
//! Every type here is a passive, immutable value: construction, structural
//! equality and JSON (de)serialization, nothing else. Challenge generation,
//! signature verification and ceremony lifecycle tracking belong to the
//! services that produce and consume these messages.

pub mod authentication;
pub mod common;
pub mod registration;

pub use authentication::entities::{AuthenticationChallengeMessage, AuthenticationResponseMessage};
pub use common::error::MessageError;
pub use common::message::WireMessage;
pub use registration::entities::{RegistrationChallengeMessage, RegistrationResponseMessage};

/// Version of the protocol that a U2F token must speak. For the version of
/// the protocol described herein, must be "U2F_V2".
pub const U2F_VERSION: &str = "U2F_V2";
