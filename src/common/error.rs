use thiserror::Error;

/// Failures surfaced by message construction and wire parsing. Both are
/// returned synchronously to the caller; re-issuing a challenge after a
/// malformed client response is the calling service's decision.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Required field is missing or empty: {0}")]
    InvalidArgument(&'static str),

    #[error("Malformed wire message: {0}")]
    MalformedMessage(String),
}
