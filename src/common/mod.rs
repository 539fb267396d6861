pub mod error;
pub mod message;
