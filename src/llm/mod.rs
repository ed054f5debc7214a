//! Remote text-generation client and the fixed prompt template.

pub mod client;
pub mod prompt;

pub use client::{GenerationBackend, Message, RemoteGenClient};
