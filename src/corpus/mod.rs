//! Cached corpus input: chunk records and the blob loader.
//!
//! The upstream chunking/embedding step serializes its output as a bincode
//! blob of chunk records. This module deserializes that blob once, at
//! startup, into an ordered in-memory sequence. Nothing here mutates a
//! chunk after load.

mod loader;
mod types;

pub use loader::load;
pub use types::{Chunk, ChunkSequence};
