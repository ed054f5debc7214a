//! Chunk records produced by the upstream corpus chunker.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One unit of source text, submitted per generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Text content handed to the generation prompt.
    pub content: String,
    /// Source metadata attached by the chunker (document id, page, etc.).
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Chunk {
    /// Creates a chunk with no metadata.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Builder method to attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Ordered, indexed sequence of chunks.
///
/// Index order is processing order and determines quarantine file naming;
/// insertion order is preserved exactly as produced by the chunker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkSequence(Vec<Chunk>);

impl ChunkSequence {
    /// Number of chunks in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the sequence holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the chunk at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.0.get(index)
    }

    /// Iterates chunks in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.0.iter()
    }
}

impl From<Vec<Chunk>> for ChunkSequence {
    fn from(chunks: Vec<Chunk>) -> Self {
        Self(chunks)
    }
}

impl<'a> IntoIterator for &'a ChunkSequence {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
