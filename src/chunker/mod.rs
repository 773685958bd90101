pub mod fixed;
pub mod semantic;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use fixed::chunk_fixed;
pub use semantic::{chunk_semantic, chunk_semantic_with_marker};

pub const DEFAULT_CHUNK_SIZE: usize = 100;
pub const DEFAULT_OVERLAP: usize = 20;
pub const DEFAULT_HEADER_MARKER: char = '#';

/// A contiguous slice of a source document
///
/// `start_index..end_index` is a word range (fixed-size strategy) or a line
/// range (semantic strategy) of the source. `sequence_number` starts at 0 and
/// increases by one per chunk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub start_index: usize,
    pub end_index: usize,
    pub sequence_number: usize,
}

/// Chunking strategy configuration
///
/// Deserializes from a tagged map, e.g. in JSON
/// `{"strategy": "fixed_size", "chunk_size": 50, "overlap": 10}` or
/// `{"strategy": "semantic"}`. Omitted fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ChunkStrategy {
    /// Windows of `chunk_size` words, consecutive windows share `overlap` words
    FixedSize {
        #[serde(default = "default_chunk_size")]
        chunk_size: usize,
        #[serde(default = "default_overlap")]
        overlap: usize,
    },
    /// Sections delimited by header lines starting with `header_marker`
    Semantic {
        #[serde(default = "default_header_marker")]
        header_marker: char,
    },
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}

fn default_header_marker() -> char {
    DEFAULT_HEADER_MARKER
}

impl Default for ChunkStrategy {
    fn default() -> Self {
        ChunkStrategy::FixedSize {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl ChunkStrategy {
    /// Check the window parameters
    ///
    /// # Errors
    /// * `Error::InvalidInput` - `chunk_size == 0` or `overlap >= chunk_size`
    pub fn validate(&self) -> Result<()> {
        match *self {
            ChunkStrategy::FixedSize { chunk_size, overlap } => {
                validate_window(chunk_size, overlap)
            }
            ChunkStrategy::Semantic { .. } => Ok(()),
        }
    }
}

pub(crate) fn validate_window(chunk_size: usize, overlap: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::invalid_input("chunk_size must be greater than 0"));
    }
    if overlap >= chunk_size {
        return Err(Error::invalid_input(format!(
            "overlap ({overlap}) must be less than chunk_size ({chunk_size})"
        )));
    }
    Ok(())
}

/// Validated chunker
///
/// The strategy is checked once in `new`, after that `chunk` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunker {
    strategy: ChunkStrategy,
}

impl Chunker {
    pub fn new(strategy: ChunkStrategy) -> Result<Self> {
        strategy.validate()?;
        Ok(Self { strategy })
    }

    #[inline]
    pub fn strategy(&self) -> &ChunkStrategy {
        &self.strategy
    }

    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        match self.strategy {
            ChunkStrategy::FixedSize { chunk_size, overlap } => {
                fixed::chunk_words(text, chunk_size, overlap)
            }
            ChunkStrategy::Semantic { header_marker } => {
                chunk_semantic_with_marker(text, header_marker)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_is_valid_fixed_size() {
        let chunker = Chunker::new(ChunkStrategy::default()).unwrap();
        assert_eq!(
            chunker.strategy(),
            &ChunkStrategy::FixedSize { chunk_size: 100, overlap: 20 }
        );
    }

    #[test]
    fn invalid_window_is_rejected_at_construction() {
        let zero = ChunkStrategy::FixedSize { chunk_size: 0, overlap: 0 };
        assert!(matches!(Chunker::new(zero), Err(Error::InvalidInput(_))));
        let overlap = ChunkStrategy::FixedSize { chunk_size: 3, overlap: 3 };
        assert!(matches!(Chunker::new(overlap), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn deserializes_tagged_config_with_defaults() {
        let fixed: ChunkStrategy =
            serde_json::from_str(r#"{"strategy": "fixed_size", "chunk_size": 50}"#).unwrap();
        assert_eq!(fixed, ChunkStrategy::FixedSize { chunk_size: 50, overlap: 20 });

        let semantic: ChunkStrategy = serde_json::from_str(r#"{"strategy": "semantic"}"#).unwrap();
        assert_eq!(semantic, ChunkStrategy::Semantic { header_marker: '#' });

        let custom: ChunkStrategy =
            serde_json::from_str(r#"{"strategy": "semantic", "header_marker": "="}"#).unwrap();
        assert_eq!(custom, ChunkStrategy::Semantic { header_marker: '=' });

        assert!(serde_json::from_str::<ChunkStrategy>(r#"{"strategy": "sentences"}"#).is_err());
    }

    #[test]
    fn chunker_dispatches_on_strategy() {
        let fixed = Chunker::new(ChunkStrategy::FixedSize { chunk_size: 2, overlap: 0 }).unwrap();
        let texts: Vec<String> = fixed.chunk("w1 w2 w3").into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["w1 w2", "w3"]);

        let semantic = Chunker::new(ChunkStrategy::Semantic { header_marker: '#' }).unwrap();
        let texts: Vec<String> = semantic
            .chunk("# A\nfoo\n# B\nbar")
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["foo", "bar"]);
    }
}
