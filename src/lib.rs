//! This crate is a small text retrieval toolkit: a tokenizer, a TF-IDF
//! vectorizer, vector similarity metrics and document chunking.

pub mod chunker;
pub mod error;
pub mod similarity;
pub mod tokenizer;
pub mod vectorizer;

/// Error and Result
/// `InvalidInput` for bad configuration (empty corpus, zero chunk size,
/// overlap >= chunk size), `DimensionMismatch` for vectors of unequal length.
pub use error::{Error, Result};

/// Tokenizer
/// Lower-cases the text, turns punctuation into separators and splits on
/// whitespace. Used by both fit and transform.
pub use tokenizer::tokenize;

/// TF-IDF Vectorizer
/// `fit` builds a `VectorizerState` from a training corpus:
/// - The vocabulary, each term with a dense index in first-seen order
/// - The IDF table aligned with the vocabulary
/// - The number of training documents
///
/// The state is read-only after fitting and projects any document onto a
/// dense vector of length `vocab_size()` with `transform`. Terms outside the
/// vocabulary are ignored.
///
/// # Serialization
/// Supported.
pub use vectorizer::{fit, fit_with, VectorizerState};

/// Fit phase of the vectorizer
/// Accumulates documents one by one, `finalize()` freezes the result into a
/// `VectorizerState`.
pub use vectorizer::builder::FitBuilder;

/// Term Frequency structure
/// Term occurrence counts of one document, in first-seen order.
/// Base data for TF (Term Frequency) calculation.
pub use vectorizer::term::TermFrequency;

/// TF IDF Calculation Engine Trait
/// Defines the TF and IDF formulas used by `FitBuilder<E>` and
/// `VectorizerState<E>`.
/// The default implementation, `DefaultTfIdfEngine`, uses the smoothed IDF
/// `ln((N + 1) / (df + 1)) + 1` and the raw TF `count / term_sum`.
pub use vectorizer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Vector similarity
/// Generic over `f32` and `f64`. Every function fails with
/// `DimensionMismatch` when the lengths differ.
/// - Cosine similarity: direction only, 0 for a zero vector
/// - Euclidean distance
/// - Dot product
/// - Manhattan distance
pub use similarity::{cosine_similarity, dot, euclidean_distance, manhattan_distance};

/// Chunker
/// Splits long documents before indexing.
/// - Fixed size: windows of words with overlap
/// - Semantic: sections delimited by header lines
///
/// `ChunkStrategy` is the serde-deserializable configuration, `Chunker`
/// validates it once.
pub use chunker::{
    chunk_fixed, chunk_semantic, chunk_semantic_with_marker, Chunk, ChunkStrategy, Chunker,
};
