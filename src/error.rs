/// Errors returned by the vectorizer, the similarity functions and the chunker.
///
/// Every failure is deterministic. Fix the input and call again, retrying
/// the same call never helps.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad configuration or argument (empty corpus, zero chunk size, overlap >= chunk size)
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Two vectors of different length were compared
    #[error("dimension mismatch: left has {left} elements, right has {right}")]
    DimensionMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
