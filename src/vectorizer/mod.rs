pub mod builder;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use indexmap::IndexSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    vectorizer::{
        builder::FitBuilder,
        term::TermFrequency,
        tfidf::{DefaultTfIdfEngine, TfIdfEngine},
    },
};

/// Fitted TF-IDF vectorizer
///
/// Holds the vocabulary (term -> dense index), the IDF table aligned with
/// the vocabulary, and the number of training documents. It is built once by
/// `FitBuilder::finalize()` (or `fit`) and is read-only afterwards, so it can
/// be shared between threads and used for any number of concurrent
/// transforms.
///
/// # Deserialization
/// Validated: the vocabulary must hold distinct terms, the IDF table must
/// have one finite, non-negative value per term and `doc_num` must be > 0.
/// Anything else is rejected instead of producing a state that could index
/// out of bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", try_from = "VectorizerStateData")]
pub struct VectorizerState<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    /// vocabulary
    /// index = 挿入位置
    vocabulary: IndexSet<Box<str>>,
    /// IDF Vector, idf[i] は vocabulary[i] のIDF
    idf: Vec<f64>,
    /// training document count
    doc_num: u64,
    #[serde(skip)]
    _marker: PhantomData<E>,
}

/// Unchecked serialized form of `VectorizerState`
#[derive(Deserialize)]
struct VectorizerStateData {
    vocabulary: Vec<Box<str>>,
    idf: Vec<f64>,
    doc_num: u64,
}

impl<E> TryFrom<VectorizerStateData> for VectorizerState<E>
where
    E: TfIdfEngine,
{
    type Error = Error;

    fn try_from(data: VectorizerStateData) -> Result<Self> {
        if data.doc_num == 0 {
            return Err(Error::invalid_input("doc_num must be greater than 0"));
        }
        if data.vocabulary.len() != data.idf.len() {
            return Err(Error::invalid_input(format!(
                "vocabulary has {} terms but idf has {} values",
                data.vocabulary.len(),
                data.idf.len()
            )));
        }
        if let Some(idf) = data.idf.iter().find(|idf| !idf.is_finite() || **idf < 0.0) {
            return Err(Error::invalid_input(format!("invalid idf value {idf}")));
        }
        let term_num = data.vocabulary.len();
        let vocabulary: IndexSet<Box<str>> = data.vocabulary.into_iter().collect();
        // 重複があると以降の idf がずれる
        if vocabulary.len() != term_num {
            return Err(Error::invalid_input("vocabulary contains duplicate terms"));
        }
        Ok(Self::from_parts(vocabulary, data.idf, data.doc_num))
    }
}

/// Fit a vectorizer with the default engine
///
/// Documents are tokenized in parallel; vocabulary indices still follow the
/// input order.
///
/// # Errors
/// * `Error::InvalidInput` - `documents` is empty
pub fn fit<S>(documents: &[S]) -> Result<VectorizerState>
where
    S: AsRef<str> + Sync,
{
    fit_with::<DefaultTfIdfEngine, S>(documents)
}

/// Fit a vectorizer with a custom engine
pub fn fit_with<E, S>(documents: &[S]) -> Result<VectorizerState<E>>
where
    E: TfIdfEngine,
    S: AsRef<str> + Sync,
{
    let freqs: Vec<TermFrequency> = documents
        .par_iter()
        .map(|doc| TermFrequency::from_text(doc.as_ref()))
        .collect();
    freqs
        .iter()
        .fold(FitBuilder::<E>::default(), |mut builder, freq| {
            builder.add_freq(freq);
            builder
        })
        .finalize()
}

impl VectorizerState<DefaultTfIdfEngine> {
    /// `fit` と同じ
    pub fn fit<S>(documents: &[S]) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        fit(documents)
    }
}

impl<E> VectorizerState<E>
where
    E: TfIdfEngine,
{
    pub(crate) fn from_parts(vocabulary: IndexSet<Box<str>>, idf: Vec<f64>, doc_num: u64) -> Self {
        debug_assert_eq!(vocabulary.len(), idf.len());
        Self {
            vocabulary,
            idf,
            doc_num,
            _marker: PhantomData,
        }
    }

    /// Project a document onto the fitted vocabulary
    ///
    /// `vector[index(t)] = tf(t) * idf(t)` for every vocabulary term `t` of
    /// the document. Terms outside the vocabulary contribute nothing. The
    /// length always equals `vocab_size()`; an empty document gives the zero
    /// vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        self.transform_freq(&TermFrequency::from_text(document))
    }

    /// `transform` for an already tokenized document
    pub fn transform_tokens<T>(&self, tokens: &[T]) -> Vec<f64>
    where
        T: AsRef<str>,
    {
        self.transform_freq(&TermFrequency::from_tokens(tokens))
    }

    /// `transform` for counted terms
    pub fn transform_freq(&self, freq: &TermFrequency) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocab_size()];
        let term_sum = freq.term_sum();
        let mut oov_num = 0usize;
        for (term, count) in freq.iter() {
            match self.vocabulary.get_index_of(term) {
                Some(idx) => vector[idx] = E::tf(count, term_sum) * self.idf[idx],
                None => oov_num += 1,
            }
        }
        if oov_num > 0 {
            tracing::trace!(
                oov_num,
                term_num = freq.term_num(),
                "out-of-vocabulary terms ignored"
            );
        }
        vector
    }

    /// Transform many documents in parallel
    /// 出力順は入力順
    pub fn transform_batch<S>(&self, documents: &[S]) -> Vec<Vec<f64>>
    where
        S: AsRef<str> + Sync,
        E: Sync,
    {
        documents
            .par_iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect()
    }
}

/// Read accessors
impl<E> VectorizerState<E>
where
    E: TfIdfEngine,
{
    /// Vector dimension
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of training documents
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get_index_of(term)
    }

    #[inline]
    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.vocabulary.get_index(index).map(|term| term.as_ref())
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains(term)
    }

    /// IDF of a vocabulary term
    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|idx| self.idf[idx])
    }

    /// IDF table in vocabulary order
    #[inline]
    pub fn idf_vec(&self) -> &[f64] {
        &self.idf
    }

    /// Vocabulary terms in index order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(|term| term.as_ref())
    }
}
