use std::marker::PhantomData;

use indexmap::{IndexMap, IndexSet};

use crate::{
    error::{Error, Result},
    vectorizer::{
        term::TermFrequency,
        tfidf::{DefaultTfIdfEngine, TfIdfEngine},
        VectorizerState,
    },
};

/// Fit phase of the vectorizer
///
/// Accumulates the vocabulary and the document frequency of each term. The
/// vocabulary index of a term is its insertion position, assigned the first
/// time the term is seen (document order, then first occurrence within the
/// document). `finalize()` consumes the builder and freezes everything into a
/// read-only `VectorizerState`.
///
/// # Examples
/// ```
/// use tf_idf_retrieval::FitBuilder;
/// let mut builder = FitBuilder::new();
/// builder.add_doc("the cat sat").add_doc("the dog ran");
/// assert_eq!(builder.doc_freq("the"), 2);
///
/// let state = builder.finalize().unwrap();
/// assert_eq!(state.vocab_size(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct FitBuilder<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    /// term -> document frequency
    /// 挿入位置がそのまま vocabulary index になる
    doc_freq: IndexMap<Box<str>, u64>,
    doc_num: u64,
    _marker: PhantomData<E>,
}

impl<E> Default for FitBuilder<E>
where
    E: TfIdfEngine,
{
    fn default() -> Self {
        Self {
            doc_freq: IndexMap::new(),
            doc_num: 0,
            _marker: PhantomData,
        }
    }
}

impl FitBuilder<DefaultTfIdfEngine> {
    /// Builder with the default engine
    /// 他のengineは `FitBuilder::<E>::default()`
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> FitBuilder<E>
where
    E: TfIdfEngine,
{
    /// Tokenize and add one training document
    pub fn add_doc(&mut self, doc: &str) -> &mut Self {
        self.add_freq(&TermFrequency::from_text(doc))
    }

    /// Add one already tokenized training document
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        self.add_freq(&TermFrequency::from_tokens(tokens))
    }

    /// Add several training documents in order
    pub fn add_docs<I, S>(&mut self, docs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for doc in docs {
            self.add_doc(doc.as_ref());
        }
        self
    }

    /// Add the distinct terms of a counted document
    /// 1ドキュメントにつき各termは1回だけカウント
    pub fn add_freq(&mut self, freq: &TermFrequency) -> &mut Self {
        self.doc_num += 1;
        for (term, _) in freq.iter() {
            if let Some(df) = self.doc_freq.get_mut(term) {
                *df += 1;
            } else {
                self.doc_freq.insert(term.into(), 1);
            }
        }
        self
    }

    /// Number of training documents added so far
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.doc_freq.len()
    }

    /// Number of training documents containing `term` (0 if unseen)
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Freeze the fitted vocabulary and compute the IDF table
    ///
    /// # Errors
    /// * `Error::InvalidInput` - no document was added
    pub fn finalize(self) -> Result<VectorizerState<E>> {
        if self.doc_num == 0 {
            return Err(Error::invalid_input("cannot fit a vectorizer on an empty corpus"));
        }
        // df は vocabulary 構築時に必ず 1 以上
        let idf: Vec<f64> = self
            .doc_freq
            .values()
            .map(|&df| E::idf(self.doc_num, df.max(1)))
            .collect();
        let vocabulary: IndexSet<Box<str>> = self.doc_freq.into_keys().collect();
        tracing::debug!(
            vocab_size = vocabulary.len(),
            doc_num = self.doc_num,
            "vectorizer fitted"
        );
        if vocabulary.is_empty() {
            tracing::warn!(doc_num = self.doc_num, "corpus has no tokens, vectors will be empty");
        }
        Ok(VectorizerState::from_parts(vocabulary, idf, self.doc_num))
    }
}
