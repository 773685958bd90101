use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tokenizer::tokenize;

/// TermFrequency 構造体
/// Term occurrence counts for a single document.
///
/// Terms are kept in first-seen order, so iterating a `TermFrequency`
/// yields the document's distinct terms in the order they first appear.
///
/// # Examples
/// ```
/// use tf_idf_retrieval::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["rust", "fast", "rust"]);
///
/// assert_eq!(freq.term_count("rust"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// assert_eq!(freq.term_num(), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<Box<str>, u32>,
    total_term_count: u64,
}

/// Termの追加
impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Build from an already tokenized document
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = Self::new();
        freq.add_terms(tokens);
        freq
    }

    /// Tokenize `text` and count its terms
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(&tokenize(text))
    }

    /// termを追加する
    ///
    /// # Arguments
    /// * `term` - 追加するterm
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.into(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// 複数のtermを追加する
    ///
    /// # Arguments
    /// * `terms` - 追加するtermのスライス
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// カウントを全リセット
    #[inline]
    pub fn clear(&mut self) {
        self.term_count.clear();
        self.total_term_count = 0;
    }
}

/// 統計の取得
impl TermFrequency {
    /// Occurrence count of `term` (0 if absent)
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of terms in the document, duplicates included
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_term_count == 0
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Raw term frequency: count / term_sum
    /// 空のドキュメントは 0.0
    #[inline]
    pub fn tf(&self, term: &str) -> f64 {
        if self.total_term_count == 0 {
            return 0.0;
        }
        self.term_count(term) as f64 / self.total_term_count as f64
    }

    /// (term, count) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_ref(), count))
    }

    /// Distinct terms in first-seen order
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|term| term.as_ref()).collect()
    }
}
