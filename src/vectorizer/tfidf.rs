/// TF-IDF calculation engine
///
/// Plugs the TF and IDF formulas into `FitBuilder<E>` and
/// `VectorizerState<E>`. The engine is a type parameter only, it carries no
/// state.
pub trait TfIdfEngine {
    /// IDFを計算する
    ///
    /// # Arguments
    /// * `doc_num` - 学習ドキュメント数
    /// * `doc_freq` - termを含むドキュメント数
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// TFを計算する
    ///
    /// # Arguments
    /// * `count` - ドキュメント内のtermの出現回数
    /// * `term_sum` - ドキュメントの総term数
    fn tf(count: u32, term_sum: u64) -> f64;
}

/// Default engine
///
/// - `idf(t) = ln((N + 1) / (df(t) + 1)) + 1`, always > 0 even for `df = 0`
///   or `N = 0`
/// - `tf(t) = count(t) / term_sum`, 0 for an empty document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((doc_num as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0
    }

    #[inline]
    fn tf(count: u32, term_sum: u64) -> f64 {
        if term_sum == 0 {
            return 0.0;
        }
        count as f64 / term_sum as f64
    }
}
