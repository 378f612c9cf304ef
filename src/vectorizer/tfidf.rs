use num::{Float, NumCast};

use crate::vectorizer::{corpus::Corpus, term::TermFrequency, vocabulary::Vocabulary};

/// TF-IDF calculation engine
///
/// Implement this to plug a different weighting into [`crate::vectorize_with`].
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Generate the IDF vector
    /// # Arguments
    /// * `corpus` - document frequencies
    /// * `vocab` - column order
    /// # Returns
    /// * `Vec<N>` - one weight per vocabulary term
    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary) -> Vec<N>;

    /// Generate the TF vector of one document
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<N>;

    /// Element-wise product of the TF vector and the IDF vector
    fn tfidf_vec(freq: &TermFrequency, idf: &[N], vocab: &Vocabulary) -> Vec<N> {
        Self::tf_vec(freq, vocab)
            .into_iter()
            .zip(idf.iter())
            .map(|(tf, &idf)| tf * idf)
            .collect()
    }
}

/// Default TF-IDF engine
///
/// - `tf = count / doc_len`, all zero for an empty document
/// - `idf = ln((N + 1) / (df + 1)) + 1`, always > 0
///
/// Works for `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF for one term
    #[inline]
    pub fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((doc_num as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0
    }
}

#[inline]
fn cast<N: Float>(v: f64) -> N {
    <N as NumCast>::from(v).unwrap_or_else(N::zero)
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary) -> Vec<N> {
        let doc_num = corpus.get_doc_num();
        vocab
            .iter()
            .map(|term| cast(Self::idf(doc_num, corpus.get_term_count(term))))
            .collect()
    }

    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<N> {
        let total = freq.term_sum();
        if total == 0 {
            return vec![N::zero(); vocab.len()];
        }
        let total = total as f64;
        vocab
            .iter()
            .map(|term| cast(freq.term_count(term) as f64 / total))
            .collect()
    }
}
