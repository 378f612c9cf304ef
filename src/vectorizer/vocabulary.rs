use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::vectorizer::token::{tokenize, TokenizeOptions};

/// Sorted, deduplicated list of terms or n-grams
///
/// Terms are ordered by code point so column indices are reproducible for
/// identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVocabulary")]
pub struct Vocabulary {
    terms: Vec<String>,
}

/// Wire form of [`Vocabulary`]
#[derive(Deserialize)]
struct RawVocabulary {
    terms: Vec<String>,
}

impl TryFrom<RawVocabulary> for Vocabulary {
    type Error = PipelineError;

    /// Columns are positional, so a snapshot must already be strictly sorted
    fn try_from(raw: RawVocabulary) -> Result<Self> {
        if let Some(pair) = raw.terms.windows(2).find(|w| w[0] >= w[1]) {
            return Err(PipelineError::UnsortedVocabulary(pair[1].clone()));
        }
        Ok(Self { terms: raw.terms })
    }
}

impl Vocabulary {
    /// Build from any term iterator, sorting and deduplicating
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        Self { terms: set.into_iter().collect() }
    }

    /// Vocabulary of single tokens across all documents
    ///
    /// Tokenizes the documents joined by a single space, so tokens never
    /// merge across a document boundary.
    pub fn build<S: AsRef<str>>(documents: &[S], options: &TokenizeOptions) -> Self {
        let joined = documents.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        let vocab = Self::from_terms(tokenize(&joined, options));
        tracing::debug!(documents = documents.len(), terms = vocab.len(), "built vocabulary");
        vocab
    }

    /// Vocabulary of n-grams, windows never crossing a document boundary
    pub fn build_ngrams<S: AsRef<str>>(documents: &[S], options: &TokenizeOptions, n: usize) -> Result<Self> {
        let mut all = Vec::new();
        for doc in documents {
            let tokens = tokenize(doc.as_ref(), options);
            all.extend(ngrams(&tokens, n)?);
        }
        let vocab = Self::from_terms(all);
        tracing::debug!(documents = documents.len(), n, terms = vocab.len(), "built n-gram vocabulary");
        Ok(vocab)
    }

    /// Column index of a term
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.binary_search_by(|t| t.as_str().cmp(term)).ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Sliding windows of `n` tokens joined with a single space
///
/// A sequence shorter than `n` yields no windows.
///
/// # Errors
/// * `InvalidNgramSize` when `n == 0`
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Result<Vec<String>> {
    if n == 0 {
        return Err(PipelineError::InvalidNgramSize(n));
    }
    Ok(tokens
        .windows(n)
        .map(|w| w.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" "))
        .collect())
}
