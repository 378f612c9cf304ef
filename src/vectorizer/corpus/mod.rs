use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::TermFrequency;

/// Document count and per-term document frequency
///
/// It does not store document text; it is the base data for IDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// number of documents each term appears in
    pub term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Build a corpus from per-document term frequencies
    pub fn from_freqs(freqs: &[TermFrequency]) -> Self {
        let mut corpus = Self::new();
        for freq in freqs {
            corpus.add_doc(freq);
        }
        corpus
    }

    /// Add a document's distinct terms to the corpus
    /// Empty documents still count toward the document number.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            self.term_counts
                .entry(term.as_ref().into())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }

    /// Add a document by its term frequency
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        let terms: Vec<&str> = freq.term_set_iter().collect();
        self.add_set(&terms);
    }

    /// Get the number of documents in the corpus
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing the term
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_frequency_counts_each_doc_once() {
        let docs = [
            TermFrequency::from(&["dog", "bites", "dog"][..]),
            TermFrequency::from(&["man", "bites"][..]),
            TermFrequency::new(),
        ];
        let corpus = Corpus::from_freqs(&docs);
        assert_eq!(corpus.get_doc_num(), 3);
        assert_eq!(corpus.get_term_count("dog"), 1);
        assert_eq!(corpus.get_term_count("bites"), 2);
        assert_eq!(corpus.get_term_count("cat"), 0);
        assert_eq!(corpus.vocab_size(), 3);
    }
}
