pub mod corpus;
pub mod evaluate;
pub mod term;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::vectorizer::{
    corpus::Corpus,
    term::TermFrequency,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    token::{tokenize, TokenizeOptions},
    vocabulary::{ngrams, Vocabulary},
};

/// Vectorization scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// One row per token of the first document, a single 1 at the token's column
    OneHot,
    /// One row per document, raw term counts
    BagOfWords,
    /// One row per document, counts of n-gram windows
    NGram(usize),
    /// One row per document, length-normalized TF times smoothed IDF
    #[default]
    TfIdf,
}

impl Scheme {
    /// Build the vocabulary this scheme indexes its columns by
    pub fn vocabulary<S: AsRef<str>>(&self, documents: &[S], options: &TokenizeOptions) -> Result<Vocabulary> {
        match self {
            Scheme::NGram(n) => Vocabulary::build_ngrams(documents, options, *n),
            _ => Ok(Vocabulary::build(documents, options)),
        }
    }
}

/// Numeric matrix aligned to a vocabulary
///
/// Rows follow document order (token order for one-hot), columns follow
/// vocabulary order. Every row has exactly `vocabulary.len()` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DocumentTermMatrix {
    pub vocabulary: Vocabulary,
    /// "Document 1", ... or the token for one-hot rows
    pub row_labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Wire form of [`DocumentTermMatrix`], checked on load
#[derive(Deserialize)]
struct RawMatrix {
    vocabulary: Vocabulary,
    row_labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TryFrom<RawMatrix> for DocumentTermMatrix {
    type Error = PipelineError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::new(raw.vocabulary, raw.row_labels, raw.rows)
    }
}

/// Chart-ready record: one term with a value per row label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub term: String,
    pub values: Vec<(String, f64)>,
}

impl DocumentTermMatrix {
    /// Assemble a matrix, checking its shape
    ///
    /// # Errors
    /// * `DimensionMismatch` when the label count differs from the row count,
    ///   or a row's length differs from the vocabulary size
    pub fn new(vocabulary: Vocabulary, row_labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if row_labels.len() != rows.len() {
            return Err(PipelineError::DimensionMismatch { expected: rows.len(), found: row_labels.len() });
        }
        if let Some(row) = rows.iter().find(|r| r.len() != vocabulary.len()) {
            return Err(PipelineError::DimensionMismatch { expected: vocabulary.len(), found: row.len() });
        }
        Ok(Self { vocabulary, row_labels, rows })
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn row(&self, idx: usize) -> Option<&[f64]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    /// Column value of `term` in row `idx`
    pub fn value(&self, idx: usize, term: &str) -> Option<f64> {
        let col = self.vocabulary.index_of(term)?;
        self.rows.get(idx)?.get(col).copied()
    }

    /// Denormalize into one record per term, one value per row
    pub fn chart_records(&self) -> Vec<ChartRecord> {
        self.vocabulary
            .iter()
            .enumerate()
            .map(|(col, term)| ChartRecord {
                term: term.to_string(),
                values: self
                    .row_labels
                    .iter()
                    .zip(self.rows.iter())
                    .filter_map(|(label, row)| Some((label.clone(), *row.get(col)?)))
                    .collect(),
            })
            .collect()
    }
}

fn document_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Document {i}")).collect()
}

/// One-hot rows for a token sequence
///
/// Tokens missing from the vocabulary yield an all-zero row.
pub fn one_hot<S: AsRef<str>>(tokens: &[S], vocab: &Vocabulary) -> Vec<Vec<f64>> {
    tokens
        .iter()
        .map(|tok| {
            let mut row = vec![0.0; vocab.len()];
            if let Some(idx) = vocab.index_of(tok.as_ref()) {
                row[idx] = 1.0;
            }
            row
        })
        .collect()
}

/// Count row over the vocabulary
fn count_row(freq: &TermFrequency, vocab: &Vocabulary) -> Vec<f64> {
    let mut row = vec![0.0; vocab.len()];
    for (term, count) in freq.iter() {
        if let Some(idx) = vocab.index_of(term) {
            row[idx] = count as f64;
        }
    }
    row
}

/// Per-document term frequencies under a scheme
fn term_freqs<S>(documents: &[S], options: &TokenizeOptions, ngram: Option<usize>) -> Result<Vec<TermFrequency>>
where
    S: AsRef<str> + Sync,
{
    documents
        .par_iter()
        .map(|doc| -> Result<TermFrequency> {
            let tokens = tokenize(doc.as_ref(), options);
            let terms = match ngram {
                Some(n) => ngrams(&tokens, n)?,
                None => tokens,
            };
            Ok(TermFrequency::from(terms.as_slice()))
        })
        .collect()
}

/// Vectorize documents with the default TF-IDF engine
///
/// # Arguments
/// * `documents` - raw documents
/// * `vocab` - column order; must come from [`Scheme::vocabulary`] for the same scheme
/// * `scheme` - vectorization scheme
/// * `options` - tokenizer options
///
/// # Errors
/// * `InvalidNgramSize` for `Scheme::NGram(0)`
pub fn vectorize<S>(
    documents: &[S],
    vocab: &Vocabulary,
    scheme: Scheme,
    options: &TokenizeOptions,
) -> Result<DocumentTermMatrix>
where
    S: AsRef<str> + Sync,
{
    vectorize_with::<S, DefaultTFIDFEngine>(documents, vocab, scheme, options)
}

/// Vectorize documents with a custom TF-IDF engine
pub fn vectorize_with<S, E>(
    documents: &[S],
    vocab: &Vocabulary,
    scheme: Scheme,
    options: &TokenizeOptions,
) -> Result<DocumentTermMatrix>
where
    S: AsRef<str> + Sync,
    E: TFIDFEngine<f64>,
{
    let (row_labels, rows) = match scheme {
        Scheme::OneHot => {
            let tokens = documents
                .first()
                .map(|doc| tokenize(doc.as_ref(), options))
                .unwrap_or_default();
            let rows = one_hot(&tokens, vocab);
            (tokens, rows)
        }
        Scheme::BagOfWords => {
            let freqs = term_freqs(documents, options, None)?;
            let rows: Vec<Vec<f64>> = freqs.par_iter().map(|f| count_row(f, vocab)).collect();
            (document_labels(documents.len()), rows)
        }
        Scheme::NGram(n) => {
            if n == 0 {
                return Err(PipelineError::InvalidNgramSize(n));
            }
            let freqs = term_freqs(documents, options, Some(n))?;
            let rows: Vec<Vec<f64>> = freqs.par_iter().map(|f| count_row(f, vocab)).collect();
            (document_labels(documents.len()), rows)
        }
        Scheme::TfIdf => {
            let freqs = term_freqs(documents, options, None)?;
            let empty = freqs.iter().filter(|f| f.is_empty()).count();
            if empty > 0 {
                tracing::warn!(empty, "documents without tokens get all-zero tf-idf rows");
            }
            let corpus = Corpus::from_freqs(&freqs);
            let idf = E::idf_vec(&corpus, vocab);
            let rows: Vec<Vec<f64>> = freqs.par_iter().map(|f| E::tfidf_vec(f, &idf, vocab)).collect();
            (document_labels(documents.len()), rows)
        }
    };
    tracing::debug!(?scheme, rows = rows.len(), cols = vocab.len(), "vectorized");
    DocumentTermMatrix::new(vocab.clone(), row_labels, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> [&'static str; 2] {
        ["dog bites man.", "man bites dog."]
    }

    fn run(documents: &[&str], scheme: Scheme) -> DocumentTermMatrix {
        let opts = TokenizeOptions::default();
        let vocab = scheme.vocabulary(documents, &opts).unwrap();
        vectorize(documents, &vocab, scheme, &opts).unwrap()
    }

    #[test]
    fn bag_of_words_scenario() {
        let m = run(&docs(), Scheme::BagOfWords);
        assert_eq!(m.vocabulary.terms(), &["bites", "dog", "man"]);
        assert_eq!(m.rows, vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]]);
        assert_eq!(m.row_labels, vec!["Document 1", "Document 2"]);
    }

    #[test]
    fn bag_of_words_row_sums_match_token_counts() {
        let documents = ["the cat sat on the mat", "", "a dog, a cat!"];
        let m = run(&documents, Scheme::BagOfWords);
        for (doc, row) in documents.iter().zip(m.rows.iter()) {
            let n = tokenize(doc, &TokenizeOptions::default()).len();
            assert_eq!(row.iter().sum::<f64>(), n as f64);
            assert_eq!(row.len(), m.n_cols());
        }
    }

    #[test]
    fn tfidf_identical_distributions_give_identical_rows() {
        let m = run(&docs(), Scheme::TfIdf);
        assert_eq!(m.rows[0], m.rows[1]);
        // every term is in every document, so idf == 1 and value == c / L
        for v in &m.rows[0] {
            assert!((v - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn tfidf_rare_term_outweighs_common_term() {
        let m = run(&["dog bites man", "dog eats meat"], Scheme::TfIdf);
        let dog = m.value(0, "dog").unwrap();
        let bites = m.value(0, "bites").unwrap();
        assert!(bites > dog);
        assert_eq!(m.value(0, "meat"), Some(0.0));
    }

    #[test]
    fn empty_document_yields_zero_row_not_error() {
        let m = run(&["", "dog"], Scheme::TfIdf);
        assert_eq!(m.n_rows(), 2);
        assert!(m.rows[0].iter().all(|&v| v == 0.0));

        let only_empty = run(&[""], Scheme::TfIdf);
        assert_eq!(only_empty.n_cols(), 0);
        assert_eq!(only_empty.rows, vec![Vec::<f64>::new()]);
    }

    #[test]
    fn one_hot_encodes_first_document_and_handles_oov() {
        let m = run(&["dog bites dog", "man"], Scheme::OneHot);
        assert_eq!(m.row_labels, vec!["dog", "bites", "dog"]);
        assert_eq!(m.vocabulary.terms(), &["bites", "dog", "man"]);
        assert_eq!(m.rows[0], vec![0.0, 1.0, 0.0]);
        assert_eq!(m.rows[1], vec![1.0, 0.0, 0.0]);

        let oov = one_hot(&["cat"], &m.vocabulary);
        assert_eq!(oov, vec![vec![0.0, 0.0, 0.0]]);
    }

    #[test]
    fn ngram_counts() {
        let m = run(&["the quick brown", "the quick fox", "short"], Scheme::NGram(2));
        assert_eq!(m.vocabulary.terms(), &["quick brown", "quick fox", "the quick"]);
        assert_eq!(m.rows[0], vec![1.0, 0.0, 1.0]);
        assert_eq!(m.rows[2], vec![0.0, 0.0, 0.0]);

        let opts = TokenizeOptions::default();
        let err = vectorize(&["a b"], &Vocabulary::default(), Scheme::NGram(0), &opts);
        assert!(matches!(err, Err(PipelineError::InvalidNgramSize(0))));
    }

    #[test]
    fn malformed_matrix_snapshots_are_rejected() {
        let short_row = r#"{"vocabulary":{"terms":["a","b"]},"row_labels":["Document 1"],"rows":[[1.0]]}"#;
        let err = serde_json::from_str::<DocumentTermMatrix>(short_row).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch: expected 2, found 1"));

        let missing_label = r#"{"vocabulary":{"terms":["a"]},"row_labels":[],"rows":[[1.0]]}"#;
        assert!(serde_json::from_str::<DocumentTermMatrix>(missing_label).is_err());

        let ok = r#"{"vocabulary":{"terms":["a","b"]},"row_labels":["Document 1"],"rows":[[1.0,2.0]]}"#;
        let m: DocumentTermMatrix = serde_json::from_str(ok).unwrap();
        assert_eq!(m.chart_records().len(), 2);
        assert_eq!(m.value(0, "b"), Some(2.0));
    }

    #[test]
    fn out_of_shape_rows_do_not_panic() {
        let mut m = run(&docs(), Scheme::BagOfWords);
        m.rows[1].truncate(1);
        assert_eq!(m.value(1, "man"), None);
        assert_eq!(m.value(0, "man"), Some(1.0));
        let records = m.chart_records();
        assert_eq!(records[0].values.len(), 2);
        assert_eq!(records[2].values, vec![("Document 1".to_string(), 1.0)]);
        assert!(DocumentTermMatrix::new(m.vocabulary.clone(), m.row_labels.clone(), m.rows.clone()).is_err());
    }

    #[test]
    fn default_scheme_is_tfidf() {
        assert_eq!(Scheme::default(), Scheme::TfIdf);
    }

    #[test]
    fn chart_records_are_term_major() {
        let m = run(&docs(), Scheme::BagOfWords);
        let records = m.chart_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].term, "bites");
        assert_eq!(
            records[0].values,
            vec![("Document 1".to_string(), 1.0), ("Document 2".to_string(), 1.0)]
        );
    }
}
