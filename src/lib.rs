/// This crate is the text processing and representation engine behind an
/// instructional NLP pipeline: cleaning, preprocessing, vectorization,
/// similarity ranking, word embeddings, augmentation and CSV export.
pub mod augment;
pub mod cleaning;
pub mod collect;
pub mod embedding;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod preprocess;
pub mod vectorizer;

/// Pipeline
/// The top-level entry point of this crate.
/// It tokenizes documents, builds the vocabulary for the configured scheme,
/// vectorizes every document and optionally ranks document pairs and reads an
/// embedding table.
///
/// A run is stateless: it takes the documents and returns an immutable
/// `RunResult`. Nothing is cached between runs.
///
/// # Configuration
/// `PipelineConfig` is serde-enabled and every field has a default, so a
/// partial JSON object is enough.
///
/// # Serialization
/// `RunResult` can be written as JSON or as a CBOR snapshot.
pub use pipeline::{Pipeline, PipelineConfig, RunResult};

/// Vectorization schemes and the document-term matrix
/// - `Scheme`: one-hot, bag-of-words, n-gram counts or TF-IDF
/// - `DocumentTermMatrix`: rows per document (per token for one-hot), columns per vocabulary term
/// - `vectorize`: runs a scheme with the default TF-IDF engine
/// - `vectorize_with`: runs a scheme with a custom `TFIDFEngine`
pub use vectorizer::{vectorize, vectorize_with, ChartRecord, DocumentTermMatrix, Scheme};

/// Tokenizer
/// Splits raw text into normalized tokens.
/// Lowercasing, punctuation stripping, symbol stripping and stopword removal
/// are all switchable through `TokenizeOptions`. `StopwordList` picks the
/// list used for removal.
pub use vectorizer::token::{tokenize, StopwordList, TokenizeOptions};

/// Vocabulary
/// Sorted, deduplicated list of terms or n-grams.
/// Column `i` of every matrix row belongs to term `i` of the vocabulary.
pub use vectorizer::vocabulary::Vocabulary;

/// Corpus for TF-IDF
/// It does not store document text; it only manages:
/// - The number of documents
/// - The number of documents in which each term appears
///
/// It is used as the base data for IDF (Inverse Document Frequency) calculation.
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// Manages:
/// - The count of occurrences of each term in a document
/// - The total number of terms in the document
///
/// Used as base data for TF (Term Frequency) calculation and for the
/// counting schemes.
pub use vectorizer::term::TermFrequency;

/// TF IDF Calculation Engine Trait
/// By implementing this trait, you can plug different TF-IDF calculation
/// strategies into `vectorize_with`.
/// A default implementation, `DefaultTFIDFEngine`, is provided and computes
/// length-normalized TF times smoothed IDF for `f32` and `f64`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Similarity scoring
/// - `Hits`: ranked results, best first, ties in enumeration order
/// - `cosine_similarity`: raw cosine, `NaN` for a zero-magnitude vector
/// - `try_cosine_similarity`: cosine that reports zero magnitude as an error
/// - `rank_pairs`: every unordered pair of a keyed vector set, ranked
pub use vectorizer::evaluate::scoring::{cosine_similarity, rank_pairs, try_cosine_similarity, Hits};

/// Word embeddings
/// Fixed-dimension lookup tables with analogy solving, pairwise similarity
/// and 3-D points for plotting. `EmbeddingModel` holds the built-in tables.
pub use embedding::{EmbeddingModel, EmbeddingPoint, EmbeddingTable};

/// Error type and result alias shared by every module
pub use error::{PipelineError, Result};
