use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors raised by the text pipeline
///
/// Empty input is never an error; it flows through as empty collections.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// n-gram window size must be at least 1
    #[error("invalid n-gram size: {0} (must be >= 1)")]
    InvalidNgramSize(usize),

    /// Vectors that must be aligned have different lengths
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Vocabulary terms must be strictly ascending
    #[error("vocabulary term out of order: {0}")]
    UnsortedVocabulary(String),

    /// Cosine similarity is undefined for a zero-magnitude vector
    #[error("cosine similarity is undefined for a zero-magnitude vector")]
    ZeroMagnitude,

    /// Probability parameters must lie in [0, 1]
    #[error("probability out of range [0, 1]: {0}")]
    InvalidProbability(f64),

    /// CSV writing failed
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// CBOR snapshot encoding or decoding failed
    #[error("cbor error: {0}")]
    Cbor(#[from] serde_cbor::Error),

    /// JSON configuration or snapshot could not be parsed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl PipelineError {
    /// Check a probability parameter
    pub(crate) fn check_probability(p: f64) -> Result<f64> {
        if (0.0..=1.0).contains(&p) {
            Ok(p)
        } else {
            Err(PipelineError::InvalidProbability(p))
        }
    }
}
