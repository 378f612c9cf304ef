pub mod presets;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::vectorizer::evaluate::scoring::{cosine_similarity, rank_pairs, Hits};

pub use presets::EmbeddingModel;

/// Static word embedding table
///
/// Every vector has the same dimension. Iteration order is insertion order,
/// which decides ties in [`EmbeddingTable::solve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEmbeddingTable")]
pub struct EmbeddingTable {
    dim: usize,
    #[serde(with = "indexmap::map::serde_seq")]
    vectors: IndexMap<String, Vec<f64>>,
}

/// Wire form of [`EmbeddingTable`], dimension-checked on load
#[derive(Deserialize)]
struct RawEmbeddingTable {
    dim: usize,
    #[serde(with = "indexmap::map::serde_seq")]
    vectors: IndexMap<String, Vec<f64>>,
}

impl TryFrom<RawEmbeddingTable> for EmbeddingTable {
    type Error = PipelineError;

    fn try_from(raw: RawEmbeddingTable) -> Result<Self> {
        Self::from_entries(raw.dim, raw.vectors)
    }
}

/// 3-D scatter point for one word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingPoint {
    pub word: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EmbeddingTable {
    /// Create an empty table with a fixed dimension
    pub fn new(dim: usize) -> Self {
        Self { dim, vectors: IndexMap::new() }
    }

    /// Build a table from `(word, vector)` entries
    ///
    /// # Errors
    /// * `DimensionMismatch` when an entry's length differs from `dim`
    pub fn from_entries<I, S>(dim: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut table = Self::new(dim);
        for (word, vector) in entries {
            table.insert(word, vector)?;
        }
        Ok(table)
    }

    /// Build a table from fixed-size rows
    pub fn from_rows<I, S, const D: usize>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, [f64; D])>,
        S: Into<String>,
    {
        let vectors = rows.into_iter().map(|(word, v)| (word.into(), v.to_vec())).collect();
        Self { dim: D, vectors }
    }

    /// Insert or replace a word vector
    pub fn insert<S: Into<String>>(&mut self, word: S, vector: Vec<f64>) -> Result<()> {
        if vector.len() != self.dim {
            return Err(PipelineError::DimensionMismatch { expected: self.dim, found: vector.len() });
        }
        self.vectors.insert(word.into(), vector);
        Ok(())
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Look up a word vector, `None` when the word is not in the table
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<&[f64]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    /// Words in table order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.vectors.keys().map(String::as_str)
    }

    /// Resolve the analogy `a - b + c`
    ///
    /// Returns the table entry, excluding `a`, `b` and `c`, closest to the
    /// target by cosine similarity. Ties go to the entry enumerated first.
    ///
    /// # Returns
    /// * `Option<String>` - `None` when an input word is missing or no
    ///   candidate has a defined similarity
    pub fn solve(&self, a: &str, b: &str, c: &str) -> Option<String> {
        let (va, vb, vc) = (self.lookup(a)?, self.lookup(b)?, self.lookup(c)?);
        let target: Vec<f64> = va
            .iter()
            .zip(vb)
            .zip(vc)
            .map(|((x, y), z)| x - y + z)
            .collect();

        let mut best: Option<(&str, f64)> = None;
        for (word, vec) in &self.vectors {
            if word == a || word == b || word == c {
                continue;
            }
            let score = cosine_similarity(&target, vec);
            if score.is_nan() {
                continue;
            }
            // strict comparison keeps the first entry on ties
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((word.as_str(), score));
            }
        }
        let result = best.map(|(w, _)| w.to_string());
        tracing::debug!(a, b, c, ?result, "solved analogy");
        result
    }

    /// Rank every pair of the given words by cosine similarity
    ///
    /// Unknown words are skipped; duplicates count once.
    pub fn similarities<S: AsRef<str>>(&self, words: &[S]) -> Hits<(String, String)> {
        let selected: IndexMap<String, &[f64]> = words
            .iter()
            .filter_map(|w| self.lookup(w.as_ref()).map(|v| (w.as_ref().to_string(), v)))
            .collect();
        rank_pairs(&selected)
    }

    /// Scatter points for the given words using the first three dimensions
    ///
    /// Unknown words are skipped; missing dimensions read as 0.
    pub fn points<S: AsRef<str>>(&self, words: &[S]) -> Vec<EmbeddingPoint> {
        words
            .iter()
            .filter_map(|w| {
                let v = self.lookup(w.as_ref())?;
                let at = |i: usize| v.get(i).copied().unwrap_or(0.0);
                Some(EmbeddingPoint { word: w.as_ref().to_string(), x: at(0), y: at(1), z: at(2) })
            })
            .collect()
    }
}
