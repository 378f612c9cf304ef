use std::{cmp::Ordering, fmt::Debug};

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PipelineError, Result},
    vectorizer::DocumentTermMatrix,
};

/// Structure to store ranked results
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Hits<K> {
    /// (key, score)
    pub list: Vec<(K, f64)>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(vec: Vec<(K, f64)>) -> Self {
        Hits { list: vec }
    }

    /// Sort results by descending score
    /// Equal scores keep their enumeration order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        let before = self.list.len();
        // Remove NaN scores
        self.list.retain(|(_, s)| !s.is_nan());
        let dropped = before - self.list.len();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped undefined (NaN) similarity scores");
        }
        // stable sort keeps first-seen order on ties, -0.0 ties with 0.0
        self.list
            .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Highest scoring entry
    pub fn top(&self) -> Option<&(K, f64)> {
        self.list.first()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for (key, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", key, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

/// Dot product of two aligned vectors
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vectors must be of the same length to compute dot product.");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm
#[inline]
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity
/// cosθ = A・B / (|A||B|)
///
/// Returns `NaN` when either vector has zero magnitude. Use
/// [`try_cosine_similarity`] to get an error instead.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    dot(a, b) / (norm(a) * norm(b))
}

/// Cosine similarity that rejects misaligned or zero-magnitude vectors
pub fn try_cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(PipelineError::DimensionMismatch { expected: a.len(), found: b.len() });
    }
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return Err(PipelineError::ZeroMagnitude);
    }
    Ok(dot(a, b) / denom)
}

/// Rank every unordered pair of distinct keys by cosine similarity
///
/// Pairs are enumerated `(i, j)` with `i < j` in map order, scored once,
/// then sorted descending. Ties keep enumeration order. Pairs involving a
/// zero-magnitude vector have no defined score and are left out.
pub fn rank_pairs<K, V>(vectors: &IndexMap<K, V>) -> Hits<(K, K)>
where
    K: Clone + Send + Sync,
    V: AsRef<[f64]> + Sync,
{
    let entries: Vec<(&K, &V)> = vectors.iter().collect();
    let pairs: Vec<(usize, usize)> = (0..entries.len())
        .flat_map(|i| (i + 1..entries.len()).map(move |j| (i, j)))
        .collect();
    let list = pairs
        .par_iter()
        .map(|&(i, j)| {
            let (ka, va) = entries[i];
            let (kb, vb) = entries[j];
            ((ka.clone(), kb.clone()), cosine_similarity(va.as_ref(), vb.as_ref()))
        })
        .collect();
    let mut hits = Hits::new(list);
    hits.sort_by_score();
    hits
}

/// Document similarity search
impl DocumentTermMatrix {
    /// Rank rows by cosine similarity to a query vector
    ///
    /// # Arguments
    /// * `query` - vector aligned to this matrix's vocabulary
    ///
    /// # Returns
    /// * `Hits<usize>` - row indices, best match first; zero rows are left out
    pub fn similarity(&self, query: &[f64]) -> Result<Hits<usize>> {
        if query.len() != self.n_cols() {
            return Err(PipelineError::DimensionMismatch { expected: self.n_cols(), found: query.len() });
        }
        let list = self
            .rows
            .par_iter()
            .enumerate()
            .map(|(idx, row)| (idx, cosine_similarity(query, row)))
            .collect();
        let mut hits = Hits::new(list);
        hits.sort_by_score();
        Ok(hits)
    }

    /// Rank every pair of rows by cosine similarity, keyed by row label
    /// Rows sharing a label (repeated one-hot tokens) count once, at their first position.
    pub fn pairwise_similarity(&self) -> Hits<(String, String)> {
        let map: IndexMap<String, &[f64]> = self
            .row_labels
            .iter()
            .cloned()
            .zip(self.rows.iter().map(Vec::as_slice))
            .collect();
        rank_pairs(&map)
    }
}
