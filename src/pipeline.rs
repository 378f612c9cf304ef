use serde::{Deserialize, Serialize};

use crate::embedding::{presets::DEFAULT_SELECTION, EmbeddingModel, EmbeddingPoint};
use crate::error::Result;
use crate::vectorizer::{
    evaluate::scoring::Hits, token::TokenizeOptions, vectorize, ChartRecord, DocumentTermMatrix, Scheme,
};

/// Which embedding table to read and which words to look at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingRequest {
    pub model: EmbeddingModel,
    pub words: Vec<String>,
}

impl Default for EmbeddingRequest {
    fn default() -> Self {
        Self {
            model: EmbeddingModel::Demo,
            words: DEFAULT_SELECTION.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Pipeline configuration
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub tokenize: TokenizeOptions,
    pub scheme: Scheme,
    /// rank every pair of matrix rows by cosine similarity
    pub rank_documents: bool,
    pub embedding: Option<EmbeddingRequest>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tokenize: TokenizeOptions::default(),
            scheme: Scheme::default(),
            rank_documents: true,
            embedding: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Embedding section of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingReport {
    pub model: EmbeddingModel,
    pub points: Vec<EmbeddingPoint>,
    pub similarities: Hits<(String, String)>,
}

/// Immutable result of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub scheme: Scheme,
    pub matrix: DocumentTermMatrix,
    pub chart: Vec<ChartRecord>,
    pub ranked: Option<Hits<(String, String)>>,
    pub embedding: Option<EmbeddingReport>,
}

impl RunResult {
    /// Terms in column order
    pub fn vocabulary(&self) -> &[String] {
        self.matrix.vocabulary.terms()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary snapshot
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }
}

/// Stateless text representation pipeline
///
/// tokenize -> vocabulary -> matrix -> chart records -> optional ranking
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline over `documents`
    ///
    /// A failed run returns the error and leaves nothing behind; callers keep
    /// whatever result they had.
    pub fn run<S>(&self, documents: &[S]) -> Result<RunResult>
    where
        S: AsRef<str> + Sync,
    {
        self.try_run(documents).map_err(|e| {
            tracing::error!(error = %e, scheme = ?self.config.scheme, "pipeline run failed");
            e
        })
    }

    fn try_run<S>(&self, documents: &[S]) -> Result<RunResult>
    where
        S: AsRef<str> + Sync,
    {
        let cfg = &self.config;
        let vocab = cfg.scheme.vocabulary(documents, &cfg.tokenize)?;
        let matrix = vectorize(documents, &vocab, cfg.scheme, &cfg.tokenize)?;
        let chart = matrix.chart_records();
        let ranked = cfg.rank_documents.then(|| matrix.pairwise_similarity());
        let embedding = cfg.embedding.as_ref().map(|req| {
            let table = req.model.table();
            EmbeddingReport {
                model: req.model,
                points: table.points(&req.words),
                similarities: table.similarities(&req.words),
            }
        });
        tracing::debug!(
            documents = documents.len(),
            terms = vocab.len(),
            ranked = ranked.as_ref().map_or(0, Hits::len),
            "pipeline run complete"
        );
        Ok(RunResult {
            scheme: cfg.scheme,
            matrix,
            chart,
            ranked,
            embedding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    #[test]
    fn default_run_ranks_documents() {
        let docs = ["dog bites man.", "man bites dog.", "cat sleeps"];
        let result = Pipeline::default().run(&docs).unwrap();
        assert_eq!(result.scheme, Scheme::TfIdf);
        assert_eq!(result.vocabulary(), &["bites", "cat", "dog", "man", "sleeps"]);
        assert_eq!(result.chart.len(), 5);

        let ranked = result.ranked.unwrap();
        assert_eq!(ranked.len(), 3);
        let ((a, b), score) = ranked.top().unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("Document 1", "Document 2"));
        assert!((score - 1.0).abs() < 1e-9);
        assert_eq!(ranked.list[1].1, 0.0);
    }

    #[test]
    fn config_fills_missing_fields() {
        let cfg = PipelineConfig::from_json(r#"{"scheme": {"n_gram": 2}, "rank_documents": false}"#).unwrap();
        assert_eq!(cfg.scheme, Scheme::NGram(2));
        assert!(!cfg.rank_documents);
        assert_eq!(cfg.tokenize, TokenizeOptions::default());
        assert!(cfg.embedding.is_none());

        let result = Pipeline::new(cfg).run(&["the quick brown fox"]).unwrap();
        assert_eq!(result.vocabulary(), &["brown fox", "quick brown", "the quick"]);
        assert!(result.ranked.is_none());

        assert!(matches!(PipelineConfig::from_json("{"), Err(PipelineError::Json(_))));
    }

    #[test]
    fn invalid_ngram_size_fails_the_run() {
        let cfg = PipelineConfig { scheme: Scheme::NGram(0), ..Default::default() };
        assert!(matches!(
            Pipeline::new(cfg).run(&["a b c"]),
            Err(PipelineError::InvalidNgramSize(0))
        ));
    }

    #[test]
    fn empty_documents_run_cleanly() {
        let result = Pipeline::default().run(&[""]).unwrap();
        assert!(result.vocabulary().is_empty());
        assert_eq!(result.matrix.rows, vec![Vec::<f64>::new()]);
        assert!(result.ranked.unwrap().is_empty());

        let none: [&str; 0] = [];
        let result = Pipeline::default().run(&none).unwrap();
        assert_eq!(result.matrix.n_rows(), 0);
    }

    #[test]
    fn embedding_section_uses_requested_model() {
        let cfg = PipelineConfig {
            embedding: Some(EmbeddingRequest { model: EmbeddingModel::GloVe, ..Default::default() }),
            ..Default::default()
        };
        let result = Pipeline::new(cfg).run(&["quick fox"]).unwrap();
        let report = result.embedding.unwrap();
        assert_eq!(report.model, EmbeddingModel::GloVe);
        assert_eq!(report.points.len(), 4);
        assert_eq!(report.points[1].word, "dog");
        assert_eq!(report.points[1].x, 0.55);
        assert_eq!(report.similarities.len(), 6);
    }

    #[test]
    fn snapshots_round_trip() {
        let result = Pipeline::default().run(&["dog bites man", "man eats food"]).unwrap();
        let cbor = result.to_cbor().unwrap();
        assert_eq!(RunResult::from_cbor(&cbor).unwrap(), result);
        let back = RunResult::from_json(&result.to_json().unwrap()).unwrap();
        assert_eq!(back.vocabulary(), result.vocabulary());
        assert_eq!(back.matrix.row_labels, result.matrix.row_labels);
        for (x, y) in back.matrix.rows.iter().flatten().zip(result.matrix.rows.iter().flatten()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn malformed_snapshots_fail_to_load() {
        let result = Pipeline::default().run(&["dog bites man"]).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        value["matrix"]["rows"][0] = serde_json::json!([1.0]);
        assert!(matches!(RunResult::from_json(&value.to_string()), Err(PipelineError::Json(_))));

        let mut unsorted: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        unsorted["matrix"]["vocabulary"]["terms"] = serde_json::json!(["man", "dog", "bites"]);
        assert!(RunResult::from_json(&unsorted.to_string()).is_err());

        let cbor = serde_cbor::to_vec(&unsorted).unwrap();
        assert!(matches!(RunResult::from_cbor(&cbor), Err(PipelineError::Cbor(_))));
    }
}
