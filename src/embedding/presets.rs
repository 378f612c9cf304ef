use serde::{Deserialize, Serialize};

use crate::embedding::EmbeddingTable;

type Entry = (&'static str, [f64; 3]);

/// Words the representation demo selects by default
pub const DEFAULT_SELECTION: [&str; 4] = ["fox", "dog", "quick", "lazy"];

const EXPLORER: &[Entry] = &[
    ("king", [0.2, 0.8, 0.1]),
    ("queen", [0.3, 0.7, 0.2]),
    ("man", [0.1, 0.4, 0.3]),
    ("woman", [0.2, 0.3, 0.4]),
    ("prince", [0.15, 0.6, 0.2]),
    ("princess", [0.25, 0.5, 0.3]),
    ("dog", [0.5, 0.1, 0.7]),
    ("cat", [0.6, 0.2, 0.6]),
    ("computer", [0.8, 0.3, 0.1]),
    ("technology", [0.7, 0.4, 0.2]),
    ("food", [0.4, 0.6, 0.5]),
    ("eat", [0.3, 0.5, 0.6]),
    ("run", [0.2, 0.2, 0.8]),
    ("walk", [0.1, 0.3, 0.7]),
];

const WORD2VEC: &[Entry] = &[
    ("quick", [0.2, 0.8, 0.1]),
    ("brown", [0.3, 0.7, 0.2]),
    ("fox", [0.1, 0.4, 0.3]),
    ("jumps", [0.2, 0.3, 0.4]),
    ("over", [0.15, 0.6, 0.2]),
    ("lazy", [0.25, 0.5, 0.3]),
    ("dog", [0.5, 0.1, 0.7]),
    ("outpaces", [0.6, 0.2, 0.6]),
    ("sleeps", [0.8, 0.3, 0.1]),
    ("day", [0.7, 0.4, 0.2]),
    ("long", [0.4, 0.6, 0.5]),
    ("foxes", [0.3, 0.5, 0.6]),
    ("known", [0.2, 0.2, 0.8]),
    ("being", [0.1, 0.3, 0.7]),
    ("clever", [0.4, 0.7, 0.3]),
    ("animals", [0.6, 0.4, 0.2]),
];

const GLOVE: &[Entry] = &[
    ("quick", [0.25, 0.75, 0.15]),
    ("brown", [0.35, 0.65, 0.25]),
    ("fox", [0.15, 0.45, 0.35]),
    ("jumps", [0.25, 0.35, 0.45]),
    ("over", [0.2, 0.55, 0.25]),
    ("lazy", [0.3, 0.45, 0.35]),
    ("dog", [0.55, 0.15, 0.65]),
    ("outpaces", [0.65, 0.25, 0.55]),
    ("sleeps", [0.85, 0.35, 0.15]),
    ("day", [0.75, 0.45, 0.25]),
    ("long", [0.45, 0.55, 0.55]),
    ("foxes", [0.35, 0.55, 0.65]),
    ("known", [0.25, 0.25, 0.75]),
    ("being", [0.15, 0.35, 0.65]),
    ("clever", [0.45, 0.65, 0.35]),
    ("animals", [0.65, 0.45, 0.25]),
];

const FASTTEXT: &[Entry] = &[
    ("quick", [0.22, 0.82, 0.12]),
    ("brown", [0.32, 0.72, 0.22]),
    ("fox", [0.12, 0.42, 0.32]),
    ("jumps", [0.22, 0.32, 0.42]),
    ("over", [0.17, 0.62, 0.22]),
    ("lazy", [0.27, 0.52, 0.32]),
    ("dog", [0.52, 0.12, 0.72]),
    ("outpaces", [0.62, 0.22, 0.62]),
    ("sleeps", [0.82, 0.32, 0.12]),
    ("day", [0.72, 0.42, 0.22]),
    ("long", [0.42, 0.62, 0.52]),
    ("foxes", [0.32, 0.52, 0.62]),
    ("known", [0.22, 0.22, 0.82]),
    ("being", [0.12, 0.32, 0.72]),
    ("clever", [0.42, 0.72, 0.32]),
    ("animals", [0.62, 0.42, 0.22]),
];

const DOC2VEC: &[Entry] = &[
    ("quick", [0.18, 0.78, 0.08]),
    ("brown", [0.28, 0.68, 0.18]),
    ("fox", [0.08, 0.38, 0.28]),
    ("jumps", [0.18, 0.28, 0.38]),
    ("over", [0.13, 0.58, 0.18]),
    ("lazy", [0.23, 0.48, 0.28]),
    ("dog", [0.48, 0.08, 0.68]),
    ("outpaces", [0.58, 0.18, 0.58]),
    ("sleeps", [0.78, 0.28, 0.08]),
    ("day", [0.68, 0.38, 0.18]),
    ("long", [0.38, 0.58, 0.48]),
    ("foxes", [0.28, 0.48, 0.58]),
    ("known", [0.18, 0.18, 0.78]),
    ("being", [0.08, 0.28, 0.68]),
    ("clever", [0.38, 0.68, 0.28]),
    ("animals", [0.58, 0.38, 0.18]),
];

const SENTENCE: &[Entry] = &[
    ("quick", [0.15, 0.85, 0.05]),
    ("brown", [0.25, 0.75, 0.15]),
    ("fox", [0.05, 0.45, 0.25]),
    ("jumps", [0.15, 0.35, 0.45]),
    ("over", [0.1, 0.65, 0.15]),
    ("lazy", [0.2, 0.55, 0.25]),
    ("dog", [0.45, 0.05, 0.75]),
    ("outpaces", [0.55, 0.15, 0.65]),
    ("sleeps", [0.75, 0.25, 0.05]),
    ("day", [0.65, 0.35, 0.15]),
    ("long", [0.35, 0.65, 0.45]),
    ("foxes", [0.25, 0.55, 0.65]),
    ("known", [0.15, 0.15, 0.85]),
    ("being", [0.05, 0.25, 0.75]),
    ("clever", [0.35, 0.75, 0.25]),
    ("animals", [0.55, 0.35, 0.15]),
];

/// Built-in demonstration tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingModel {
    /// royalty, animals and verbs for analogy exploration
    Explorer,
    /// fallback table for the representation demo
    Demo,
    #[serde(rename = "word2vec")]
    Word2Vec,
    #[serde(rename = "glove")]
    GloVe,
    #[serde(rename = "fasttext")]
    FastText,
    #[serde(rename = "doc2vec")]
    Doc2Vec,
    #[serde(rename = "sentence")]
    SentenceTransformer,
}

impl EmbeddingModel {
    pub const ALL: [EmbeddingModel; 7] = [
        EmbeddingModel::Explorer,
        EmbeddingModel::Demo,
        EmbeddingModel::Word2Vec,
        EmbeddingModel::GloVe,
        EmbeddingModel::FastText,
        EmbeddingModel::Doc2Vec,
        EmbeddingModel::SentenceTransformer,
    ];

    fn entries(self) -> &'static [Entry] {
        match self {
            EmbeddingModel::Explorer => EXPLORER,
            // the demo fallback shares the word2vec values
            EmbeddingModel::Demo | EmbeddingModel::Word2Vec => WORD2VEC,
            EmbeddingModel::GloVe => GLOVE,
            EmbeddingModel::FastText => FASTTEXT,
            EmbeddingModel::Doc2Vec => DOC2VEC,
            EmbeddingModel::SentenceTransformer => SENTENCE,
        }
    }

    /// Materialize the preset as a 3-dimensional table
    pub fn table(self) -> EmbeddingTable {
        EmbeddingTable::from_rows(self.entries().iter().copied())
    }
}
