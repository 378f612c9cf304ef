pub mod contractions;
pub mod entities;
pub mod resolver;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::vectorizer::token::is_stopword;

pub use contractions::{expand_contractions, ContractionExpander};
pub use entities::{Entity, EntityLabel, EntityRecognizer};
pub use resolver::{Lemmatizer, SpellingCorrector, SuffixStemmer, TokenResolver};

/// Tokens dropped outright when punctuation removal is on
const PUNCTUATION_TOKENS: &[&str] = &[".", ",", "!", "?", ";", ":", "\"", "'", "(", ")", "[", "]", "{", "}"];

/// Which preprocessing branches run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessOptions {
    pub remove_stopwords: bool,
    pub remove_punctuation: bool,
    pub lowercase: bool,
    pub stem: bool,
    pub lemmatize: bool,
    pub expand_contractions: bool,
    pub correct_spelling: bool,
    pub detect_entities: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            remove_punctuation: true,
            lowercase: true,
            stem: true,
            lemmatize: true,
            expand_contractions: true,
            correct_spelling: true,
            detect_entities: true,
        }
    }
}

/// Output of every preprocessing branch
///
/// Disabled branches leave their field empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreprocessResult {
    pub sentences: Vec<String>,
    pub tokens: Vec<String>,
    pub filtered: Vec<String>,
    pub stems: Vec<String>,
    pub lemmas: Vec<String>,
    pub expanded: String,
    pub corrected: String,
    pub entities: Vec<Entity>,
    /// corrected, else expanded, else lemmas, else stems, else filtered
    pub processed_text: String,
}

/// Split on runs of `.`, `!`, `?`, dropping blank pieces
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stopword, punctuation and case filtering over whitespace tokens
fn filter_tokens(tokens: &[String], options: &PreprocessOptions) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !(options.remove_stopwords && is_stopword(t)))
        .filter(|t| !(options.remove_punctuation && PUNCTUATION_TOKENS.contains(&t.as_str())))
        .map(|t| {
            let t = if options.remove_punctuation {
                // underscore goes too
                t.chars().filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace()).collect()
            } else {
                t.clone()
            };
            if options.lowercase {
                t.to_lowercase()
            } else {
                t
            }
        })
        .collect()
}

/// Reusable preprocessing stage with its patterns compiled once
#[derive(Debug, Clone)]
pub struct Preprocessor {
    stemmer: SuffixStemmer,
    lemmatizer: Lemmatizer,
    speller: SpellingCorrector,
    contractions: ContractionExpander,
    entities: EntityRecognizer,
}

impl Preprocessor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            stemmer: SuffixStemmer,
            lemmatizer: Lemmatizer::default(),
            speller: SpellingCorrector::default(),
            contractions: ContractionExpander::new()?,
            entities: EntityRecognizer::new()?,
        })
    }

    /// Run every enabled branch over `text`
    ///
    /// Stems and lemmas derive from the filtered tokens. Expansion, spelling
    /// and entity detection each read the raw text, so `processed_text`
    /// reflects only the highest-priority enabled branch.
    pub fn run(&self, text: &str, options: &PreprocessOptions) -> PreprocessResult {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let filtered = filter_tokens(&tokens, options);

        let stems = if options.stem { self.stemmer.apply(&filtered) } else { Vec::new() };
        let lemmas = if options.lemmatize { self.lemmatizer.apply(&filtered) } else { Vec::new() };
        let expanded = if options.expand_contractions { self.contractions.expand(text) } else { String::new() };
        let corrected = if options.correct_spelling { self.speller.correct_text(text) } else { String::new() };
        let entities = if options.detect_entities { self.entities.recognize(text) } else { Vec::new() };

        let processed_text = if options.correct_spelling {
            corrected.clone()
        } else if options.expand_contractions {
            expanded.clone()
        } else if options.lemmatize {
            lemmas.join(" ")
        } else if options.stem {
            stems.join(" ")
        } else {
            filtered.join(" ")
        };

        tracing::debug!(
            tokens = tokens.len(),
            filtered = filtered.len(),
            entities = entities.len(),
            "preprocessed text"
        );
        PreprocessResult {
            sentences: split_sentences(text),
            tokens,
            filtered,
            stems,
            lemmas,
            expanded,
            corrected,
            entities,
            processed_text,
        }
    }
}

/// One-shot preprocessing with the built-in tables
pub fn preprocess(text: &str, options: &PreprocessOptions) -> Result<PreprocessResult> {
    Ok(Preprocessor::new()?.run(text, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str =
        "The quick brown fox jumps over the lazy dog. She'd like to know how I'd do that! This sintence has misspelled werds.";

    #[test]
    fn demo_sentence_runs_every_branch() {
        let r = preprocess(DEMO, &PreprocessOptions::default()).unwrap();
        assert_eq!(r.sentences.len(), 3);
        assert_eq!(r.sentences[1], "She'd like to know how I'd do that");
        assert_eq!(r.tokens.len(), 22);
        assert_eq!(
            r.filtered,
            vec![
                "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "shed", "like", "know", "how", "id", "do",
                "that", "sintence", "has", "misspelled", "werds"
            ]
        );
        assert_eq!(r.stems[3], "jump");
        assert_eq!(r.stems[7], "sh");
        assert_eq!(r.lemmas[3], "jump");
        assert_eq!(r.lemmas[15], "have");
        assert_eq!(
            r.expanded,
            "The quick brown fox jumps over the lazy dog. She would like to know how I would do that! This sintence has misspelled werds."
        );
        assert_eq!(
            r.corrected,
            "The quick brown fox jumps over the lazy dog. She'd like to know how I'd do that! This sentence has misspelled words."
        );
        assert!(r.entities.is_empty());
        assert_eq!(r.processed_text, r.corrected);
    }

    #[test]
    fn processed_text_falls_back_by_priority() {
        let opts = PreprocessOptions { correct_spelling: false, ..Default::default() };
        let r = preprocess("I'm here", &opts).unwrap();
        assert_eq!(r.processed_text, "I am here");
        assert!(r.corrected.is_empty());

        let opts = PreprocessOptions { correct_spelling: false, expand_contractions: false, ..Default::default() };
        assert_eq!(preprocess("dogs went", &opts).unwrap().processed_text, "dogs go");

        let opts = PreprocessOptions {
            correct_spelling: false,
            expand_contractions: false,
            lemmatize: false,
            ..Default::default()
        };
        assert_eq!(preprocess("dogs went", &opts).unwrap().processed_text, "dog went");

        let opts = PreprocessOptions {
            correct_spelling: false,
            expand_contractions: false,
            lemmatize: false,
            stem: false,
            ..Default::default()
        };
        assert_eq!(preprocess("The Dogs, went", &opts).unwrap().processed_text, "dogs went");
    }

    #[test]
    fn punctuation_tokens_and_underscores_are_removed() {
        let opts = PreprocessOptions { remove_stopwords: false, ..Default::default() };
        let r = preprocess("snake_case ( value ) !", &opts).unwrap();
        assert_eq!(r.filtered, vec!["snakecase", "value"]);
    }

    #[test]
    fn empty_input_yields_empty_branches() {
        let r = preprocess("", &PreprocessOptions::default()).unwrap();
        assert!(r.sentences.is_empty());
        assert!(r.tokens.is_empty());
        assert!(r.filtered.is_empty());
        assert_eq!(r.processed_text, "");
    }

    #[test]
    fn options_fill_missing_fields_from_json() {
        let opts: PreprocessOptions = serde_json::from_str(r#"{"stem": false}"#).unwrap();
        assert!(!opts.stem);
        assert!(opts.lemmatize);
    }
}
