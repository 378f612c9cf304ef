use serde::{Deserialize, Serialize};

/// Curated punctuation set removed by the first stripping pass
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~', '(', ')',
];

/// English stopword list used by the tokenizer and the preprocessing stage
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "to", "of", "in", "for", "with", "on", "at",
    "by", "that", "this", "these", "those",
];

/// Shorter stopword list used by the one-hot encoder demo
pub const ONE_HOT_STOPWORDS: &[&str] = &["the", "is", "and", "of", "to", "a", "in", "for", "on", "with"];

/// Stopword list applied when `remove_stopwords` is set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordList {
    /// [`STOPWORDS`], compared case-insensitively
    #[default]
    Preprocessing,
    /// [`ONE_HOT_STOPWORDS`], compared as-is after the optional lowercasing
    OneHot,
}

impl StopwordList {
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        match self {
            StopwordList::Preprocessing => is_stopword(token),
            StopwordList::OneHot => ONE_HOT_STOPWORDS.contains(&token),
        }
    }
}

/// Tokenizer options
///
/// `strip_symbols` only applies together with `strip_punctuation`: it runs the
/// catch-all pass that removes every char that is neither a word char nor
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizeOptions {
    pub lowercase: bool,
    pub strip_punctuation: bool,
    pub strip_symbols: bool,
    pub remove_stopwords: bool,
    pub stopwords: StopwordList,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_punctuation: true,
            strip_symbols: true,
            remove_stopwords: false,
            stopwords: StopwordList::Preprocessing,
        }
    }
}

impl TokenizeOptions {
    /// Options that leave the text untouched apart from whitespace splitting
    pub fn raw() -> Self {
        Self {
            lowercase: false,
            strip_punctuation: false,
            strip_symbols: false,
            remove_stopwords: false,
            stopwords: StopwordList::Preprocessing,
        }
    }

    /// Options of the one-hot encoder: lowercase, drop non-word chars and
    /// the short stopword list
    pub fn one_hot() -> Self {
        Self {
            remove_stopwords: true,
            stopwords: StopwordList::OneHot,
            ..Self::default()
        }
    }

    pub fn with_stopwords_removed(mut self) -> Self {
        self.remove_stopwords = true;
        self
    }
}

/// A normalized token and its position in the emitted token sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

/// ASCII word char, the `\w` class of the demo's regexes
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Remove the curated punctuation set
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Remove every char that is neither a word char nor whitespace
pub fn strip_symbols(text: &str) -> String {
    text.chars().filter(|&c| is_word_char(c) || c.is_whitespace()).collect()
}

/// Case-insensitive stopword check
#[inline]
pub fn is_stopword(token: &str) -> bool {
    let lower = token.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}

/// Split raw text into normalized word tokens
///
/// # Arguments
/// * `text` - raw document text, may be empty
/// * `options` - normalization options
///
/// # Returns
/// * `Vec<String>` - tokens in document order; empty for empty or
///   punctuation-only input
pub fn tokenize(text: &str, options: &TokenizeOptions) -> Vec<String> {
    let mut text = if options.lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    };
    if options.strip_punctuation {
        text = strip_punctuation(&text);
        if options.strip_symbols {
            text = strip_symbols(&text);
        }
    }
    text.split_whitespace()
        .filter(|t| !t.is_empty())
        .filter(|t| !(options.remove_stopwords && options.stopwords.contains(t)))
        .map(str::to_string)
        .collect()
}

/// Same as [`tokenize`] but keeps each token's position
pub fn tokenize_positions(text: &str, options: &TokenizeOptions) -> Vec<Token> {
    tokenize(text, options)
        .into_iter()
        .enumerate()
        .map(|(position, text)| Token { text, position })
        .collect()
}
