use serde::{Deserialize, Serialize};

use crate::vectorizer::token::{strip_punctuation, strip_symbols};

/// Cleaning passes, applied in field order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    pub remove_punctuation: bool,
    pub remove_numbers: bool,
    pub remove_extra_spaces: bool,
    pub remove_symbols: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            remove_punctuation: true,
            remove_numbers: true,
            remove_extra_spaces: true,
            remove_symbols: true,
        }
    }
}

/// Clean raw text
///
/// Symbol removal runs after whitespace collapsing, so a symbol between two
/// spaces leaves a double space behind.
pub fn clean_text(text: &str, options: &CleaningOptions) -> String {
    let mut text = text.to_string();
    if options.remove_punctuation {
        text = strip_punctuation(&text);
    }
    if options.remove_numbers {
        text.retain(|c| !c.is_ascii_digit());
    }
    if options.remove_extra_spaces {
        text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    }
    if options.remove_symbols {
        text = strip_symbols(&text);
    }
    tracing::debug!(len = text.len(), "cleaned text");
    text
}
