use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::Result;

const CONTRACTIONS: &[(&str, &str)] = &[
    ("I'm", "I am"),
    ("I'd", "I would"),
    ("I'll", "I will"),
    ("I've", "I have"),
    ("you're", "you are"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you've", "you have"),
    ("he's", "he is"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("she's", "she is"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("it's", "it is"),
    ("it'd", "it would"),
    ("it'll", "it will"),
    ("we're", "we are"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we've", "we have"),
    ("they're", "they are"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they've", "they have"),
    ("that's", "that is"),
    ("that'd", "that would"),
    ("that'll", "that will"),
    ("who's", "who is"),
    ("who'd", "who would"),
    ("who'll", "who will"),
    ("what's", "what is"),
    ("what'd", "what would"),
    ("what'll", "what will"),
    ("where's", "where is"),
    ("where'd", "where would"),
    ("where'll", "where will"),
    ("when's", "when is"),
    ("when'd", "when would"),
    ("when'll", "when will"),
    ("why's", "why is"),
    ("why'd", "why would"),
    ("why'll", "why will"),
    ("how's", "how is"),
    ("how'd", "how would"),
    ("how'll", "how will"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("can't", "cannot"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("won't", "will not"),
    ("wouldn't", "would not"),
    ("let's", "let us"),
    ("here's", "here is"),
    ("there's", "there is"),
];

/// Table-driven contraction expander
///
/// Entries are applied in table order as case-insensitive substring
/// replacements, with no word boundaries. An earlier entry can therefore
/// rewrite part of a later one: `She'd` becomes `She would` through `he'd`.
#[derive(Debug, Clone)]
pub struct ContractionExpander {
    rules: Vec<(Regex, &'static str)>,
}

impl ContractionExpander {
    pub fn new() -> Result<Self> {
        let rules = CONTRACTIONS
            .iter()
            .map(|(from, to)| {
                let re = RegexBuilder::new(&regex::escape(from)).case_insensitive(true).build()?;
                Ok((re, *to))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn expand(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (re, to)| re.replace_all(&acc, NoExpand(*to)).into_owned())
    }
}

/// Expand contractions with the built-in table
pub fn expand_contractions(text: &str) -> Result<String> {
    Ok(ContractionExpander::new()?.expand(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_case_insensitively_in_table_order() {
        let out = expand_contractions("She'd like to know how I'd do that!").unwrap();
        assert_eq!(out, "She would like to know how I would do that!");
        assert_eq!(expand_contractions("DON'T stop").unwrap(), "do not stop");
    }

    #[test]
    fn text_without_contractions_is_unchanged() {
        let ex = ContractionExpander::new().unwrap();
        assert_eq!(ex.expand("plain words here"), "plain words here");
        assert_eq!(ex.expand(""), "");
    }
}
