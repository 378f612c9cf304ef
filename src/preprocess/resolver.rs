use std::collections::HashMap;

use crate::vectorizer::token::is_word_char;

/// Token-level lookup stage
///
/// A resolver either maps a token to its replacement or declines with
/// `None`. Declined tokens pass through unchanged, so a table-backed resolver
/// can later be swapped for a real model without touching the pipeline.
pub trait TokenResolver {
    /// Replacement for one token, `None` when the resolver has no entry
    fn resolve(&self, token: &str) -> Option<String>;

    /// Resolve every token, keeping unresolved tokens as they are
    fn apply(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| self.resolve(t).unwrap_or_else(|| t.clone()))
            .collect()
    }
}

const LEMMAS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("has", "have"),
    ("had", "have"),
    ("goes", "go"),
    ("went", "go"),
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("running", "run"),
    ("ran", "run"),
    ("saying", "say"),
    ("said", "say"),
    ("jumps", "jump"),
    ("jumped", "jump"),
    ("jumping", "jump"),
];

/// Suffix rules, first match wins
const SUFFIXES: &[&str] = &["ing", "ed", "s", "ly"];

const MISSPELLINGS: &[(&str, &str)] = &[
    ("sintence", "sentence"),
    ("werds", "words"),
    ("teh", "the"),
    ("gud", "good"),
    ("recieve", "receive"),
    ("beleive", "believe"),
    ("freind", "friend"),
    ("wierd", "weird"),
    ("acheive", "achieve"),
    ("accomodate", "accommodate"),
    ("accross", "across"),
    ("agressive", "aggressive"),
    ("apparant", "apparent"),
    ("appearence", "appearance"),
    ("arguement", "argument"),
    ("assasination", "assassination"),
    ("basicly", "basically"),
    ("begining", "beginning"),
    ("belive", "believe"),
    ("buisness", "business"),
    ("calender", "calendar"),
    ("camoflage", "camouflage"),
    ("catagory", "category"),
    ("cemetary", "cemetery"),
    ("changable", "changeable"),
    ("cheif", "chief"),
    ("collegue", "colleague"),
    ("comming", "coming"),
    ("commitee", "committee"),
    ("completly", "completely"),
    ("concious", "conscious"),
    ("curiousity", "curiosity"),
    ("definately", "definitely"),
    ("desparate", "desperate"),
    ("dissapoint", "disappoint"),
    ("embarass", "embarrass"),
    ("enviroment", "environment"),
    ("existance", "existence"),
    ("familar", "familiar"),
    ("finaly", "finally"),
    ("foriegn", "foreign"),
    ("goverment", "government"),
    ("gaurd", "guard"),
    ("happend", "happened"),
    ("harrass", "harass"),
    ("honourary", "honorary"),
    ("humourous", "humorous"),
    ("independant", "independent"),
    ("intresting", "interesting"),
    ("knowlege", "knowledge"),
    ("liason", "liaison"),
    ("libary", "library"),
    ("lisence", "license"),
    ("maintainance", "maintenance"),
    ("millenium", "millennium"),
    ("miniscule", "minuscule"),
    ("mischevious", "mischievous"),
    ("mispell", "misspell"),
    ("neccessary", "necessary"),
    ("noticable", "noticeable"),
    ("occassion", "occasion"),
    ("occurance", "occurrence"),
    ("occured", "occurred"),
    ("paralel", "parallel"),
    ("parliment", "parliament"),
    ("persistant", "persistent"),
    ("posession", "possession"),
    ("prefered", "preferred"),
    ("propoganda", "propaganda"),
    ("publically", "publicly"),
    ("realy", "really"),
    ("refered", "referred"),
    ("relevent", "relevant"),
    ("religous", "religious"),
    ("remeber", "remember"),
    ("resistence", "resistance"),
    ("responsability", "responsibility"),
    ("rythm", "rhythm"),
    ("seperate", "separate"),
    ("seige", "siege"),
    ("succesful", "successful"),
    ("supercede", "supersede"),
    ("supress", "suppress"),
    ("surpise", "surprise"),
    ("tendancy", "tendency"),
    ("therefor", "therefore"),
    ("threshhold", "threshold"),
    ("tommorow", "tomorrow"),
    ("tounge", "tongue"),
    ("truely", "truly"),
    ("unforseen", "unforeseen"),
    ("unfortunatly", "unfortunately"),
    ("untill", "until"),
];

/// Fixed lemma table, keys compared lowercased
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    table: HashMap<&'static str, &'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self { table: LEMMAS.iter().copied().collect() }
    }
}

impl TokenResolver for Lemmatizer {
    fn resolve(&self, token: &str) -> Option<String> {
        self.table.get(token.to_lowercase().as_str()).map(|l| l.to_string())
    }
}

/// Strips the first matching suffix of `ing`, `ed`, `s`, `ly`
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixStemmer;

impl TokenResolver for SuffixStemmer {
    fn resolve(&self, token: &str) -> Option<String> {
        SUFFIXES
            .iter()
            .find_map(|suffix| token.strip_suffix(suffix))
            .map(str::to_string)
    }
}

/// Fixed misspelling table
///
/// A token is looked up after lowercasing and dropping non-word chars. The
/// fix replaces the first case-insensitive occurrence of the key inside the
/// surface token, so trailing punctuation survives (`werds.` -> `words.`).
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    table: HashMap<&'static str, &'static str>,
}

impl Default for SpellingCorrector {
    fn default() -> Self {
        Self { table: MISSPELLINGS.iter().copied().collect() }
    }
}

impl SpellingCorrector {
    /// Correct every whitespace-separated word, joining with single spaces
    pub fn correct_text(&self, text: &str) -> String {
        split_whitespace_runs(text)
            .into_iter()
            .map(|word| self.resolve(word).unwrap_or_else(|| word.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl TokenResolver for SpellingCorrector {
    fn resolve(&self, token: &str) -> Option<String> {
        let key: String = token.to_lowercase().chars().filter(|&c| is_word_char(c)).collect();
        let fix = self.table.get(key.as_str())?;
        // key is ASCII, so every match offset is a char boundary
        let start = token
            .as_bytes()
            .windows(key.len())
            .position(|w| w.eq_ignore_ascii_case(key.as_bytes()))?;
        let mut out = String::with_capacity(token.len() + fix.len());
        out.push_str(&token[..start]);
        out.push_str(fix);
        out.push_str(&token[start + key.len()..]);
        Some(out)
    }
}

/// Split on runs of whitespace, keeping the empty leading or trailing piece
/// a run at either end produces
pub(crate) fn split_whitespace_runs(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_ws = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(&text[start..i]);
                in_ws = true;
            }
        } else if in_ws {
            start = i;
            in_ws = false;
        }
    }
    out.push(if in_ws { "" } else { &text[start..] });
    out
}
