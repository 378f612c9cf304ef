pub mod tables;

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Augmentation technique, in the order [`augment_all`] applies them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technique {
    SynonymReplacement,
    WordShuffling,
    NoiseInjection,
    RandomWordDeletion,
    BackTranslation,
    ContextualWordSubstitution,
}

impl Technique {
    pub const ALL: [Technique; 6] = [
        Technique::SynonymReplacement,
        Technique::WordShuffling,
        Technique::NoiseInjection,
        Technique::RandomWordDeletion,
        Technique::BackTranslation,
        Technique::ContextualWordSubstitution,
    ];

    /// Display name used in exports
    pub fn name(&self) -> &'static str {
        match self {
            Technique::SynonymReplacement => "Synonym Replacement",
            Technique::WordShuffling => "Word Shuffling",
            Technique::NoiseInjection => "Noise Injection",
            Technique::RandomWordDeletion => "Random Word Deletion",
            Technique::BackTranslation => "Back Translation",
            Technique::ContextualWordSubstitution => "Contextual Word Substitution",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One augmented variant of the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Augmentation {
    pub technique: Technique,
    pub text: String,
}

/// Parameters for [`augment_all`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentOptions {
    pub synonym_probability: f64,
    pub noise_probability: f64,
    pub deletion_probability: f64,
    /// language code for mock back-translation (`fr`, `es`, `de`)
    pub language: String,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            synonym_probability: 0.3,
            noise_probability: 0.1,
            deletion_probability: 0.2,
            language: "fr".to_string(),
        }
    }
}

/// Replace words with a random synonym with probability `p` each
///
/// Words are split on single spaces and looked up lowercased; words without
/// synonyms stay as they are.
pub fn synonym_replacement<R: Rng + ?Sized>(text: &str, p: f64, rng: &mut R) -> Result<String> {
    let p = PipelineError::check_probability(p)?;
    Ok(text
        .split(' ')
        .map(|word| {
            if rng.gen::<f64>() < p {
                if let Some(choice) = tables::synonyms(&word.to_lowercase()).and_then(|s| s.choose(&mut *rng)) {
                    return choice.to_string();
                }
            }
            word.to_string()
        })
        .collect::<Vec<_>>()
        .join(" "))
}

/// Uniform random permutation of the space-separated words
pub fn word_shuffle<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split(' ').collect();
    words.shuffle(rng);
    words.join(" ")
}

/// Replace ASCII letters with a random lowercase letter with probability `p`
pub fn noise_injection<R: Rng + ?Sized>(text: &str, p: f64, rng: &mut R) -> Result<String> {
    let p = PipelineError::check_probability(p)?;
    Ok(text
        .chars()
        .map(|c| {
            if rng.gen::<f64>() < p && c.is_ascii_alphabetic() {
                char::from(rng.gen_range(b'a'..=b'z'))
            } else {
                c
            }
        })
        .collect())
}

/// Drop each space-separated word with probability `p`
///
/// If every word is dropped, one random word of the input is returned.
pub fn random_deletion<R: Rng + ?Sized>(text: &str, p: f64, rng: &mut R) -> Result<String> {
    let p = PipelineError::check_probability(p)?;
    let words: Vec<&str> = text.split(' ').collect();
    let kept: Vec<&str> = words.iter().copied().filter(|_| rng.gen::<f64>() > p).collect();
    if kept.is_empty() {
        return Ok(words.choose(rng).map(|w| w.to_string()).unwrap_or_default());
    }
    Ok(kept.join(" "))
}

/// Mock round-trip translation through `language`
///
/// Only a few fixed sentences have a canned result; anything else gets a
/// `(translated to .. and back)` suffix.
pub fn back_translation(text: &str, language: &str) -> String {
    match tables::back_translation(language, text) {
        Some(out) => out.to_string(),
        None => format!("{text} (translated to {language} and back)"),
    }
}

/// Runs of five or more ASCII word chars, compiled once
fn long_word() -> Result<&'static Regex> {
    static LONG_WORD: std::sync::OnceLock<std::result::Result<Regex, regex::Error>> = std::sync::OnceLock::new();

    LONG_WORD
        .get_or_init(|| RegexBuilder::new(r"\b\w{5,}\b").unicode(false).build())
        .as_ref()
        .map_err(|e| PipelineError::Pattern(e.clone()))
}

/// Context-aware substitution stand-in
///
/// Known sentences map to a canned rewrite. Otherwise words of five or more
/// word chars are swapped through a short alternatives table.
pub fn contextual_substitution(text: &str) -> Result<String> {
    if let Some(out) = tables::contextual(text) {
        return Ok(out.to_string());
    }
    Ok(long_word()?
        .replace_all(text, |caps: &Captures<'_>| {
            let word = &caps[0];
            tables::alternative(&word.to_lowercase())
                .map(str::to_string)
                .unwrap_or_else(|| word.to_string())
        })
        .into_owned())
}

/// Run every technique on `text` in [`Technique::ALL`] order
pub fn augment_all<R: Rng + ?Sized>(text: &str, options: &AugmentOptions, rng: &mut R) -> Result<Vec<Augmentation>> {
    let mut out = Vec::with_capacity(Technique::ALL.len());
    for technique in Technique::ALL {
        let augmented = match technique {
            Technique::SynonymReplacement => synonym_replacement(text, options.synonym_probability, &mut *rng)?,
            Technique::WordShuffling => word_shuffle(text, &mut *rng),
            Technique::NoiseInjection => noise_injection(text, options.noise_probability, &mut *rng)?,
            Technique::RandomWordDeletion => random_deletion(text, options.deletion_probability, &mut *rng)?,
            Technique::BackTranslation => back_translation(text, &options.language),
            Technique::ContextualWordSubstitution => contextual_substitution(text)?,
        };
        out.push(Augmentation { technique, text: augmented });
    }
    tracing::debug!(count = out.len(), language = %options.language, "augmented text");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FOX: &str = "The quick brown fox jumps over the lazy dog.";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn sorted_words(s: &str) -> Vec<&str> {
        let mut v: Vec<&str> = s.split(' ').collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn synonym_extremes() {
        assert_eq!(synonym_replacement(FOX, 0.0, &mut rng()).unwrap(), FOX);

        let out = synonym_replacement("quick dog cat", 1.0, &mut rng()).unwrap();
        let words: Vec<&str> = out.split(' ').collect();
        assert!(["fast", "rapid", "swift"].contains(&words[0]));
        assert!(["canine", "hound", "pooch"].contains(&words[1]));
        assert_eq!(words[2], "cat");
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let out = word_shuffle(FOX, &mut rng());
        assert_eq!(sorted_words(&out), sorted_words(FOX));
        assert_eq!(word_shuffle("", &mut rng()), "");
    }

    #[test]
    fn noise_only_touches_ascii_letters() {
        let text = "Ab1 ,é!";
        let out = noise_injection(text, 1.0, &mut rng()).unwrap();
        let pairs: Vec<(char, char)> = text.chars().zip(out.chars()).collect();
        assert_eq!(out.chars().count(), text.chars().count());
        for (before, after) in pairs {
            if before.is_ascii_alphabetic() {
                assert!(after.is_ascii_lowercase());
            } else {
                assert_eq!(before, after);
            }
        }
        assert_eq!(noise_injection(text, 0.0, &mut rng()).unwrap(), text);
    }

    #[test]
    fn deletion_never_returns_nothing_for_words() {
        let out = random_deletion("alpha beta gamma", 1.0, &mut rng()).unwrap();
        assert!(["alpha", "beta", "gamma"].contains(&out.as_str()));
        assert_eq!(random_deletion("alpha beta", 0.0, &mut rng()).unwrap(), "alpha beta");
    }

    #[test]
    fn probabilities_are_validated() {
        assert!(matches!(
            synonym_replacement(FOX, 1.5, &mut rng()),
            Err(PipelineError::InvalidProbability(_))
        ));
        assert!(noise_injection(FOX, -0.1, &mut rng()).is_err());
        assert!(random_deletion(FOX, f64::NAN, &mut rng()).is_err());
    }

    #[test]
    fn back_translation_tables_and_fallback() {
        assert_eq!(back_translation(FOX, "fr"), "The fast brown fox leaps over the idle dog.");
        assert_eq!(back_translation("I love programming", "de"), "I love to code");
        assert_eq!(back_translation("Hi there", "es"), "Hi there (translated to es and back)");
        assert_eq!(back_translation(FOX, "it"), format!("{FOX} (translated to it and back)"));
    }

    #[test]
    fn contextual_substitution_table_then_long_words() {
        assert_eq!(
            contextual_substitution(FOX).unwrap(),
            "The swift brown fox leaps over the sleeping dog."
        );
        // "lazy" is too short for the long-word pass
        assert_eq!(
            contextual_substitution("A Quick brown fox jumps near a lazy cat").unwrap(),
            "A rapid tawny fox leaps near a lazy cat"
        );
    }

    #[test]
    fn long_words_are_ascii_only() {
        // accented letters are not word chars, so they bound the match
        assert_eq!(contextual_substitution("équick jumpsé").unwrap(), "érapid leapsé");
        assert_eq!(contextual_substitution("quick").unwrap(), "rapid");
        assert!(std::ptr::eq(long_word().unwrap(), long_word().unwrap()));
    }

    #[test]
    fn augment_all_follows_technique_order() {
        let out = augment_all(FOX, &AugmentOptions::default(), &mut rng()).unwrap();
        let techniques: Vec<Technique> = out.iter().map(|a| a.technique).collect();
        assert_eq!(techniques, Technique::ALL.to_vec());
        assert_eq!(out[4].text, "The fast brown fox leaps over the idle dog.");
        assert_eq!(Technique::RandomWordDeletion.to_string(), "Random Word Deletion");

        let bad = AugmentOptions { noise_probability: 2.0, ..AugmentOptions::default() };
        assert!(augment_all(FOX, &bad, &mut rng()).is_err());
    }

    #[test]
    fn same_seed_same_output() {
        let a = augment_all(FOX, &AugmentOptions::default(), &mut rng()).unwrap();
        let b = augment_all(FOX, &AugmentOptions::default(), &mut rng()).unwrap();
        assert_eq!(a, b);
    }
}
