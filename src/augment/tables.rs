//! Fixed lookup tables behind the augmentation techniques

const SYNONYMS: &[(&str, &[&str])] = &[
    ("quick", &["fast", "rapid", "swift"]),
    ("brown", &["tan", "chestnut", "amber"]),
    ("fox", &["vixen", "reynard", "canid"]),
    ("jumps", &["leaps", "hops", "springs"]),
    ("over", &["above", "across", "beyond"]),
    ("lazy", &["idle", "sluggish", "indolent"]),
    ("dog", &["canine", "hound", "pooch"]),
];

const BACK_TRANSLATIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "fr",
        &[
            ("The quick brown fox jumps over the lazy dog.", "The fast brown fox leaps over the idle dog."),
            ("Hello world", "Hello to the world"),
            ("I love programming", "I adore coding"),
        ],
    ),
    (
        "es",
        &[
            ("The quick brown fox jumps over the lazy dog.", "The rapid brown fox jumps above the sleepy dog."),
            ("Hello world", "Hello to the world"),
            ("I love programming", "I love to program"),
        ],
    ),
    (
        "de",
        &[
            ("The quick brown fox jumps over the lazy dog.", "The swift brown fox jumps over the sluggish dog."),
            ("Hello world", "Hello to the world"),
            ("I love programming", "I love to code"),
        ],
    ),
];

const CONTEXTUAL: &[(&str, &str)] = &[
    ("The quick brown fox jumps over the lazy dog.", "The swift brown fox leaps over the sleeping dog."),
    ("Hello world", "Greetings universe"),
    ("I love programming", "I enjoy coding"),
];

const ALTERNATIVES: &[(&str, &str)] = &[("quick", "rapid"), ("jumps", "leaps"), ("brown", "tawny"), ("lazy", "sleepy")];

fn lookup<'a, V>(table: &'a [(&str, V)], key: &str) -> Option<&'a V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}

/// Synonyms of a lowercased word
pub fn synonyms(word: &str) -> Option<&'static [&'static str]> {
    lookup(SYNONYMS, word).copied()
}

/// Canned round trip of `text` through `language`
pub fn back_translation(language: &str, text: &str) -> Option<&'static str> {
    lookup(BACK_TRANSLATIONS, language).and_then(|t| lookup(*t, text)).copied()
}

/// Canned contextual rewrite of a whole text
pub fn contextual(text: &str) -> Option<&'static str> {
    lookup(CONTEXTUAL, text).copied()
}

/// Replacement for one lowercased word in the long-word pass
pub fn alternative(word: &str) -> Option<&'static str> {
    lookup(ALTERNATIVES, word).copied()
}

/// Languages with canned back-translations
pub fn languages() -> impl Iterator<Item = &'static str> {
    BACK_TRANSLATIONS.iter().map(|(lang, _)| *lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_exact() {
        assert_eq!(synonyms("dog"), Some(&["canine", "hound", "pooch"][..]));
        assert_eq!(synonyms("Dog"), None);
        assert_eq!(back_translation("es", "Hello world"), Some("Hello to the world"));
        assert_eq!(back_translation("es", "hello world"), None);
        assert_eq!(contextual("Hello world"), Some("Greetings universe"));
        assert_eq!(alternative("lazy"), Some("sleepy"));
        assert_eq!(languages().collect::<Vec<_>>(), vec!["fr", "es", "de"]);
    }
}
