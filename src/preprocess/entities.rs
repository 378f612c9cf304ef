use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Entity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Date,
    Time,
    Money,
    Percent,
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Organization => "ORGANIZATION",
            EntityLabel::Location => "LOCATION",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Money => "MONEY",
            EntityLabel::Percent => "PERCENT",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

const PATTERNS: &[(EntityLabel, &str)] = &[
    (EntityLabel::Person, r"\b(John|Mary|Robert|Lisa|Michael|Sarah|David|Jennifer|James|Elizabeth)\b"),
    (EntityLabel::Organization, r"\b(Google|Apple|Microsoft|Amazon|Facebook|Twitter|Netflix|Tesla|IBM|Intel)\b"),
    (EntityLabel::Location, r"\b(New York|London|Paris|Tokyo|Berlin|Rome|Moscow|Beijing|Sydney|Cairo)\b"),
    (
        EntityLabel::Date,
        r"\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(st|nd|rd|th)?(,\s+\d{4})?\b",
    ),
    (EntityLabel::Time, r"\b\d{1,2}:\d{2}\s*(am|pm|AM|PM)?\b"),
    // the leading \b needs a word char right before the `$`
    (EntityLabel::Money, r"\b\$\d+(\.\d{2})?\b"),
    (EntityLabel::Percent, r"\b\d+(\.\d+)?%\b"),
];

/// Regex pattern matcher for a fixed set of entity classes
#[derive(Debug, Clone)]
pub struct EntityRecognizer {
    patterns: Vec<(EntityLabel, Regex)>,
}

impl EntityRecognizer {
    /// Compile the built-in patterns
    ///
    /// `\b`, `\d` and `\s` are ASCII classes here.
    pub fn new() -> Result<Self> {
        let patterns = PATTERNS
            .iter()
            .map(|(label, pat)| Ok((*label, RegexBuilder::new(pat).unicode(false).build()?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Every match, grouped by pattern in pattern order, then by position
    pub fn recognize(&self, text: &str) -> Vec<Entity> {
        self.patterns
            .iter()
            .flat_map(|(label, re)| {
                re.find_iter(text).map(move |m| Entity { text: m.as_str().to_string(), label: *label })
            })
            .collect()
    }
}
