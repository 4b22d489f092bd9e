//! Grammatical categories assigned to words by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of word classes the grammar is written against.
///
/// The textual tag is the upper-case variant name, which is also how the
/// dictionary file spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordClass {
    Determiner,
    Pronoun,
    Adjective,
    Noun,
    Verb,
    Adverb,
    Conjunction,
    Preposition,
}

impl WordClass {
    /// Every class, in declaration order.
    pub const ALL: [WordClass; 8] = [
        WordClass::Determiner,
        WordClass::Pronoun,
        WordClass::Adjective,
        WordClass::Noun,
        WordClass::Verb,
        WordClass::Adverb,
        WordClass::Conjunction,
        WordClass::Preposition,
    ];

    /// Class assigned to words the dictionary does not know.
    pub const DEFAULT: WordClass = WordClass::Noun;

    pub fn tag(self) -> &'static str {
        match self {
            WordClass::Determiner => "DETERMINER",
            WordClass::Pronoun => "PRONOUN",
            WordClass::Adjective => "ADJECTIVE",
            WordClass::Noun => "NOUN",
            WordClass::Verb => "VERB",
            WordClass::Adverb => "ADVERB",
            WordClass::Conjunction => "CONJUNCTION",
            WordClass::Preposition => "PREPOSITION",
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A class tag that is not one of the eight known tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown word class '{0}'")]
pub struct UnknownWordClass(pub String);

impl FromStr for WordClass {
    type Err = UnknownWordClass;

    /// Tags are matched exactly; `noun` is not `NOUN`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        WordClass::ALL
            .into_iter()
            .find(|class| class.tag() == tag)
            .ok_or_else(|| UnknownWordClass(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_str() {
        for class in WordClass::ALL {
            assert_eq!(class.tag().parse::<WordClass>(), Ok(class));
        }
    }

    #[test]
    fn test_lowercase_tag_is_rejected() {
        assert_eq!(
            "noun".parse::<WordClass>(),
            Err(UnknownWordClass("noun".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_tag() {
        let json = serde_json::to_string(&WordClass::Preposition).unwrap();
        assert_eq!(json, "\"PREPOSITION\"");
    }
}
