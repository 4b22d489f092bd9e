//! Word classification
//!
//! The classifier holds a borrowed, read-only [Dictionary]. It never mutates it, so one
//! dictionary can back any number of classifiers across threads.

use super::{scan, LexError};
use crate::sentex::dictionary::Dictionary;
use crate::sentex::token::Token;

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> Classifier<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Scan and classify `source`, one token per maximal letter run, in source order.
    pub fn classify(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let tokens = scan(source)?
            .into_iter()
            .map(|(_, span)| {
                let text = source[span.clone()].to_ascii_lowercase();
                let class = self.dictionary.class_of(&text);
                Token::new(class, text, span.start)
            })
            .collect();
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentex::token::WordClass;

    fn dictionary() -> Dictionary {
        [
            ("the", WordClass::Determiner),
            ("cat", WordClass::Noun),
            ("runs", WordClass::Verb),
            ("quickly", WordClass::Adverb),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_classifies_known_words() {
        let dictionary = dictionary();
        let tokens = Classifier::new(&dictionary)
            .classify("the cat runs quickly")
            .unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new(WordClass::Determiner, "the", 0),
                Token::new(WordClass::Noun, "cat", 4),
                Token::new(WordClass::Verb, "runs", 8),
                Token::new(WordClass::Adverb, "quickly", 13),
            ]
        );
    }

    #[test]
    fn test_unknown_words_default_to_noun() {
        let dictionary = dictionary();
        let tokens = Classifier::new(&dictionary).classify("zebra").unwrap();
        assert_eq!(tokens, vec![Token::new(WordClass::Noun, "zebra", 0)]);
    }

    #[test]
    fn test_input_is_lowercased_before_lookup() {
        let dictionary = dictionary();
        let tokens = Classifier::new(&dictionary)
            .classify("The CAT Runs")
            .unwrap();
        let classes: Vec<_> = tokens.iter().map(|t| t.class).collect();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(
            classes,
            vec![WordClass::Determiner, WordClass::Noun, WordClass::Verb]
        );
        assert_eq!(texts, vec!["the", "cat", "runs"]);
    }

    #[test]
    fn test_invalid_character_discards_all_tokens() {
        let dictionary = dictionary();
        let result = Classifier::new(&dictionary).classify("the cat runs!");
        assert_eq!(
            result,
            Err(LexError::InvalidCharacter {
                character: '!',
                position: 12
            })
        );
    }
}
