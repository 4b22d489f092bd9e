//! Error types for parsing

use super::table::Terminal;
use crate::sentex::lexing::LexError;
use crate::sentex::token::Token;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    InvalidCharacter(#[from] LexError),

    #[error("invalid grammar: {0}")]
    GrammarMismatch(Mismatch),
}

/// Where the token sequence stopped reducing to a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// The token with no action, or `None` at the end of input.
    pub found: Option<Token>,
    /// Lookaheads the parser had an action for at that point.
    pub expected: Vec<Terminal>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(token) => write!(
                f,
                "unexpected '{}' ({}) at position {}",
                token.text, token.class, token.position
            )?,
            None => f.write_str("unexpected end of input")?,
        }
        if !self.expected.is_empty() {
            let expected: Vec<String> = self.expected.iter().map(|t| t.to_string()).collect();
            write!(f, ", expected one of: {}", expected.join(", "))?;
        }
        Ok(())
    }
}

impl ParseError {
    pub fn is_grammar_mismatch(&self) -> bool {
        matches!(self, ParseError::GrammarMismatch(_))
    }

    pub fn is_invalid_character(&self) -> bool {
        matches!(self, ParseError::InvalidCharacter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentex::token::WordClass;

    #[test]
    fn test_mismatch_message_with_token() {
        let error = ParseError::GrammarMismatch(Mismatch {
            found: Some(Token::new(WordClass::Noun, "dog", 4)),
            expected: vec![Terminal::Word(WordClass::Verb)],
        });
        assert_eq!(
            error.to_string(),
            "invalid grammar: unexpected 'dog' (NOUN) at position 4, expected one of: VERB"
        );
    }

    #[test]
    fn test_mismatch_message_at_end() {
        let error = ParseError::GrammarMismatch(Mismatch {
            found: None,
            expected: vec![
                Terminal::Word(WordClass::Noun),
                Terminal::Word(WordClass::Adjective),
            ],
        });
        assert_eq!(
            error.to_string(),
            "invalid grammar: unexpected end of input, expected one of: NOUN, ADJECTIVE"
        );
    }

    #[test]
    fn test_lex_error_passes_through() {
        let error: ParseError = LexError::InvalidCharacter {
            character: '2',
            position: 9,
        }
        .into();
        assert!(error.is_invalid_character());
        assert_eq!(error.to_string(), "invalid character '2' at position 9");
    }
}
