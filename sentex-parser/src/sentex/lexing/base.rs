//! Base scanning with logos
//!
//! The raw token set is deliberately tiny: a word is a maximal run of ASCII letters and
//! spaces/tabs are skipped. Every other byte is a logos error, which [scan] turns into
//! [LexError::InvalidCharacter].

use super::LexError;
use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t]+")]
pub enum RawToken {
    #[regex("[a-zA-Z]+")]
    Word,
}

/// Scan `source` into word spans, stopping at the first invalid character.
pub fn scan(source: &str) -> Result<Vec<(RawToken, Range<usize>)>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                // Errors always start on a char boundary: everything before them is ASCII.
                let character = source
                    .get(span.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::InvalidCharacter {
                    character,
                    position: span.start,
                });
            }
        }
    }

    Ok(tokens)
}
