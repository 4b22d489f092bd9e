//! Error type for lexing

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that is neither an ASCII letter nor a space or tab.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}
