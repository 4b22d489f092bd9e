//! Lexing module for sentex
//!
//!     Lexing turns a raw sentence into classified tokens in two steps:
//!         1. Base scanning: a logos lexer finds maximal runs of ASCII letters and skips
//!            spaces and tabs. See [base](base) module.
//!         2. Classification: each run is lower-cased and looked up in the
//!            [Dictionary](crate::sentex::dictionary::Dictionary). Unknown words are nouns.
//!            See [classifier](classifier) module.
//!
//!     Anything that is neither a letter nor a separator stops lexing with an
//!     [InvalidCharacter](LexError::InvalidCharacter) error. There is no recovery and no
//!     partial token list.

pub mod base;
pub mod classifier;
pub mod error;

pub use base::{scan, RawToken};
pub use classifier::Classifier;
pub use error::LexError;

use crate::sentex::dictionary::Dictionary;
use crate::sentex::token::Token;

/// Classify `source` against `dictionary`.
pub fn classify(source: &str, dictionary: &Dictionary) -> Result<Vec<Token>, LexError> {
    Classifier::new(dictionary).classify(source)
}
