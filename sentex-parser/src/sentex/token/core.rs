//! The classified token produced by the lexer.

use super::WordClass;
use serde::Serialize;
use std::fmt;

/// A word of the input together with its class and where it started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub class: WordClass,
    /// Lower-cased surface text.
    pub text: String,
    /// Offset of the first character of the word in the source string.
    pub position: usize,
}

impl Token {
    pub fn new(class: WordClass, text: impl Into<String>, position: usize) -> Self {
        Self {
            class,
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    /// Same `<word> <CLASS>` shape as a dictionary line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.text, self.class)
    }
}
