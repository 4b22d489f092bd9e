//! Core token types shared across the classifier, the parser and tooling.

pub mod core;
pub mod word_class;

pub use core::Token;
pub use word_class::{UnknownWordClass, WordClass};
