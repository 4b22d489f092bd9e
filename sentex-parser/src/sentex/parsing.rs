//! Parsing module for sentex
//!
//!     This module turns a sentence into a [ParseTree]:
//!         1. Lexing: the [Classifier] turns text into classified tokens. See
//!            [lexing](crate::sentex::lexing).
//!         2. Analysis: a shift-reduce [engine] runs the generated [table] over the tokens.
//!         3. Building: every reduction builds its phrase node as it happens. See
//!            [builder].
//!
//! Grammar As Data
//!
//!     The grammar lives in [grammar] as a list of productions. The parse table is derived
//!     from it once per process, so changing a production changes the parser and nothing
//!     else has to follow.
//!
//! Ambiguity
//!
//!     Several productions share prefixes: a predicate may or may not take a trailing
//!     prepositional phrase before a conjunction, a verb may or may not take the noun
//!     phrase after it. The table resolves every such choice by shifting, i.e. taking the
//!     longest match. The resulting shapes are:
//!
//!         - the noun phrase after a verb belongs to the `verb_phrase`; `object` only
//!           holds a second noun phrase;
//!         - a prepositional phrase after `VERB noun_phrase` belongs to the `verb_phrase`,
//!           after a bare verb it belongs to the `predicate`, and only a further one is
//!           attached to the `sentence`.
//!
//!     Whatever is left over after the longest match is a [ParseError::GrammarMismatch].
//!
//! Tree Shape
//!
//!     `noun_phrase`, `verb_phrase` and `adverb_phrase` hold one leaf with their words
//!     joined by spaces. Every other node has one child per right-hand symbol.

mod builder;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod table;
pub mod tree;

pub use error::{Mismatch, ParseError};
pub use table::{ParseTable, Terminal, TABLE};
pub use tree::{Child, Label, ParseTree};

use crate::sentex::dictionary::Dictionary;
use crate::sentex::lexing::{Classifier, LexError};
use crate::sentex::token::Token;

/// Classifier and grammar parser over one borrowed dictionary.
#[derive(Debug, Clone, Copy)]
pub struct SentenceParser<'d> {
    classifier: Classifier<'d>,
    table: &'static ParseTable,
}

impl<'d> SentenceParser<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            classifier: Classifier::new(dictionary),
            table: &TABLE,
        }
    }

    pub fn classify(&self, source: &str) -> Result<Vec<Token>, LexError> {
        self.classifier.classify(source)
    }

    /// Classify and parse `source`.
    pub fn parse(&self, source: &str) -> Result<ParseTree, ParseError> {
        let tokens = self.classify(source)?;
        self.parse_tokens(&tokens)
    }

    /// Parse already classified tokens.
    pub fn parse_tokens(&self, tokens: &[Token]) -> Result<ParseTree, ParseError> {
        engine::run(self.table, tokens)
    }
}

/// Parse `source` against `dictionary`.
pub fn parse(source: &str, dictionary: &Dictionary) -> Result<ParseTree, ParseError> {
    SentenceParser::new(dictionary).parse(source)
}
