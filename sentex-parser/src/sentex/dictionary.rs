//! Word-classification dictionary
//!
//!     The dictionary maps lower-case words to their [WordClass]. It is built once, before
//!     any classification happens, and is read-only afterwards: there is no public way to
//!     insert into an existing dictionary. Classifiers and parsers borrow it.
//!
//!     Words that are not in the dictionary are not an error. The lookup used by the
//!     classifier, [Dictionary::class_of], falls back to [WordClass::DEFAULT] (noun).
//!
//!     Sources:
//!         - text in the `<word> <CLASS>` line format, see [loader](loader);
//!         - a file in that format, with [Dictionary::load] (missing file gives an empty
//!           dictionary) or [Dictionary::load_strict] (missing file is an error);
//!         - any iterator of `(word, class)` pairs.

pub mod error;
pub mod loader;

pub use error::DictionaryError;

use crate::sentex::token::WordClass;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, WordClass>,
}

impl Dictionary {
    /// An empty dictionary: every word classifies as a noun.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse dictionary text in the `<word> <CLASS>` line format.
    pub fn parse(source: &str) -> Result<Self, DictionaryError> {
        loader::parse_entries(source)
    }

    /// Load a dictionary file. A missing file yields an empty dictionary.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        loader::load(path.as_ref(), false)
    }

    /// Load a dictionary file. A missing file is [DictionaryError::Missing].
    pub fn load_strict(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        loader::load(path.as_ref(), true)
    }

    /// Class stored for `word`, if any. `word` must already be lower-case.
    pub fn get(&self, word: &str) -> Option<WordClass> {
        self.entries.get(word).copied()
    }

    /// Class for `word`, defaulting to noun.
    pub fn class_of(&self, word: &str) -> WordClass {
        self.get(word).unwrap_or(WordClass::DEFAULT)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by word.
    pub fn entries(&self) -> Vec<(&str, WordClass)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(word, class)| (word.as_str(), *class))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<W: AsRef<str>> FromIterator<(W, WordClass)> for Dictionary {
    /// Keys are lower-cased on the way in; a later duplicate replaces an earlier one.
    fn from_iter<I: IntoIterator<Item = (W, WordClass)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(word, class)| (word.as_ref().to_lowercase(), class))
            .collect();
        Self { entries }
    }
}
