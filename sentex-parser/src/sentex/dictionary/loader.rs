//! Dictionary loading from the flat text format
//!
//! Format: one entry per line, `<word> <CLASS>`, fields separated by any whitespace.
//! Example:
//!
//! ```text
//! the DETERMINER
//! cat NOUN
//! runs VERB
//! ```
//!
//! Only the word is lower-cased; the class tag must be spelled exactly as
//! [WordClass::tag] prints it. Every line must have exactly two fields, blank lines
//! included, and the first bad line aborts the load.

use super::{Dictionary, DictionaryError};
use crate::sentex::token::WordClass;
use std::fs;
use std::io;
use std::path::Path;

pub(super) fn parse_entries(source: &str) -> Result<Dictionary, DictionaryError> {
    let mut entries = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_num = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();

        let [word, tag] = fields.as_slice() else {
            return Err(DictionaryError::Malformed {
                line: line_num,
                content: line.to_string(),
            });
        };

        let class = tag
            .parse::<WordClass>()
            .map_err(|_| DictionaryError::UnknownClass {
                line: line_num,
                tag: tag.to_string(),
            })?;

        entries.push((*word, class));
    }

    Ok(entries.into_iter().collect())
}

pub(super) fn load(path: &Path, strict: bool) -> Result<Dictionary, DictionaryError> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if strict {
                return Err(DictionaryError::Missing {
                    path: path.to_path_buf(),
                });
            }
            tracing::warn!(
                path = %path.display(),
                "dictionary file not found, every word will classify as NOUN"
            );
            return Ok(Dictionary::new());
        }
        Err(source) => {
            return Err(DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let dictionary = parse_entries(&source)?;
    tracing::info!(
        path = %path.display(),
        entries = dictionary.len(),
        "loaded dictionary"
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let dictionary = parse_entries("the DETERMINER\nCat NOUN\nruns\tVERB\n")
            .unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.get("the"), Some(WordClass::Determiner));
        assert_eq!(dictionary.get("cat"), Some(WordClass::Noun));
        assert_eq!(dictionary.get("runs"), Some(WordClass::Verb));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let dictionary = parse_entries("   quickly    ADVERB   ").unwrap();
        assert_eq!(dictionary.get("quickly"), Some(WordClass::Adverb));
    }

    #[test]
    fn test_empty_source_is_empty_dictionary() {
        assert!(parse_entries("").unwrap().is_empty());
    }

    #[test]
    fn test_single_field_is_malformed() {
        let err = parse_entries("the DETERMINER\ncat\n").unwrap_err();
        match err {
            DictionaryError::Malformed { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "cat");
            }
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_three_fields_is_malformed() {
        let err = parse_entries("big red ADJECTIVE").unwrap_err();
        assert!(matches!(err, DictionaryError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let err = parse_entries("the DETERMINER\n\ncat NOUN").unwrap_err();
        assert!(matches!(err, DictionaryError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_unknown_class() {
        let err = parse_entries("cat noun").unwrap_err();
        match err {
            DictionaryError::UnknownClass { line, tag } => {
                assert_eq!(line, 1);
                assert_eq!(tag, "noun");
            }
            other => panic!("Expected UnknownClass, got {:?}", other),
        }
    }
}
