//! Named tree renderings
//!
//! Every rendering of a [ParseTree] implements [Formatter] and is looked up by name in a
//! [FormatRegistry]. The registry keeps formats in name order, so listings are stable.

use crate::sentex::parsing::ParseTree;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// A rendering of a parse tree to text.
pub trait Formatter: Send + Sync {
    /// Name used to select the format (`treeviz`, `tag`, ...)
    fn name(&self) -> &str;

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError>;

    /// One-line summary shown by `list-formats`
    fn description(&self) -> &str {
        ""
    }
}

#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry; see [FormatRegistry::with_defaults] for the built-in formats.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in formats: `json`, `tag`, `treeviz` and `yaml`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter);
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Add `formatter`, replacing any format registered under the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        if self.formatters.insert(name, Box::new(formatter)).is_some() {
            tracing::debug!("replaced a registered tree format");
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `tree` with the format called `format`.
    pub fn serialize(&self, tree: &ParseTree, format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize(tree)
    }

    /// Format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `(name, description)` pairs, sorted by name.
    pub fn describe(&self) -> impl Iterator<Item = (&str, &str)> {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentex::parsing::Label;

    struct WordCount;

    impl Formatter for WordCount {
        fn name(&self) -> &str {
            "count"
        }

        fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
            Ok(tree.text().split(' ').count().to_string())
        }

        fn description(&self) -> &str {
            "Number of words"
        }
    }

    fn tree() -> ParseTree {
        ParseTree::with_text(Label::NounPhrase, "the lazy cat")
    }

    #[test]
    fn test_register_and_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(WordCount);

        assert!(registry.has("count"));
        assert_eq!(registry.serialize(&tree(), "count"), Ok("3".to_string()));
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::new();
        match registry.serialize(&tree(), "nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected FormatNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_are_listed_in_name_order() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "tag", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_describe_pairs_names_with_descriptions() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(WordCount);

        let described: Vec<_> = registry.describe().collect();
        assert_eq!(described[0], ("count", "Number of words"));
        assert_eq!(described.len(), 5);
        for (name, description) in described {
            assert!(!description.is_empty(), "{} has no description", name);
        }
    }
}
