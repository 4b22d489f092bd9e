//! Data formats: the tree as serde sees it.

use super::registry::{FormatError, Formatter};
use crate::sentex::parsing::ParseTree;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON (label + children, leaves as strings)"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        serde_yaml::to_string(tree)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML (label + children, leaves as strings)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentex::parsing::Label;

    #[test]
    fn test_json_shape() {
        let tree = ParseTree::with_text(Label::AdverbPhrase, "very quickly");
        let json = JsonFormatter.serialize(&tree).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "label": "adverb_phrase", "children": ["very quickly"] })
        );
    }

    #[test]
    fn test_yaml_shape() {
        let tree = ParseTree::with_text(Label::Conjunction, "and");
        let yaml = YamlFormatter.serialize(&tree).unwrap();
        assert!(yaml.contains("label: conjunction"));
        assert!(yaml.contains("- and"));
    }
}
