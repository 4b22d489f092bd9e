//! XML-like tag serialization
//!
//! Node label becomes the tag name. A node whose only child is a leaf is written on one
//! line; anything else nests its children one level (two spaces) deeper:
//!
//! ```text
//! <sentence>
//!   <subject>
//!     <noun_phrase>the cat</noun_phrase>
//!   </subject>
//!   <predicate>
//!     <verb_phrase>runs</verb_phrase>
//!   </predicate>
//! </sentence>
//! ```

use super::registry::{FormatError, Formatter};
use crate::sentex::parsing::{Child, ParseTree};

/// Serialize a tree to tag format
pub fn serialize_tree(tree: &ParseTree) -> String {
    let mut result = String::new();
    serialize_node(tree, 0, &mut result);
    result
}

fn serialize_node(tree: &ParseTree, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    let tag = tree.label.name();

    if let [Child::Leaf(text)] = tree.children.as_slice() {
        let text = escape_xml(text);
        output.push_str(&format!("{indent}<{tag}>{text}</{tag}>\n"));
        return;
    }

    output.push_str(&format!("{}<{}>\n", indent, tag));
    for child in &tree.children {
        match child {
            Child::Node(node) => serialize_node(node, indent_level + 1, output),
            Child::Leaf(text) => {
                output.push_str(&format!("{}  {}\n", indent, escape_xml(text)));
            }
        }
    }
    output.push_str(&format!("{}</{}>\n", indent, tag));
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formatter implementation for tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        Ok(serialize_tree(tree))
    }

    fn description(&self) -> &str {
        "XML-like tags mirroring the tree structure"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentex::parsing::Label;

    #[test]
    fn test_mixed_children() {
        let tree = ParseTree::new(
            Label::PrepositionalPhrase,
            vec![
                Child::leaf("in"),
                ParseTree::with_text(Label::NounPhrase, "the park").into(),
            ],
        );
        let expected = "\
<prepositional_phrase>
  in
  <noun_phrase>the park</noun_phrase>
</prepositional_phrase>
";
        assert_eq!(serialize_tree(&tree), expected);
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
