//! Treeviz formatter for parse trees
//!
//! One line per node, depth first: a node's label comes before its children and a leaf's
//! text is the last line of its branch. Nesting is drawn with box connectors, four columns
//! per level, and the root is drawn as the last child of an invisible parent:
//!
//! ```text
//! └── sentence
//!     ├── subject
//!     │   └── noun_phrase
//!     │       └── the cat
//!     └── predicate
//!         └── verb_phrase
//!             └── runs
//! ```

use super::registry::{FormatError, Formatter};
use crate::sentex::parsing::{Child, ParseTree};

const TAIL: &str = "└── ";
const BRANCH: &str = "├── ";
const TAIL_INDENT: &str = "    ";
const BRANCH_INDENT: &str = "│   ";

pub fn to_treeviz_str(tree: &ParseTree) -> String {
    let mut output = String::new();
    format_node(tree, "", true, &mut output);
    output
}

fn format_node(tree: &ParseTree, prefix: &str, is_tail: bool, output: &mut String) {
    push_line(output, prefix, is_tail, tree.label.name());

    let indent = if is_tail { TAIL_INDENT } else { BRANCH_INDENT };
    let child_prefix = format!("{prefix}{indent}");
    let child_count = tree.children.len();

    for (i, child) in tree.children.iter().enumerate() {
        let is_last = i == child_count - 1;
        match child {
            Child::Node(node) => format_node(node, &child_prefix, is_last, output),
            Child::Leaf(text) => push_line(output, &child_prefix, is_last, text),
        }
    }
}

fn push_line(output: &mut String, prefix: &str, is_tail: bool, text: &str) {
    output.push_str(prefix);
    output.push_str(if is_tail { TAIL } else { BRANCH });
    output.push_str(text);
    output.push('\n');
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "Indented tree drawing, one line per node"
    }
}
