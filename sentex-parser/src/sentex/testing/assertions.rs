//! Fluent assertions over parse trees

use crate::sentex::parsing::{Child, Label, ParseTree};

pub struct TreeAssertion<'a> {
    tree: &'a ParseTree,
    context: String,
}

/// Start asserting on `tree`.
pub fn assert_tree(tree: &ParseTree) -> TreeAssertion<'_> {
    TreeAssertion {
        tree,
        context: tree.label.name().to_string(),
    }
}

impl<'a> TreeAssertion<'a> {
    pub fn label(self, expected: Label) -> Self {
        assert_eq!(
            self.tree.label, expected,
            "{}: Expected label {}, found {}",
            self.context, expected, self.tree.label
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.tree.children.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {}: {}",
            self.context, expected, actual, self.tree
        );
        self
    }

    /// The node is a single leaf with `expected` text.
    pub fn text(self, expected: &str) -> Self {
        match self.tree.children.as_slice() {
            [Child::Leaf(text)] => assert_eq!(
                text, expected,
                "{}: Expected text {:?}, found {:?}",
                self.context, expected, text
            ),
            _ => panic!(
                "{}: Expected a single leaf {:?}, found {}",
                self.context, expected, self.tree
            ),
        }
        self
    }

    /// Child `index` is a leaf with `expected` text.
    pub fn leaf(self, index: usize, expected: &str) -> Self {
        match self.tree.children.get(index) {
            Some(Child::Leaf(text)) => assert_eq!(
                text, expected,
                "{}[{}]: Expected leaf {:?}, found {:?}",
                self.context, index, expected, text
            ),
            Some(Child::Node(node)) => panic!(
                "{}[{}]: Expected leaf {:?}, found node {}",
                self.context, index, expected, node
            ),
            None => panic!(
                "{}[{}]: Child index out of bounds ({} children)",
                self.context,
                index,
                self.tree.children.len()
            ),
        }
        self
    }

    /// Child `index` is a node; run `assertion` on it.
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TreeAssertion<'a>),
    {
        match self.tree.children.get(index) {
            Some(Child::Node(node)) => assertion(TreeAssertion {
                tree: node,
                context: format!("{}[{}]:{}", self.context, index, node.label),
            }),
            Some(Child::Leaf(text)) => panic!(
                "{}[{}]: Expected a node, found leaf {:?}",
                self.context, index, text
            ),
            None => panic!(
                "{}[{}]: Child index out of bounds ({} children)",
                self.context,
                index,
                self.tree.children.len()
            ),
        }
        self
    }

    /// The direct child labeled `label`; run `assertion` on it.
    pub fn find<F>(self, label: Label, assertion: F) -> Self
    where
        F: FnOnce(TreeAssertion<'a>),
    {
        match self.tree.find(label) {
            Some(node) => assertion(TreeAssertion {
                tree: node,
                context: format!("{}/{}", self.context, label),
            }),
            None => panic!("{}: No {} child in {}", self.context, label, self.tree),
        }
        self
    }

    /// No direct child is labeled `label`.
    pub fn lacks(self, label: Label) -> Self {
        assert!(
            self.tree.find(label).is_none(),
            "{}: Unexpected {} child in {}",
            self.context,
            label,
            self.tree
        );
        self
    }
}
