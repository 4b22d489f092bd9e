//! Parse tree
//!
//! A closed tagged type: a node has a [Label] and ordered children, each child being either
//! another node or a leaf of surface text. Consumers match on [Child] exhaustively.
//!
//! Display uses a functional notation, leaves quoted:
//!
//! ```text
//! sentence(subject(noun_phrase("the cat")), predicate(verb_phrase("runs")))
//! ```

use serde::Serialize;
use std::fmt;

/// Nonterminals of the sentence grammar; also the labels of tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Sentence,
    Subject,
    Predicate,
    Object,
    PrepositionalPhrase,
    AdverbPhrase,
    NounPhrase,
    VerbPhrase,
    Conjunction,
}

impl Label {
    pub fn name(self) -> &'static str {
        match self {
            Label::Sentence => "sentence",
            Label::Subject => "subject",
            Label::Predicate => "predicate",
            Label::Object => "object",
            Label::PrepositionalPhrase => "prepositional_phrase",
            Label::AdverbPhrase => "adverb_phrase",
            Label::NounPhrase => "noun_phrase",
            Label::VerbPhrase => "verb_phrase",
            Label::Conjunction => "conjunction",
        }
    }

    /// Phrases whose matched words are kept as one space-joined leaf instead of
    /// one child per symbol.
    pub fn is_flattened(self) -> bool {
        matches!(
            self,
            Label::NounPhrase | Label::VerbPhrase | Label::AdverbPhrase
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseTree {
    pub label: Label,
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Child {
    Node(ParseTree),
    Leaf(String),
}

impl ParseTree {
    pub fn new(label: Label, children: Vec<Child>) -> Self {
        Self { label, children }
    }

    /// A node holding a single leaf.
    pub fn with_text(label: Label, text: impl Into<String>) -> Self {
        Self::new(label, vec![Child::Leaf(text.into())])
    }

    /// The first direct child node carrying `label`.
    pub fn find(&self, label: Label) -> Option<&ParseTree> {
        self.children.iter().find_map(|child| match child {
            Child::Node(node) if node.label == label => Some(node),
            _ => None,
        })
    }

    /// Surface text of every leaf under this node, in order, joined by spaces.
    pub fn text(&self) -> String {
        let mut words = Vec::new();
        self.collect_leaves(&mut words);
        words.join(" ")
    }

    fn collect_leaves<'a>(&'a self, words: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                Child::Node(node) => node.collect_leaves(words),
                Child::Leaf(text) => words.push(text),
            }
        }
    }
}

impl Child {
    pub fn leaf(text: impl Into<String>) -> Self {
        Child::Leaf(text.into())
    }
}

impl From<ParseTree> for Child {
    fn from(node: ParseTree) -> Self {
        Child::Node(node)
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.label)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", child)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Node(node) => write!(f, "{}", node),
            Child::Leaf(text) => write!(f, "{:?}", text),
        }
    }
}
