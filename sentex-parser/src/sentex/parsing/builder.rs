//! Tree construction from reductions
//!
//! The engine keeps one [Fragment] per stack entry. A fragment knows which tokens it
//! covers, so a reduction can either nest its children (most labels) or flatten the covered
//! words into a single leaf (noun, verb and adverb phrases).

use super::tree::{Child, Label, ParseTree};
use crate::sentex::token::Token;
use std::ops::Range;

#[derive(Debug)]
pub(super) struct Fragment {
    /// Token indices covered by this fragment.
    pub span: Range<usize>,
    pub kind: FragmentKind,
}

#[derive(Debug)]
pub(super) enum FragmentKind {
    Word,
    Phrase(ParseTree),
}

impl Fragment {
    pub fn word(index: usize) -> Self {
        Self {
            span: index..index + 1,
            kind: FragmentKind::Word,
        }
    }

    pub fn into_tree(self) -> Option<ParseTree> {
        match self.kind {
            FragmentKind::Phrase(tree) => Some(tree),
            FragmentKind::Word => None,
        }
    }
}

/// Build the fragment for `lhs` out of the fragments of its right-hand side.
///
/// `parts` is never empty: the grammar has no empty productions.
pub(super) fn reduce(lhs: Label, parts: Vec<Fragment>, tokens: &[Token]) -> Fragment {
    let start = parts.first().map_or(0, |part| part.span.start);
    let end = parts.last().map_or(start, |part| part.span.end);
    let span = start..end;

    let children = if lhs.is_flattened() {
        vec![Child::Leaf(surface_text(&tokens[span.clone()]))]
    } else {
        parts
            .into_iter()
            .map(|part| match part.kind {
                FragmentKind::Word => Child::Leaf(tokens[part.span.start].text.clone()),
                FragmentKind::Phrase(tree) => Child::Node(tree),
            })
            .collect()
    };

    Fragment {
        span,
        kind: FragmentKind::Phrase(ParseTree::new(lhs, children)),
    }
}

fn surface_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
