//! Grammar Production Definitions
//!
//! This module defines the sentence grammar as data. The parse table is generated from
//! [PRODUCTIONS] (see [table](super::table)); nothing else encodes grammar knowledge.
//!
//! # Productions (in declaration order)
//!
//! ```text
//! sentence             := subject predicate
//!                       | subject predicate conjunction sentence
//!                       | subject predicate prepositional_phrase
//!                       | subject predicate prepositional_phrase conjunction sentence
//! subject              := noun_phrase | PRONOUN
//! predicate            := verb_phrase
//!                       | verb_phrase object
//!                       | verb_phrase adverb_phrase
//!                       | verb_phrase prepositional_phrase
//! object               := noun_phrase
//! prepositional_phrase := PREPOSITION noun_phrase
//! adverb_phrase        := ADVERB | ADVERB ADVERB
//! noun_phrase          := NOUN | DETERMINER NOUN | DETERMINER ADJECTIVE NOUN | ADJECTIVE NOUN
//! verb_phrase          := VERB | VERB noun_phrase | VERB noun_phrase prepositional_phrase
//! conjunction          := CONJUNCTION
//! ```
//!
//! Declaration order only matters for reduce/reduce conflicts, where the earlier
//! production wins. This grammar has none; its ambiguity is all shift/reduce.

use super::tree::Label;
use crate::sentex::token::WordClass;

/// A grammar symbol: a word class (terminal) or a phrase (nonterminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Word(WordClass),
    Phrase(Label),
}

#[derive(Debug)]
pub struct Production {
    pub lhs: Label,
    pub rhs: &'static [Symbol],
}

/// The symbol every complete parse reduces to.
pub const START: Label = Label::Sentence;

use Label::{
    AdverbPhrase, Conjunction as ConjunctionPhrase, NounPhrase, Object, Predicate,
    PrepositionalPhrase, Sentence, Subject, VerbPhrase,
};
use Symbol::{Phrase as P, Word as W};
use WordClass::{
    Adjective, Adverb, Conjunction, Determiner, Noun, Preposition, Pronoun, Verb,
};

macro_rules! production {
    ($lhs:expr => $($symbol:expr),+) => {
        Production {
            lhs: $lhs,
            rhs: &[$($symbol),+],
        }
    };
}

pub const PRODUCTIONS: &[Production] = &[
    production!(Sentence => P(Subject), P(Predicate)),
    production!(Sentence => P(Subject), P(Predicate), P(ConjunctionPhrase), P(Sentence)),
    production!(Sentence => P(Subject), P(Predicate), P(PrepositionalPhrase)),
    production!(Sentence => P(Subject), P(Predicate), P(PrepositionalPhrase), P(ConjunctionPhrase), P(Sentence)),
    production!(Subject => P(NounPhrase)),
    production!(Subject => W(Pronoun)),
    production!(Predicate => P(VerbPhrase)),
    production!(Predicate => P(VerbPhrase), P(Object)),
    production!(Predicate => P(VerbPhrase), P(AdverbPhrase)),
    production!(Predicate => P(VerbPhrase), P(PrepositionalPhrase)),
    production!(Object => P(NounPhrase)),
    production!(PrepositionalPhrase => W(Preposition), P(NounPhrase)),
    production!(AdverbPhrase => W(Adverb)),
    production!(AdverbPhrase => W(Adverb), W(Adverb)),
    production!(NounPhrase => W(Noun)),
    production!(NounPhrase => W(Determiner), W(Noun)),
    production!(NounPhrase => W(Determiner), W(Adjective), W(Noun)),
    production!(NounPhrase => W(Adjective), W(Noun)),
    production!(VerbPhrase => W(Verb)),
    production!(VerbPhrase => W(Verb), P(NounPhrase)),
    production!(VerbPhrase => W(Verb), P(NounPhrase), P(PrepositionalPhrase)),
    production!(ConjunctionPhrase => W(Conjunction)),
];

/// Productions for `lhs`, with their indices into [PRODUCTIONS].
pub fn productions_of(lhs: Label) -> impl Iterator<Item = (usize, &'static Production)> {
    PRODUCTIONS
        .iter()
        .enumerate()
        .filter(move |(_, production)| production.lhs == lhs)
}
