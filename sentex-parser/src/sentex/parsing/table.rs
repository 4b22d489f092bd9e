//! Parse Table Generation
//!
//!     The shift-reduce table is generated from [PRODUCTIONS] the first time it is needed and
//!     then shared read-only by every parser ([TABLE]).
//!
//!     Construction is textbook SLR(1):
//!         1. Canonical LR(0) item sets, starting from the closure of the `sentence`
//!            productions. There is no augmented start production: reducing to `sentence`
//!            with only the initial state left on the stack is acceptance (see
//!            [engine](super::engine)).
//!         2. FIRST and FOLLOW sets. The grammar has no empty productions, so FIRST of a
//!            symbol string is FIRST of its head.
//!         3. Actions: shifts from the word-class transitions, reductions for every
//!            complete item on the FOLLOW set of its left-hand side.
//!
//!     Conflicts are resolved, not reported as errors:
//!         - shift/reduce: shift. The parser consumes more input before reducing, which
//!           is what makes phrases take the longest match (a verb phrase keeps its noun
//!           phrase, a predicate keeps its prepositional phrase).
//!         - reduce/reduce: the production declared first.
//!
//!     Every resolution is kept in [ParseTable::conflicts] so tests can pin it down.

use super::grammar::{productions_of, Symbol, PRODUCTIONS, START};
use super::tree::Label;
use crate::sentex::token::WordClass;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// The table every parser uses.
pub static TABLE: Lazy<ParseTable> = Lazy::new(ParseTable::generate);

/// Lookahead symbol: a word class, or the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terminal {
    Word(WordClass),
    End,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Word(class) => write!(f, "{}", class),
            Terminal::End => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(usize),
    /// Reduce by the production at this index of [PRODUCTIONS].
    Reduce(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// Shift kept over a reduction by `production`.
    ShiftReduce {
        state: usize,
        lookahead: Terminal,
        production: usize,
    },
    /// `kept` was declared before `dropped`.
    ReduceReduce {
        state: usize,
        lookahead: Terminal,
        kept: usize,
        dropped: usize,
    },
}

/// An LR(0) item: production index and dot position.
type Item = (usize, usize);
type ItemSet = BTreeSet<Item>;

#[derive(Debug)]
pub struct ParseTable {
    actions: Vec<BTreeMap<Terminal, Action>>,
    gotos: Vec<BTreeMap<Label, usize>>,
    conflicts: Vec<Conflict>,
}

impl ParseTable {
    /// The initial state.
    pub const START_STATE: usize = 0;

    pub fn generate() -> Self {
        let (states, transitions) = canonical_collection();
        let first = first_sets();
        let follow = follow_sets(&first);

        let mut actions = vec![BTreeMap::new(); states.len()];
        let mut gotos = vec![BTreeMap::new(); states.len()];
        let mut conflicts = Vec::new();

        for (state, edges) in transitions.iter().enumerate() {
            for (symbol, &target) in edges {
                match symbol {
                    Symbol::Word(class) => {
                        actions[state].insert(Terminal::Word(*class), Action::Shift(target));
                    }
                    Symbol::Phrase(label) => {
                        gotos[state].insert(*label, target);
                    }
                }
            }
        }

        for (state, items) in states.iter().enumerate() {
            for &(production, dot) in items {
                let rule = &PRODUCTIONS[production];
                if dot < rule.rhs.len() {
                    continue;
                }
                let lookaheads = follow.get(&rule.lhs).cloned().unwrap_or_default();
                for lookahead in lookaheads {
                    let row = &mut actions[state];
                    match row.get(&lookahead).copied() {
                        None => {
                            row.insert(lookahead, Action::Reduce(production));
                        }
                        Some(Action::Shift(_)) => conflicts.push(Conflict::ShiftReduce {
                            state,
                            lookahead,
                            production,
                        }),
                        Some(Action::Reduce(other)) => {
                            let (kept, dropped) = if other < production {
                                (other, production)
                            } else {
                                (production, other)
                            };
                            row.insert(lookahead, Action::Reduce(kept));
                            conflicts.push(Conflict::ReduceReduce {
                                state,
                                lookahead,
                                kept,
                                dropped,
                            });
                        }
                    }
                }
            }
        }

        for conflict in &conflicts {
            tracing::debug!(?conflict, "resolved grammar conflict");
        }
        tracing::debug!(
            states = states.len(),
            conflicts = conflicts.len(),
            "generated parse table"
        );

        Self {
            actions,
            gotos,
            conflicts,
        }
    }

    pub fn action(&self, state: usize, lookahead: Terminal) -> Option<Action> {
        self.actions.get(state)?.get(&lookahead).copied()
    }

    pub fn goto(&self, state: usize, label: Label) -> Option<usize> {
        self.gotos.get(state)?.get(&label).copied()
    }

    /// Lookaheads with an action in `state`, in a stable order.
    pub fn expected(&self, state: usize) -> Vec<Terminal> {
        self.actions
            .get(state)
            .map(|row| row.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn state_count(&self) -> usize {
        self.actions.len()
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }
}

fn closure(kernel: ItemSet) -> ItemSet {
    let mut items = kernel;
    let mut pending: Vec<Item> = items.iter().copied().collect();

    while let Some((production, dot)) = pending.pop() {
        if let Some(Symbol::Phrase(label)) = PRODUCTIONS[production].rhs.get(dot) {
            for (index, _) in productions_of(*label) {
                if items.insert((index, 0)) {
                    pending.push((index, 0));
                }
            }
        }
    }

    items
}

/// LR(0) states and their transitions; state 0 is the start state.
fn canonical_collection() -> (Vec<ItemSet>, Vec<BTreeMap<Symbol, usize>>) {
    let kernel = productions_of(START).map(|(i, _)| (i, 0)).collect();
    let start = closure(kernel);

    let mut states = vec![start.clone()];
    let mut index: HashMap<ItemSet, usize> = HashMap::from([(start, 0)]);
    let mut transitions: Vec<BTreeMap<Symbol, usize>> = vec![BTreeMap::new()];

    let mut cursor = 0;
    while cursor < states.len() {
        let mut kernels: BTreeMap<Symbol, ItemSet> = BTreeMap::new();
        for &(production, dot) in &states[cursor] {
            if let Some(symbol) = PRODUCTIONS[production].rhs.get(dot) {
                kernels
                    .entry(*symbol)
                    .or_default()
                    .insert((production, dot + 1));
            }
        }

        for (symbol, kernel) in kernels {
            let set = closure(kernel);
            let target = match index.get(&set) {
                Some(&existing) => existing,
                None => {
                    let id = states.len();
                    states.push(set.clone());
                    transitions.push(BTreeMap::new());
                    index.insert(set, id);
                    id
                }
            };
            transitions[cursor].insert(symbol, target);
        }

        cursor += 1;
    }

    (states, transitions)
}

fn first_sets() -> BTreeMap<Label, BTreeSet<WordClass>> {
    let mut first: BTreeMap<Label, BTreeSet<WordClass>> = BTreeMap::new();

    let mut changed = true;
    while changed {
        changed = false;
        for production in PRODUCTIONS {
            let additions: BTreeSet<WordClass> = match production.rhs[0] {
                Symbol::Word(class) => BTreeSet::from([class]),
                Symbol::Phrase(label) => first.get(&label).cloned().unwrap_or_default(),
            };
            let entry = first.entry(production.lhs).or_default();
            for class in additions {
                changed |= entry.insert(class);
            }
        }
    }

    first
}

fn follow_sets(
    first: &BTreeMap<Label, BTreeSet<WordClass>>,
) -> BTreeMap<Label, BTreeSet<Terminal>> {
    let mut follow: BTreeMap<Label, BTreeSet<Terminal>> = BTreeMap::new();
    follow.entry(START).or_default().insert(Terminal::End);

    let mut changed = true;
    while changed {
        changed = false;
        for production in PRODUCTIONS {
            for (position, symbol) in production.rhs.iter().enumerate() {
                let Symbol::Phrase(label) = symbol else {
                    continue;
                };
                let additions: BTreeSet<Terminal> = match production.rhs.get(position + 1) {
                    Some(Symbol::Word(class)) => BTreeSet::from([Terminal::Word(*class)]),
                    Some(Symbol::Phrase(next)) => first
                        .get(next)
                        .map(|set| set.iter().copied().map(Terminal::Word).collect())
                        .unwrap_or_default(),
                    None => follow.get(&production.lhs).cloned().unwrap_or_default(),
                };
                let entry = follow.entry(*label).or_default();
                for terminal in additions {
                    changed |= entry.insert(terminal);
                }
            }
        }
    }

    follow
}

#[cfg(test)]
mod tests {
    use super::*;
    use WordClass::*;

    #[test]
    fn test_first_sets() {
        let first = first_sets();
        assert_eq!(
            first[&Label::Sentence],
            BTreeSet::from([Determiner, Pronoun, Adjective, Noun])
        );
        assert_eq!(first[&Label::Predicate], BTreeSet::from([Verb]));
        assert_eq!(
            first[&Label::PrepositionalPhrase],
            BTreeSet::from([Preposition])
        );
    }

    #[test]
    fn test_follow_sets() {
        let follow = follow_sets(&first_sets());
        assert_eq!(follow[&Label::Sentence], BTreeSet::from([Terminal::End]));
        assert_eq!(
            follow[&Label::Subject],
            BTreeSet::from([Terminal::Word(Verb)])
        );
        assert_eq!(
            follow[&Label::Predicate],
            BTreeSet::from([
                Terminal::Word(Conjunction),
                Terminal::Word(Preposition),
                Terminal::End
            ])
        );
        // A verb phrase can be followed by an object, an adverb phrase or a
        // prepositional phrase, or end the predicate.
        assert!(follow[&Label::VerbPhrase].contains(&Terminal::Word(Noun)));
        assert!(follow[&Label::VerbPhrase].contains(&Terminal::Word(Adverb)));
    }

    #[test]
    fn test_start_state_expects_a_subject() {
        let expected = TABLE.expected(ParseTable::START_STATE);
        assert_eq!(
            expected,
            vec![
                Terminal::Word(Determiner),
                Terminal::Word(Pronoun),
                Terminal::Word(Adjective),
                Terminal::Word(Noun),
            ]
        );
    }

    #[test]
    fn test_conflicts_are_all_shift_reduce() {
        let conflicts = TABLE.conflicts();
        assert!(!conflicts.is_empty());
        assert!(conflicts
            .iter()
            .all(|c| matches!(c, Conflict::ShiftReduce { .. })));
    }

    #[test]
    fn test_shift_wins_for_trailing_prepositional_phrase() {
        // predicate := verb_phrase . vs predicate := verb_phrase . prepositional_phrase
        let predicate_vs_prepositional = TABLE.conflicts().iter().any(|c| {
            matches!(
                c,
                Conflict::ShiftReduce { lookahead: Terminal::Word(Preposition), production, .. }
                    if PRODUCTIONS[*production].lhs == Label::Predicate
            )
        });
        assert!(predicate_vs_prepositional);
    }

    #[test]
    fn test_shift_wins_for_noun_phrase_after_verb() {
        // verb_phrase := VERB . vs verb_phrase := VERB . noun_phrase
        let verb_vs_object = TABLE.conflicts().iter().any(|c| {
            matches!(
                c,
                Conflict::ShiftReduce { lookahead: Terminal::Word(Noun), production, .. }
                    if PRODUCTIONS[*production].lhs == Label::VerbPhrase
            )
        });
        assert!(verb_vs_object);
    }

    #[test]
    fn test_every_state_has_an_action_or_goto() {
        for state in 0..TABLE.state_count() {
            assert!(
                !TABLE.expected(state).is_empty(),
                "state {} has no actions",
                state
            );
        }
    }
}
