//! Parser Engine - Shift-Reduce Driver
//!
//!     This module runs the generated [ParseTable] over a token slice. It keeps two stacks
//!     in lockstep: LR states, and the [Fragment]s built so far. On each step the current
//!     state and the lookahead (the next token's class, or end of input) select an action:
//!
//!         - Shift: push the token as a word fragment and move to the next token.
//!         - Reduce: pop one entry per right-hand symbol, build the phrase with the
//!           [builder](super::builder), then follow the goto for its label.
//!
//!     Acceptance is reducing to `sentence` with only the start state left. Reductions to
//!     `sentence` only happen at the end of input, so acceptance always consumed every token.
//!
//!     No action for the lookahead is a [ParseError::GrammarMismatch]. Nothing partial is
//!     returned.

use super::builder::{self, Fragment};
use super::error::{Mismatch, ParseError};
use super::grammar::{PRODUCTIONS, START};
use super::table::{Action, ParseTable, Terminal};
use super::tree::ParseTree;
use crate::sentex::token::Token;

pub fn run(table: &ParseTable, tokens: &[Token]) -> Result<ParseTree, ParseError> {
    let mut states = vec![ParseTable::START_STATE];
    let mut fragments: Vec<Fragment> = Vec::new();
    let mut cursor = 0;

    loop {
        let state = current(&states);
        let lookahead = tokens
            .get(cursor)
            .map_or(Terminal::End, |token| Terminal::Word(token.class));

        match table.action(state, lookahead) {
            Some(Action::Shift(next)) => {
                fragments.push(Fragment::word(cursor));
                states.push(next);
                cursor += 1;
            }
            Some(Action::Reduce(index)) => {
                let production = &PRODUCTIONS[index];
                let arity = production.rhs.len();
                let parts = fragments.split_off(fragments.len() - arity);
                states.truncate(states.len() - arity);

                let fragment = builder::reduce(production.lhs, parts, tokens);
                let exposed = current(&states);

                if production.lhs == START && exposed == ParseTable::START_STATE {
                    return match fragment.into_tree() {
                        Some(tree) if lookahead == Terminal::End => Ok(tree),
                        _ => Err(mismatch(table, state, tokens, cursor)),
                    };
                }

                match table.goto(exposed, production.lhs) {
                    Some(next) => {
                        fragments.push(fragment);
                        states.push(next);
                    }
                    None => return Err(mismatch(table, state, tokens, cursor)),
                }
            }
            None => return Err(mismatch(table, state, tokens, cursor)),
        }
    }
}

fn current(states: &[usize]) -> usize {
    states.last().copied().unwrap_or(ParseTable::START_STATE)
}

fn mismatch(table: &ParseTable, state: usize, tokens: &[Token], cursor: usize) -> ParseError {
    let found = tokens.get(cursor).cloned();
    let error = Mismatch {
        found,
        expected: table.expected(state),
    };
    tracing::debug!(state, cursor, %error, "token sequence does not reduce to a sentence");
    ParseError::GrammarMismatch(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentex::parsing::table::TABLE;
    use crate::sentex::token::WordClass::{self, *};

    fn tokens(classes: &[WordClass]) -> Vec<Token> {
        classes
            .iter()
            .enumerate()
            .map(|(i, class)| Token::new(*class, format!("w{}", i), i * 3))
            .collect()
    }

    #[test]
    fn test_minimal_sentence() {
        let tree = run(&TABLE, &tokens(&[Noun, Verb])).unwrap();
        assert_eq!(
            tree.to_string(),
            r#"sentence(subject(noun_phrase("w0")), predicate(verb_phrase("w1")))"#
        );
    }

    #[test]
    fn test_empty_input_is_mismatch() {
        let error = run(&TABLE, &[]).unwrap_err();
        match error {
            ParseError::GrammarMismatch(mismatch) => {
                assert_eq!(mismatch.found, None);
                assert!(mismatch.expected.contains(&Terminal::Word(Pronoun)));
            }
            other => panic!("Expected GrammarMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_subject_without_predicate() {
        let error = run(&TABLE, &tokens(&[Determiner, Noun])).unwrap_err();
        match error {
            ParseError::GrammarMismatch(mismatch) => {
                assert_eq!(mismatch.found, None);
                assert_eq!(mismatch.expected, vec![Terminal::Word(Verb)]);
            }
            other => panic!("Expected GrammarMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_token_is_mismatch() {
        let input = tokens(&[Pronoun, Verb, Adverb, Adverb, Adverb]);
        let error = run(&TABLE, &input).unwrap_err();
        match error {
            ParseError::GrammarMismatch(mismatch) => {
                assert_eq!(mismatch.found.map(|t| t.text), Some("w4".to_string()));
            }
            other => panic!("Expected GrammarMismatch, got {:?}", other),
        }
    }
}
