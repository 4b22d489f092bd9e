//! Testing utilities
//!
//!     Parser tests should not invent a dictionary per test: a word misfiled in one ad-hoc
//!     dictionary quietly changes which productions a test exercises. Use the verified
//!     [sample dictionary](sample_dictionary) instead, and check trees with
//!     [assert_tree](fn@assert_tree) rather than comparing whole structures by hand.
//!
//!     ```rust,ignore
//!     use sentex_parser::sentex::parsing::{Label, SentenceParser};
//!     use sentex_parser::sentex::testing::{assert_tree, sample_dictionary};
//!
//!     let dictionary = sample_dictionary();
//!     let tree = SentenceParser::new(&dictionary).parse("the cat runs").unwrap();
//!
//!     assert_tree(&tree)
//!         .label(Label::Sentence)
//!         .child_count(2)
//!         .node(0, |subject| {
//!             subject.label(Label::Subject).node(0, |np| {
//!                 np.label(Label::NounPhrase).text("the cat");
//!             });
//!         });
//!     ```

mod assertions;

pub use assertions::{assert_tree, TreeAssertion};

use crate::sentex::dictionary::Dictionary;

/// Source of the sample dictionary, in the dictionary file format.
pub const SAMPLE_DICTIONARY: &str = include_str!("testing/sample_dictionary.txt");

/// The verified sample dictionary. Words outside it classify as nouns.
///
/// # Panics
///
/// If the embedded sample stops parsing. It is fixed at compile time, so this only
/// happens when `sample_dictionary.txt` itself is edited into an invalid state.
pub fn sample_dictionary() -> Dictionary {
    Dictionary::parse(SAMPLE_DICTIONARY)
        .expect("embedded sample dictionary is valid")
}
