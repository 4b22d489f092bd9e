//! # sentex
//!
//! A dictionary-driven word classifier and a small sentence grammar parser.
//!
//! File Layout
//!
//! The pipeline runs in two stages that share nothing but the token type:
//! src/sentex
//!   ├── lexing       Raw scanning and word classification
//!   ├── parsing      Grammar data, the generated shift-reduce table and the engine
//!   └── formats      Tree renderers behind a registry
//!
//! The dictionary, cipher and testing modules sit beside them.
//!   
//! For testing helpers (sample dictionary, tree assertions), see the
//! [testing module](sentex::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod sentex;
