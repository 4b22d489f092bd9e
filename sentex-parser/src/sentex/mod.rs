//! Main module for sentex library functionality

pub mod cipher;
pub mod dictionary;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
