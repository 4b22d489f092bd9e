//! Caesar cipher over letters and digits
//!
//! ASCII letters move `shift` places through the alphabet, wrapping and keeping their case.
//! ASCII digits move `shift` places modulo 10. Everything else, spaces and punctuation
//! included, is copied through. Decoding is the same transform with the shift negated, so
//! `decode(encode(s, n), n) == s` for every string and every valid shift.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("shift must be between 0 and 25, got {0}")]
    ShiftOutOfRange(i64),
}

/// A shift validated to `0..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift(u8);

impl Shift {
    pub const MAX: u8 = 25;

    pub fn new(value: i64) -> Result<Self, CipherError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Shift)
            .ok_or(CipherError::ShiftOutOfRange(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Shift {
    type Error = CipherError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Shift::new(value)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Apply the cipher; `encode == false` decodes.
pub fn cipher(text: &str, shift: Shift, encode: bool) -> String {
    let offset = if encode {
        i32::from(shift.get())
    } else {
        -i32::from(shift.get())
    };
    text.chars().map(|c| shift_char(c, offset)).collect()
}

pub fn encode(text: &str, shift: Shift) -> String {
    cipher(text, shift, true)
}

pub fn decode(text: &str, shift: Shift) -> String {
    cipher(text, shift, false)
}

fn shift_char(c: char, offset: i32) -> char {
    let rotate = |base: u8, modulus: i32| {
        let index = (c as i32 - i32::from(base) + offset).rem_euclid(modulus);
        char::from(base + index as u8)
    };

    if c.is_ascii_uppercase() {
        rotate(b'A', 26)
    } else if c.is_ascii_lowercase() {
        rotate(b'a', 26)
    } else if c.is_ascii_digit() {
        rotate(b'0', 10)
    } else {
        c
    }
}
