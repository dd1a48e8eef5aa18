//! The plugboard: operator-wired letter swaps in front of the rotors.
//!
//! Up to thirteen cables each connect two letters; a connected pair swaps
//! in both directions, an unconnected letter passes straight through. The
//! signal crosses the board twice per keystroke, once before the rotor
//! stack and once after it.

use crate::alphabet::{index_of, letter, LETTER_COUNT};
use crate::error::SettingsError;

/// The plugboard wiring as a self-inverse letter map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    map: [u8; LETTER_COUNT as usize],
}

impl Default for Plugboard {
    /// A board with no cables: every letter maps to itself.
    fn default() -> Self {
        let mut map = [0u8; LETTER_COUNT as usize];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { map }
    }
}

impl Plugboard {
    /// Parses a cable description such as `"AB CD EF"`.
    ///
    /// Pairs are separated by whitespace or commas; letters are accepted in
    /// either case. Every problem in the description is reported, not just
    /// the first one, and a pair that reuses an already-connected letter is
    /// left out entirely so the board stays self-inverse.
    pub fn parse(text: &str) -> Result<Self, Vec<SettingsError>> {
        let mut board = Self::default();
        let mut connected = [false; LETTER_COUNT as usize];
        let mut errors = Vec::new();

        let pairs = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty());
        for token in pairs {
            let mut chars = token.chars();
            let (first, second) = match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => {
                    errors.push(SettingsError::PlugboardPairLength(token.to_string()));
                    continue;
                }
            };
            let (a, b) = match (index_of(first), index_of(second)) {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    errors.push(SettingsError::PlugboardPairNotLetters(token.to_string()));
                    continue;
                }
            };
            if a == b {
                errors.push(SettingsError::PlugboardPairIdentical(token.to_string()));
                continue;
            }
            let mut reused = false;
            for end in [a, b] {
                if connected[end as usize] {
                    errors.push(SettingsError::PlugboardLetterReused(letter(end)));
                    reused = true;
                }
            }
            if reused {
                continue;
            }
            board.map[a as usize] = b;
            board.map[b as usize] = a;
            connected[a as usize] = true;
            connected[b as usize] = true;
        }

        if errors.is_empty() {
            Ok(board)
        } else {
            Err(errors)
        }
    }

    /// Passes one letter index through the board.
    pub fn swap(&self, index: u8) -> u8 {
        self.map[index as usize]
    }
}
