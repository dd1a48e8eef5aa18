//! Error types for machine configuration and message input.
//!
//! Settings problems are collected exhaustively: validation walks every
//! field and the machine constructor returns the full list in one
//! [`EnigmaError::Settings`] value instead of stopping at the first hit.
//! Message problems never abort an encode run; they are reported per
//! character alongside the output (see [`crate::machine::Encoded`]).

use std::fmt;

use thiserror::Error;

use crate::catalog;

/// Which of the three rotor slots a settings error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Right,
    Middle,
    Left,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Slot::Right => "right",
            Slot::Middle => "middle",
            Slot::Left => "left",
        })
    }
}

/// A single invalid value found while validating machine settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The named rotor model is not in the catalog.
    #[error("unknown {slot} rotor {name:?} (expected one of {})", known_rotors())]
    UnknownRotor { slot: Slot, name: String },

    /// The named reflector model is not in the catalog.
    #[error("unknown reflector {name:?} (expected one of {})", known_reflectors())]
    UnknownReflector { name: String },

    /// A ring setting is not a letter A-Z.
    #[error("{slot} ring setting {value:?} is not a letter A-Z")]
    RingNotALetter { slot: Slot, value: char },

    /// A start position is not a letter A-Z.
    #[error("{slot} start position {value:?} is not a letter A-Z")]
    PositionNotALetter { slot: Slot, value: char },

    /// A plugboard token does not consist of exactly two characters.
    #[error("plugboard pair {0:?} must be exactly two letters")]
    PlugboardPairLength(String),

    /// A plugboard token contains a character outside A-Z.
    #[error("plugboard pair {0:?} may only use letters A-Z")]
    PlugboardPairNotLetters(String),

    /// A plugboard token wires a letter to itself.
    #[error("plugboard pair {0:?} connects a letter to itself")]
    PlugboardPairIdentical(String),

    /// A letter appears in more than one plugboard pair, which would short
    /// the board.
    #[error("plugboard connects letter '{0}' more than once")]
    PlugboardLetterReused(char),
}

/// A message character that was passed through without being enciphered.
///
/// `index` counts characters, not bytes, from the start of the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("character {character:?} at index {index} cannot be enciphered")]
pub struct InputError {
    pub index: usize,
    pub character: char,
}

/// The error type for machine construction and whole-message encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// One or more settings failed validation. The machine is never
    /// partially built; the list covers every problem found.
    #[error("invalid machine settings: {}", join(.0))]
    Settings(Vec<SettingsError>),

    /// The message contained nothing the machine can encipher, so there is
    /// no output at all. Any non-letter characters that were seen along the
    /// way are carried in `skipped`.
    #[error("message contains no encodable characters")]
    NoEncodableCharacters { skipped: Vec<InputError> },
}

fn join(errors: &[SettingsError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn known_rotors() -> String {
    catalog::rotor_names().collect::<Vec<_>>().join(", ")
}

fn known_reflectors() -> String {
    catalog::reflector_names().collect::<Vec<_>>().join(", ")
}
