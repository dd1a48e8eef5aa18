//! The assembled machine and the per-keystroke encoding cycle.
//!
//! A keystroke does two things, strictly in this order: the rotor stack
//! advances, then the signal crosses the machine. The signal path is
//! plugboard, right rotor, middle rotor, left rotor, reflector, and the
//! same parts again in reverse. Because the reflector pairs letters and
//! every part is its own inverse along that path, a machine at a given
//! state deciphers exactly what an identically configured machine
//! enciphered, and no letter ever maps to itself.

use crate::alphabet::{index_of, letter};
use crate::error::{EnigmaError, InputError};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::settings::Settings;

/// An M3 machine ready to encode.
///
/// The machine is stateful: every enciphered letter moves at least the
/// right rotor, so encoding the same text twice gives different output.
/// Clone the machine first if the starting state is needed again.
///
/// ```
/// use enigma_rs::{Machine, Settings};
///
/// let mut machine = Machine::new(&Settings::default())?;
/// assert_eq!(machine.encode("AAAAA")?.text, "BDZGO");
/// # Ok::<(), enigma_rs::EnigmaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    left: Rotor,
    middle: Rotor,
    right: Rotor,
    reflector: Reflector,
    plugboard: Plugboard,
}

/// The outcome of encoding a whole message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The output text. Letters are enciphered, whitespace and any skipped
    /// characters are carried through in place.
    pub text: String,
    /// Non-letter, non-whitespace characters that could not be enciphered,
    /// in message order.
    pub skipped: Vec<InputError>,
}

impl Machine {
    /// Assembles a machine from the given settings.
    ///
    /// Validation is exhaustive: if anything is wrong the returned
    /// [`EnigmaError::Settings`] lists every problem, and no machine is
    /// built.
    pub fn new(settings: &Settings) -> Result<Self, EnigmaError> {
        let resolved = settings.resolve().map_err(EnigmaError::Settings)?;
        Ok(Self {
            left: Rotor::new(resolved.left.spec, resolved.left.ring, resolved.left.position),
            middle: Rotor::new(
                resolved.middle.spec,
                resolved.middle.ring,
                resolved.middle.position,
            ),
            right: Rotor::new(
                resolved.right.spec,
                resolved.right.ring,
                resolved.right.position,
            ),
            reflector: Reflector::new(resolved.reflector),
            plugboard: resolved.plugboard,
        })
    }

    /// Advances the rotor stack for one keystroke.
    ///
    /// Notches are sampled before anything moves. A middle rotor at its
    /// notch steps itself and the left rotor; otherwise a right rotor at
    /// its notch steps the middle one. The right rotor steps on every
    /// keystroke. Sampling the middle notch before the middle rotor moves
    /// is what produces the double step: the keystroke after the right
    /// rotor pushes the middle rotor onto its notch, the middle rotor
    /// moves again together with the left one.
    fn advance_rotors(&mut self) {
        if self.middle.is_at_notch() {
            self.middle.step();
            self.left.step();
        } else if self.right.is_at_notch() {
            self.middle.step();
        }
        self.right.step();
    }

    /// Encodes a single character, stepping the rotors first.
    ///
    /// Returns `None` for anything that is not a letter; the machine does
    /// not move in that case. Letter case is carried over to the output.
    pub fn encode_char(&mut self, character: char) -> Option<char> {
        let index = index_of(character)?;
        self.advance_rotors();

        let mut signal = self.plugboard.swap(index);
        signal = self.right.encode_forward(signal);
        signal = self.middle.encode_forward(signal);
        signal = self.left.encode_forward(signal);
        signal = self.reflector.reflect(signal);
        signal = self.left.encode_backward(signal);
        signal = self.middle.encode_backward(signal);
        signal = self.right.encode_backward(signal);
        signal = self.plugboard.swap(signal);

        let out = letter(signal);
        Some(if character.is_ascii_lowercase() {
            out.to_ascii_lowercase()
        } else {
            out
        })
    }

    /// Encodes a whole message.
    ///
    /// Letters are enciphered and advance the machine; whitespace passes
    /// through untouched; any other character passes through too but is
    /// recorded in [`Encoded::skipped`]. A message with no letters at all
    /// produces no output and is reported as
    /// [`EnigmaError::NoEncodableCharacters`].
    pub fn encode(&mut self, message: &str) -> Result<Encoded, EnigmaError> {
        let mut text = String::with_capacity(message.len());
        let mut skipped = Vec::new();
        let mut keystrokes = 0usize;

        for (index, character) in message.chars().enumerate() {
            match self.encode_char(character) {
                Some(out) => {
                    text.push(out);
                    keystrokes += 1;
                }
                None => {
                    if !character.is_whitespace() {
                        skipped.push(InputError { index, character });
                    }
                    text.push(character);
                }
            }
        }

        if keystrokes == 0 {
            return Err(EnigmaError::NoEncodableCharacters { skipped });
        }
        Ok(Encoded { text, skipped })
    }

    /// The current window letters, left to right.
    pub fn positions(&self) -> [char; 3] {
        [
            letter(self.left.position()),
            letter(self.middle.position()),
            letter(self.right.position()),
        ]
    }

    /// The catalog names of the fitted rotors, left to right.
    pub fn rotor_names(&self) -> [&'static str; 3] {
        [self.left.name(), self.middle.name(), self.right.name()]
    }

    /// The catalog name of the fitted reflector.
    pub fn reflector_name(&self) -> &'static str {
        self.reflector.name()
    }
}
