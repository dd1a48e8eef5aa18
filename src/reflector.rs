//! The reflector: a fixed involution that turns the signal around.
//!
//! Unlike the rotors the reflector never moves and is wired strictly in
//! pairs, so reflecting twice always returns the original index and no
//! index ever maps to itself. The pairing is what makes the whole machine
//! reciprocal, and the missing fixed points are why a letter can never
//! encipher to itself.

use crate::alphabet::LETTER_COUNT;
use crate::catalog::ReflectorSpec;

/// A catalog reflector, resolved to index form.
#[derive(Debug, Clone)]
pub struct Reflector {
    spec: &'static ReflectorSpec,
    wiring: [u8; LETTER_COUNT as usize],
}

impl Reflector {
    /// Builds a reflector from its catalog spec.
    pub fn new(spec: &'static ReflectorSpec) -> Self {
        let mut wiring = [0u8; LETTER_COUNT as usize];
        for (i, byte) in spec.wiring.bytes().enumerate() {
            wiring[i] = byte - b'A';
        }
        Self { spec, wiring }
    }

    /// The catalog name of this reflector, e.g. `"B"`.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Sends the signal back through the rotor stack on a different wire.
    pub fn reflect(&self, index: u8) -> u8 {
        self.wiring[index as usize]
    }
}
