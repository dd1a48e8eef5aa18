//! A single rotor: a wired permutation on a rotatable disc.
//!
//! Each rotor carries three pieces of state on top of its catalog wiring.
//! The *position* is the letter currently visible in the machine window and
//! advances by one step on (some) keystrokes. The *ring setting* rotates the
//! wiring core relative to the alphabet ring and is fixed for the lifetime
//! of the machine. The *notch* letters mark window positions at which the
//! rotor carries its left neighbour along on the next keystroke.
//!
//! Signals pass through every rotor twice per keystroke: once right-to-left
//! on the way to the reflector ([`Rotor::encode_forward`]) and once
//! left-to-right on the way back ([`Rotor::encode_backward`]).

use crate::alphabet::LETTER_COUNT;
use crate::catalog::RotorSpec;

/// A catalog rotor together with its ring setting and current position.
#[derive(Debug, Clone)]
pub struct Rotor {
    spec: &'static RotorSpec,
    /// Forward wiring as 0-based letter indexes.
    wiring: [u8; LETTER_COUNT as usize],
    /// Inverse of `wiring`, used for the return pass.
    inverse: [u8; LETTER_COUNT as usize],
    /// Ring setting, 0 = 'A'.
    ring: u8,
    /// Window position, 0 = 'A'.
    position: u8,
}

impl Rotor {
    /// Builds a rotor from its catalog spec with the given ring setting and
    /// start position, both 0-based letter indexes.
    pub fn new(spec: &'static RotorSpec, ring: u8, position: u8) -> Self {
        let mut wiring = [0u8; LETTER_COUNT as usize];
        let mut inverse = [0u8; LETTER_COUNT as usize];
        for (i, byte) in spec.wiring.bytes().enumerate() {
            let w = byte - b'A';
            wiring[i] = w;
            inverse[w as usize] = i as u8;
        }
        Self {
            spec,
            wiring,
            inverse,
            ring,
            position,
        }
    }

    /// The catalog name of this rotor, e.g. `"III"`.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// The current window position as a 0-based letter index.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Advances the rotor by one window position, wrapping Z back to A.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % LETTER_COUNT;
    }

    /// Whether the rotor currently shows one of its notch letters in the
    /// window. The stepping mechanism samples this *before* any rotor moves
    /// on a keystroke.
    pub fn is_at_notch(&self) -> bool {
        self.spec
            .notches
            .bytes()
            .any(|notch| notch - b'A' == self.position)
    }

    /// Net rotation of the wiring core relative to the fixed entry points:
    /// the window position advances the core, the ring setting retards it.
    fn shift(&self) -> u8 {
        (self.position + LETTER_COUNT - self.ring) % LETTER_COUNT
    }

    /// Maps a contact index right-to-left through the rotor.
    ///
    /// The signal enters at fixed contact `index`, travels through the
    /// rotated core, and leaves at a fixed contact on the other side. Both
    /// the entry and the exit must be corrected by the current [`shift`],
    /// since the wiring table is written for the core's A-up orientation.
    ///
    /// [`shift`]: Self::shift
    pub fn encode_forward(&self, index: u8) -> u8 {
        let shift = self.shift();
        let contact = (index + shift) % LETTER_COUNT;
        (self.wiring[contact as usize] + LETTER_COUNT - shift) % LETTER_COUNT
    }

    /// Maps a contact index left-to-right through the rotor, the exact
    /// inverse of [`encode_forward`] at the same position.
    ///
    /// [`encode_forward`]: Self::encode_forward
    pub fn encode_backward(&self, index: u8) -> u8 {
        let shift = self.shift();
        let contact = (index + shift) % LETTER_COUNT;
        (self.inverse[contact as usize] + LETTER_COUNT - shift) % LETTER_COUNT
    }
}
