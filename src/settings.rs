//! Machine settings as the operator would write them down.
//!
//! [`Settings`] is the plain-text description of a machine: catalog names
//! for the rotors and reflector, window letters for the ring settings and
//! start positions, and a cable list for the plugboard. It stays fully
//! public and mutable; nothing is checked until the settings are resolved
//! into machine parts, at which point every problem is reported at once.

use crate::alphabet::index_of;
use crate::catalog::{reflector_spec, rotor_spec, ReflectorSpec, RotorSpec};
use crate::error::{SettingsError, Slot};
use crate::plugboard::Plugboard;

/// A complete machine configuration in operator notation.
///
/// Rotor and reflector names are matched against the catalog without regard
/// to case, and ring settings and start positions accept letters in either
/// case. The default is the classic demonstration setup: rotors I, II and
/// III from left to right, reflector B, everything at `A`, no cables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Catalog name of the leftmost (slowest) rotor.
    pub left_rotor: String,
    /// Catalog name of the middle rotor.
    pub middle_rotor: String,
    /// Catalog name of the rightmost (fastest) rotor.
    pub right_rotor: String,
    /// Catalog name of the reflector.
    pub reflector: String,
    /// Ring setting of the left rotor, as a window letter.
    pub left_ring: char,
    /// Ring setting of the middle rotor.
    pub middle_ring: char,
    /// Ring setting of the right rotor.
    pub right_ring: char,
    /// Start position of the left rotor, as a window letter.
    pub left_position: char,
    /// Start position of the middle rotor.
    pub middle_position: char,
    /// Start position of the right rotor.
    pub right_position: char,
    /// Plugboard cables, e.g. `"AB CD"`. Empty means no cables.
    pub plugboard: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            left_rotor: "I".to_string(),
            middle_rotor: "II".to_string(),
            right_rotor: "III".to_string(),
            reflector: "B".to_string(),
            left_ring: 'A',
            middle_ring: 'A',
            right_ring: 'A',
            left_position: 'A',
            middle_position: 'A',
            right_position: 'A',
            plugboard: String::new(),
        }
    }
}

impl Settings {
    /// Checks every field and reports all problems found, in field order:
    /// rotors left to right, then the reflector, then the plugboard.
    pub fn validate(&self) -> Result<(), Vec<SettingsError>> {
        self.resolve().map(|_| ())
    }

    /// Resolves the settings into ready-to-assemble machine parts, using
    /// the same walk as [`validate`] so the two can never disagree.
    ///
    /// [`validate`]: Self::validate
    pub(crate) fn resolve(&self) -> Result<Resolved, Vec<SettingsError>> {
        let mut errors = Vec::new();

        let left = self.resolve_slot(Slot::Left, &mut errors);
        let middle = self.resolve_slot(Slot::Middle, &mut errors);
        let right = self.resolve_slot(Slot::Right, &mut errors);

        let reflector = match reflector_spec(&self.reflector) {
            Some(spec) => Some(spec),
            None => {
                errors.push(SettingsError::UnknownReflector {
                    name: self.reflector.clone(),
                });
                None
            }
        };

        let plugboard = match Plugboard::parse(&self.plugboard) {
            Ok(board) => Some(board),
            Err(mut plug_errors) => {
                errors.append(&mut plug_errors);
                None
            }
        };

        match (left, middle, right, reflector, plugboard) {
            (Some(left), Some(middle), Some(right), Some(reflector), Some(plugboard))
                if errors.is_empty() =>
            {
                Ok(Resolved {
                    left,
                    middle,
                    right,
                    reflector,
                    plugboard,
                })
            }
            _ => Err(errors),
        }
    }

    fn resolve_slot(&self, slot: Slot, errors: &mut Vec<SettingsError>) -> Option<ResolvedSlot> {
        let (name, ring, position) = match slot {
            Slot::Left => (&self.left_rotor, self.left_ring, self.left_position),
            Slot::Middle => (&self.middle_rotor, self.middle_ring, self.middle_position),
            Slot::Right => (&self.right_rotor, self.right_ring, self.right_position),
        };

        let spec = match rotor_spec(name) {
            Some(spec) => Some(spec),
            None => {
                errors.push(SettingsError::UnknownRotor {
                    slot,
                    name: name.clone(),
                });
                None
            }
        };
        let ring = match index_of(ring) {
            Some(index) => Some(index),
            None => {
                errors.push(SettingsError::RingNotALetter { slot, value: ring });
                None
            }
        };
        let position = match index_of(position) {
            Some(index) => Some(index),
            None => {
                errors.push(SettingsError::PositionNotALetter {
                    slot,
                    value: position,
                });
                None
            }
        };

        match (spec, ring, position) {
            (Some(spec), Some(ring), Some(position)) => Some(ResolvedSlot {
                spec,
                ring,
                position,
            }),
            _ => None,
        }
    }
}

/// Settings resolved against the catalog, ready for machine assembly.
pub(crate) struct Resolved {
    pub(crate) left: ResolvedSlot,
    pub(crate) middle: ResolvedSlot,
    pub(crate) right: ResolvedSlot,
    pub(crate) reflector: &'static ReflectorSpec,
    pub(crate) plugboard: Plugboard,
}

/// One rotor slot resolved to its spec and 0-based offsets.
pub(crate) struct ResolvedSlot {
    pub(crate) spec: &'static RotorSpec,
    pub(crate) ring: u8,
    pub(crate) position: u8,
}
