//! tests/common.rs
//! Shared machine configurations used across test files

use enigma_rs::{Machine, Settings};

/// A setup exercising every part at once: naval rotors, offset rings and
/// positions, reflector C and a populated plugboard.
#[allow(dead_code)] // Used across multiple test files
pub fn naval_settings() -> Settings {
    Settings {
        left_rotor: "VIII".to_string(),
        middle_rotor: "VI".to_string(),
        right_rotor: "V".to_string(),
        reflector: "C".to_string(),
        left_ring: 'E',
        middle_ring: 'P',
        right_ring: 'L',
        left_position: 'N',
        middle_position: 'A',
        right_position: 'J',
        plugboard: "AE BF CM DQ HU JN LX PR SZ VW".to_string(),
    }
}

/// Builds a machine from settings that are expected to be valid.
#[allow(dead_code)] // Used across multiple test files
pub fn machine(settings: &Settings) -> Machine {
    Machine::new(settings).unwrap_or_else(|e| panic!("settings should be valid: {e}"))
}
