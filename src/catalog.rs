//! Static catalogs of historical rotor and reflector wirings.
//!
//! The M3 used a pool of eight numbered rotors and three reflectors; their
//! wirings are fixed data, baked in as constants and exposed through pure
//! lookup functions. Nothing here is mutable at runtime: machines borrow
//! specs by `'static` reference, so the tables are freely shared across any
//! number of machines and threads.
//!
//! A wiring string reads left to right as entry contacts `A..Z`: rotor I
//! turns `A` into `E`, `B` into `K`, and so on (with the rotor at position
//! `A` and ring `A`). Notches name the window letter at which the rotor,
//! on the next keystroke, carries the rotor to its left along with it.

/// Wiring and turnover data for one rotor model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Catalog name, e.g. `"III"`.
    pub name: &'static str,
    /// Forward substitution as 26 uppercase letters, a permutation of the
    /// alphabet.
    pub wiring: &'static str,
    /// One or two turnover letters.
    pub notches: &'static str,
}

/// Wiring data for one reflector model.
///
/// Reflector wirings are involutions with no fixed point: every letter maps
/// to a different letter, and mapping twice returns the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Catalog name, e.g. `"B"`.
    pub name: &'static str,
    /// Substitution as 26 uppercase letters.
    pub wiring: &'static str,
}

/// The eight M3 rotors. I through V carry a single notch; the naval rotors
/// VI through VIII carry two.
pub static ROTORS: [RotorSpec; 8] = [
    RotorSpec { name: "I",    wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ", notches: "Q" },
    RotorSpec { name: "II",   wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE", notches: "E" },
    RotorSpec { name: "III",  wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO", notches: "V" },
    RotorSpec { name: "IV",   wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB", notches: "J" },
    RotorSpec { name: "V",    wiring: "VZBRGITYUPSDNHLXAWMJQOFECK", notches: "Z" },
    RotorSpec { name: "VI",   wiring: "JPGVOUMFYQBENHZRDKASXLICTW", notches: "ZM" },
    RotorSpec { name: "VII",  wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT", notches: "ZM" },
    RotorSpec { name: "VIII", wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV", notches: "ZM" },
];

/// The three reflectors ("Umkehrwalzen") A, B and C.
pub static REFLECTORS: [ReflectorSpec; 3] = [
    ReflectorSpec { name: "A", wiring: "EJMZALYXVBWFCRQUONTSPIKHGD" },
    ReflectorSpec { name: "B", wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT" },
    ReflectorSpec { name: "C", wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL" },
];

/// Looks up a rotor model by name, ignoring case (`"iii"` finds `III`).
pub fn rotor_spec(name: &str) -> Option<&'static RotorSpec> {
    ROTORS.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

/// Looks up a reflector model by name, ignoring case.
pub fn reflector_spec(name: &str) -> Option<&'static ReflectorSpec> {
    REFLECTORS.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

/// Names of all cataloged rotors, in catalog order. Used for help text and
/// error listings.
pub fn rotor_names() -> impl Iterator<Item = &'static str> {
    ROTORS.iter().map(|r| r.name)
}

/// Names of all cataloged reflectors, in catalog order.
pub fn reflector_names() -> impl Iterator<Item = &'static str> {
    REFLECTORS.iter().map(|r| r.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotor_lookup_finds_every_name() {
        for spec in &ROTORS {
            assert_eq!(rotor_spec(spec.name), Some(spec));
        }
    }

    #[test]
    fn rotor_lookup_ignores_case() {
        assert_eq!(rotor_spec("viii").map(|r| r.name), Some("VIII"));
        assert_eq!(rotor_spec("Iv").map(|r| r.name), Some("IV"));
    }

    #[test]
    fn reflector_lookup_ignores_case() {
        assert_eq!(reflector_spec("b").map(|r| r.name), Some("B"));
        assert_eq!(reflector_spec("C").map(|r| r.name), Some("C"));
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert_eq!(rotor_spec("IX"), None);
        assert_eq!(rotor_spec(""), None);
        assert_eq!(reflector_spec("D"), None);
    }

    #[test]
    fn name_listings_match_catalog_order() {
        let rotors: Vec<_> = rotor_names().collect();
        assert_eq!(rotors, ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"]);
        let reflectors: Vec<_> = reflector_names().collect();
        assert_eq!(reflectors, ["A", "B", "C"]);
    }

    #[test]
    fn wiring_strings_are_well_formed() {
        for spec in &ROTORS {
            assert_eq!(spec.wiring.len(), 26, "rotor {}", spec.name);
            assert!(matches!(spec.notches.len(), 1 | 2), "rotor {}", spec.name);
            assert!(spec.wiring.bytes().all(|b| b.is_ascii_uppercase()));
            assert!(spec.notches.bytes().all(|b| b.is_ascii_uppercase()));
        }
        for spec in &REFLECTORS {
            assert_eq!(spec.wiring.len(), 26, "reflector {}", spec.name);
            assert!(spec.wiring.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }
}
