//! tests/vector_tests.rs
//! Known-answer vectors loaded from tests/test_data

use serde::Deserialize;

use enigma_rs::{Machine, Settings};

#[derive(Debug, Deserialize)]
struct MachineVector {
    description: String,
    left_rotor: String,
    middle_rotor: String,
    right_rotor: String,
    reflector: String,
    /// Ring settings as three window letters, left to right.
    rings: String,
    /// Start positions as three window letters, left to right.
    positions: String,
    plugboard: String,
    plaintext: String,
    ciphertext: String,
}

impl MachineVector {
    fn settings(&self) -> Settings {
        let rings = three_letters(&self.rings, "rings", &self.description);
        let positions = three_letters(&self.positions, "positions", &self.description);
        Settings {
            left_rotor: self.left_rotor.clone(),
            middle_rotor: self.middle_rotor.clone(),
            right_rotor: self.right_rotor.clone(),
            reflector: self.reflector.clone(),
            left_ring: rings[0],
            middle_ring: rings[1],
            right_ring: rings[2],
            left_position: positions[0],
            middle_position: positions[1],
            right_position: positions[2],
            plugboard: self.plugboard.clone(),
        }
    }
}

fn three_letters(text: &str, what: &str, description: &str) -> [char; 3] {
    let letters: Vec<char> = text.chars().collect();
    letters
        .try_into()
        .unwrap_or_else(|_| panic!("{description}: {what} must be exactly three letters"))
}

// Shared JSON loader
fn load_json<T>(filename: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join(filename);

    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {filename}: {e}"));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}

#[test]
fn known_answer_vectors_encipher_exactly() {
    eprintln!("RUNNING: Known-answer vector suite");

    let vectors: Vec<MachineVector> = load_json("machine_vectors.json");
    assert!(!vectors.is_empty(), "vector file must not be empty");

    for (i, vector) in vectors.iter().enumerate() {
        let mut machine = Machine::new(&vector.settings())
            .unwrap_or_else(|e| panic!("Vector {i} ({}): bad settings: {e}", vector.description));

        let encoded = machine
            .encode(&vector.plaintext)
            .unwrap_or_else(|e| panic!("Vector {i} ({}): encode failed: {e}", vector.description));

        assert_eq!(
            encoded.text, vector.ciphertext,
            "Ciphertext mismatch in vector {i} ({})",
            vector.description
        );
        assert!(
            encoded.skipped.is_empty(),
            "Vector {i} ({}) skipped characters unexpectedly",
            vector.description
        );
    }

    eprintln!("SUCCESS: All {} vectors PASSED!", vectors.len());
}

#[test]
fn known_answer_vectors_decode_back() {
    eprintln!("RUNNING: Vector reciprocity suite");

    let vectors: Vec<MachineVector> = load_json("machine_vectors.json");

    for (i, vector) in vectors.iter().enumerate() {
        let mut machine = Machine::new(&vector.settings())
            .unwrap_or_else(|e| panic!("Vector {i} ({}): bad settings: {e}", vector.description));

        let decoded = machine
            .encode(&vector.ciphertext)
            .unwrap_or_else(|e| panic!("Vector {i} ({}): decode failed: {e}", vector.description));

        assert_eq!(
            decoded.text, vector.plaintext,
            "Plaintext mismatch in vector {i} ({})",
            vector.description
        );
    }

    eprintln!("SUCCESS: All {} vectors decoded back!", vectors.len());
}
