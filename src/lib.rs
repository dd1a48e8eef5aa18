// src/lib.rs

//! An M3 Enigma cipher machine: three rotors picked from a catalog of
//! eight, one of three reflectors, and an operator-wired plugboard.
//!
//! The machine is reciprocal. Encoding is decoding: feed the ciphertext
//! to an identically configured machine and the plaintext comes back.
//!
//! ```
//! use enigma_rs::{Machine, Settings};
//!
//! let settings = Settings::default();
//!
//! let mut sender = Machine::new(&settings)?;
//! let encoded = sender.encode("AAAAA")?;
//! assert_eq!(encoded.text, "BDZGO");
//!
//! let mut receiver = Machine::new(&settings)?;
//! assert_eq!(receiver.encode("BDZGO")?.text, "AAAAA");
//! # Ok::<(), enigma_rs::EnigmaError>(())
//! ```

pub mod alphabet;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod settings;

// High-level API: assemble a machine from settings and encode.
pub use error::{EnigmaError, InputError, SettingsError, Slot};
pub use machine::{Encoded, Machine};
pub use settings::Settings;

#[cfg(feature = "batch-ops")]
pub use batch_ops::encode_batch;
