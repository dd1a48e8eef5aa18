//! Command line surface: encode one message with explicit machine settings.
//!
//! Every switch maps onto one [`Settings`] field and defaults to the
//! classic demonstration setup, so `enigma HELLO WORLD` works with no
//! further arguments. Values are deliberately not validated by the parser;
//! they flow into [`Machine::new`] so the operator sees every settings
//! problem in one report instead of the first one only.

use std::ffi::OsString;

use clap::{ArgAction, Parser};
use tracing::{debug, warn};

use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "enigma",
    version,
    about = "M3 Enigma cipher machine",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Message to encode; multiple words are joined with single spaces.
    #[arg(value_name = "MESSAGE", num_args = 1.., required = true)]
    pub message: Vec<String>,

    /// Left (slow) rotor: I, II, III, IV, V, VI, VII or VIII.
    #[arg(long, value_name = "ROTOR")]
    pub left_rotor: Option<String>,

    /// Middle rotor: I, II, III, IV, V, VI, VII or VIII.
    #[arg(long, value_name = "ROTOR")]
    pub middle_rotor: Option<String>,

    /// Right (fast) rotor: I, II, III, IV, V, VI, VII or VIII.
    #[arg(long, value_name = "ROTOR")]
    pub right_rotor: Option<String>,

    /// Reflector: A, B or C.
    #[arg(short, long, value_name = "REFLECTOR")]
    pub reflector: Option<String>,

    /// Ring setting of the left rotor: A-Z.
    #[arg(long, value_name = "LETTER")]
    pub left_ring: Option<char>,

    /// Ring setting of the middle rotor: A-Z.
    #[arg(long, value_name = "LETTER")]
    pub middle_ring: Option<char>,

    /// Ring setting of the right rotor: A-Z.
    #[arg(long, value_name = "LETTER")]
    pub right_ring: Option<char>,

    /// Start position of the left rotor: A-Z.
    #[arg(long, value_name = "LETTER")]
    pub left_position: Option<char>,

    /// Start position of the middle rotor: A-Z.
    #[arg(long, value_name = "LETTER")]
    pub middle_position: Option<char>,

    /// Start position of the right rotor: A-Z.
    #[arg(long, value_name = "LETTER")]
    pub right_position: Option<char>,

    /// Plugboard cables as two-letter pairs, e.g. `-p AB CD EF`.
    /// Each letter may appear in at most one pair.
    #[arg(short, long, value_name = "PAIRS", num_args = 1..)]
    pub plugboard: Vec<String>,

    /// More log output (repeat for more detail).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::parse_from(args)
}

/// Run the CLI (used by bin).
pub fn run(cli: Cli) -> Result<(), EnigmaError> {
    let settings = settings_from(&cli);
    let mut machine = Machine::new(&settings)?;
    debug!(
        rotors = ?machine.rotor_names(),
        reflector = machine.reflector_name(),
        "machine assembled"
    );

    let message = cli.message.join(" ");
    let encoded = machine.encode(&message)?;
    for skip in &encoded.skipped {
        warn!("{skip}");
    }
    debug!(positions = ?machine.positions(), "rotors after encoding");

    println!("output: {}", encoded.text);
    Ok(())
}

/// Lays the command line switches over the default settings.
fn settings_from(cli: &Cli) -> Settings {
    let mut settings = Settings::default();
    if let Some(name) = &cli.left_rotor {
        settings.left_rotor = name.clone();
    }
    if let Some(name) = &cli.middle_rotor {
        settings.middle_rotor = name.clone();
    }
    if let Some(name) = &cli.right_rotor {
        settings.right_rotor = name.clone();
    }
    if let Some(name) = &cli.reflector {
        settings.reflector = name.clone();
    }
    if let Some(ring) = cli.left_ring {
        settings.left_ring = ring;
    }
    if let Some(ring) = cli.middle_ring {
        settings.middle_ring = ring;
    }
    if let Some(ring) = cli.right_ring {
        settings.right_ring = ring;
    }
    if let Some(position) = cli.left_position {
        settings.left_position = position;
    }
    if let Some(position) = cli.middle_position {
        settings.middle_position = position;
    }
    if let Some(position) = cli.right_position {
        settings.right_position = position;
    }
    if !cli.plugboard.is_empty() {
        settings.plugboard = cli.plugboard.join(",");
    }
    settings
}
