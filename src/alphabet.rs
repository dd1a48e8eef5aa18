//! The fixed 26-letter alphabet shared by every component.
//!
//! Rotors, reflectors and the plugboard all work on indices `0..=25` derived
//! from this alphabet; characters are converted exactly once on the way in
//! and once on the way out of the machine.

/// Number of letters in the alphabet. All rotor arithmetic is modulo this.
pub const LETTER_COUNT: u8 = 26;

/// The alphabet in index order: `ALPHABET[i]` is the letter for index `i`.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the alphabet index of `ch`, accepting either case.
///
/// Anything that is not an ASCII letter has no index and is reported to the
/// caller as `None` rather than being mapped or dropped silently.
#[inline]
pub fn index_of(ch: char) -> Option<u8> {
    match ch {
        'A'..='Z' => Some(ch as u8 - b'A'),
        'a'..='z' => Some(ch as u8 - b'a'),
        _ => None,
    }
}

/// Returns the uppercase letter at `index`.
///
/// `index` must be in `0..26`; every value produced inside the machine is.
#[inline]
pub fn letter(index: u8) -> char {
    debug_assert!(index < LETTER_COUNT, "letter index out of range: {index}");
    (b'A' + index) as char
}
