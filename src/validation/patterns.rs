//! Regular expressions for field formats
//!
//! The `regex` crate has no look-around, so rules that need several
//! conditions (the password) are split into one pattern per condition.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

/// Letters joined by single spaces, apostrophes, dots or hyphens ("St. John"
/// and a closing dot as in "Jr." also pass)
pub static NAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\p{L}+(?:[ '.\-]\p{L}+|\. \p{L}+)*\.?$"));

pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$"));

/// 3 to 20 characters, starting with a letter
pub static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z][A-Za-z0-9_.]{2,19}$"));

/// Allowed password characters, at least 8 of them
pub static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z0-9@$!%*#?&]{8,}$"));
pub static PASSWORD_LETTER: LazyLock<Regex> = LazyLock::new(|| compile(r"[A-Za-z]"));
pub static PASSWORD_DIGIT: LazyLock<Regex> = LazyLock::new(|| compile(r"[0-9]"));
pub static PASSWORD_SYMBOL: LazyLock<Regex> = LazyLock::new(|| compile(r"[@$!%*#?&]"));

/// North American number: `514-555-0199`, `(514) 555 0199`, `5145550199`
pub static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\(?[0-9]{3}\)?[\-. ]?[0-9]{3}[\-. ]?[0-9]{4}$"));

pub static PHONE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{1,6}$"));

/// Health insurance number: four letters then eight digits (`ABCD 1234 5678`)
pub static MEDICAL_ID: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z]{4} ?[0-9]{4} ?[0-9]{4}$"));

/// Canadian postal code (`H2X 1Y4`); D, F, I, O, Q and U never appear, W and Z not first
pub static POSTAL_CODE_CAN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z][ \-]?[0-9][ABCEGHJ-NPRSTV-Z][0-9]$")
});

/// U.S. ZIP or ZIP+4
pub static POSTAL_CODE_USA: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[0-9]{5}(?:-[0-9]{4})?$"));

/// 24h clock `HH:MM`
pub static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$"));
