use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;
use crate::time::{MAX_HOURS, MAX_MINUTES};

const MAX_FIELD_LEN: usize = 2;

/// One of the four text inputs of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours1,
    Minutes1,
    Hours2,
    Minutes2,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Hours1,
        Field::Minutes1,
        Field::Hours2,
        Field::Minutes2,
    ];

    pub fn max(self) -> u8 {
        match self {
            Field::Hours1 | Field::Hours2 => MAX_HOURS,
            Field::Minutes1 | Field::Minutes2 => MAX_MINUTES,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Hours1 => "h1",
            Field::Minutes1 => "m1",
            Field::Hours2 => "h2",
            Field::Minutes2 => "m2",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| CalcError::InvalidArg(format!("unknown field: {s}")))
    }
}

/// Whether a pending keystroke edit may be applied to a field.
///
/// An empty value is accepted so the field can be cleared.
pub fn accept_edit(raw: &str, max: u8) -> bool {
    if raw.len() > MAX_FIELD_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if raw.is_empty() {
        return true;
    }
    raw.parse::<u8>().is_ok_and(|value| value <= max)
}

/// Parses a field value for calculation; empty, non-numeric and out-of-range values fail.
pub fn validate(raw: &str, max: u8) -> Option<u8> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u8>().ok().filter(|value| *value <= max)
}
