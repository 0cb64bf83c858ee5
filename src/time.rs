use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CalcError;
use crate::field;

pub const MINUTES_PER_DAY: u16 = 1440;
pub const MAX_HOURS: u8 = 23;
pub const MAX_MINUTES: u8 = 59;

/// A clock reading on a 24-hour dial, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Returns `None` when either component is outside its dial.
    pub fn new(hours: u8, minutes: u8) -> Option<Self> {
        if hours > MAX_HOURS || minutes > MAX_MINUTES {
            return None;
        }
        Some(Self {
            minutes: u16::from(hours) * 60 + u16::from(minutes),
        })
    }

    pub fn from_total_minutes(total: u16) -> Self {
        Self {
            minutes: total % MINUTES_PER_DAY,
        }
    }

    pub fn total_minutes(self) -> u16 {
        self.minutes
    }

    pub fn hours(self) -> u8 {
        // Always < 24.
        (self.minutes / 60) as u8
    }

    pub fn minutes(self) -> u8 {
        (self.minutes % 60) as u8
    }

    pub fn apply(self, op: Operation, other: Self) -> Self {
        match op {
            Operation::Add => self.add(other),
            Operation::Subtract => self.subtract(other),
        }
    }

    /// Wraps silently past midnight.
    pub fn add(self, other: Self) -> Self {
        Self::from_total_minutes((self.total_minutes() + other.total_minutes()) % MINUTES_PER_DAY)
    }

    /// When `self` is earlier than `other`, `self` is taken to be on the following day.
    pub fn subtract(self, other: Self) -> Self {
        Self::from_total_minutes(wrapping_diff(self.total_minutes(), other.total_minutes()))
    }
}

fn wrapping_diff(current: u16, initial: u16) -> u16 {
    if current >= initial {
        current - initial
    } else {
        current + MINUTES_PER_DAY - initial
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for TimeOfDay {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| CalcError::InvalidArg(format!("expected HH:MM, got {s:?}")))?;
        let hours = field::validate(hours, MAX_HOURS).ok_or(CalcError::InvalidInput)?;
        let minutes = field::validate(minutes, MAX_MINUTES).ok_or(CalcError::InvalidInput)?;
        Self::new(hours, minutes).ok_or(CalcError::InvalidInput)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
