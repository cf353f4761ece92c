use crate::time::error::{TimeError, TimeResult};
use crate::time::{format_triple, parse_triple};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// Largest second count a valid [`Hms`] may hold.
const MAX_SECONDS: u64 = u32::MAX as u64;

/// An `hours:minutes:seconds` duration with whole-second precision.
#[derive(Debug, Clone, Copy, Default, Eq, Serialize, Deserialize)]
#[serde(try_from = "HmsFields")]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

#[derive(Deserialize)]
struct HmsFields {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl TryFrom<HmsFields> for Hms {
    type Error = TimeError;

    fn try_from(fields: HmsFields) -> Result<Self, Self::Error> {
        Hms::new(fields.hours, fields.minutes, fields.seconds)
    }
}

impl Hms {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> TimeResult<Self> {
        Self::validated(hours, minutes, seconds, || {
            format_triple([hours, minutes, seconds], true)
        })
    }

    fn validated(
        hours: u32,
        minutes: u32,
        seconds: u32,
        raw: impl Fn() -> String,
    ) -> TimeResult<Self> {
        if minutes >= 60 {
            return Err(TimeError::MinutesOutOfRange(raw()));
        }
        if seconds >= 60 {
            return Err(TimeError::SecondsOutOfRange(raw()));
        }

        let hms = Self {
            hours,
            minutes,
            seconds,
        };
        if hms.total_seconds() > MAX_SECONDS {
            return Err(TimeError::TooLarge(raw()));
        }

        Ok(hms)
    }

    pub fn from_seconds(total: u32) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    /// Saturates at `u32::MAX` for values assembled by hand past the valid range.
    pub fn to_seconds(&self) -> u32 {
        self.total_seconds().min(MAX_SECONDS) as u32
    }

    pub fn checked_add(self, other: Self) -> TimeResult<Self> {
        let total = self.total_seconds() + other.total_seconds();
        u32::try_from(total)
            .map(Self::from_seconds)
            .map_err(|_| TimeError::Overflow {
                lhs: self.to_string(),
                rhs: other.to_string(),
            })
    }

    pub fn checked_sub(self, other: Self) -> TimeResult<Self> {
        let total = self
            .total_seconds()
            .checked_sub(other.total_seconds())
            .ok_or_else(|| TimeError::Underflow {
                lhs: self.to_string(),
                rhs: other.to_string(),
            })?;

        u32::try_from(total)
            .map(Self::from_seconds)
            .map_err(|_| TimeError::TooLarge(self.to_string()))
    }

    pub fn format(&self, zero_pad: bool) -> String {
        format_triple([self.hours, self.minutes, self.seconds], zero_pad)
    }
}

impl FromStr for Hms {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [hours, minutes, seconds] = parse_triple(s)?;
        Self::validated(hours, minutes, seconds, || s.to_string())
    }
}

impl Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(true))
    }
}

impl PartialEq for Hms {
    fn eq(&self, other: &Self) -> bool {
        self.total_seconds() == other.total_seconds()
    }
}

impl PartialOrd for Hms {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hms {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_seconds().cmp(&other.total_seconds())
    }
}
