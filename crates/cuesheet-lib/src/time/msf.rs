use crate::time::error::{TimeError, TimeResult};
use crate::time::{Hms, format_triple, parse_triple};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// Frames per second on optical media (sector rate).
pub const FRAMES_PER_SECOND: u32 = 75;

const FRAMES_PER_MINUTE: u32 = 60 * FRAMES_PER_SECOND;

/// Largest frame count a valid [`Msf`] may hold.
const MAX_FRAMES: u64 = u32::MAX as u64;

// Absorbs float error when scaling seconds back to frames, e.g. 2.44 * 75.
const FRAME_EPSILON: f64 = 1e-6;

/// A `minutes:seconds:frames` position, 75 frames per second.
///
/// Values built through [`Msf::new`], parsing or deserialization always fit
/// in a `u32` frame count.
#[derive(Debug, Clone, Copy, Default, Eq, Serialize, Deserialize)]
#[serde(try_from = "MsfFields")]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

#[derive(Deserialize)]
struct MsfFields {
    minutes: u32,
    seconds: u32,
    frames: u32,
}

impl TryFrom<MsfFields> for Msf {
    type Error = TimeError;

    fn try_from(fields: MsfFields) -> Result<Self, Self::Error> {
        Msf::new(fields.minutes, fields.seconds, fields.frames)
    }
}

impl Msf {
    pub fn new(minutes: u32, seconds: u32, frames: u32) -> TimeResult<Self> {
        Self::validated(minutes, seconds, frames, || {
            format_triple([minutes, seconds, frames], true)
        })
    }

    fn validated(
        minutes: u32,
        seconds: u32,
        frames: u32,
        raw: impl Fn() -> String,
    ) -> TimeResult<Self> {
        if seconds >= 60 {
            return Err(TimeError::SecondsOutOfRange(raw()));
        }
        if frames >= FRAMES_PER_SECOND {
            return Err(TimeError::FramesOutOfRange(raw()));
        }

        let msf = Self {
            minutes,
            seconds,
            frames,
        };
        if msf.total_frames() > MAX_FRAMES {
            return Err(TimeError::TooLarge(raw()));
        }

        Ok(msf)
    }

    pub fn from_frames(total: u32) -> Self {
        Self {
            minutes: total / FRAMES_PER_MINUTE,
            seconds: (total % FRAMES_PER_MINUTE) / FRAMES_PER_SECOND,
            frames: total % FRAMES_PER_SECOND,
        }
    }

    fn total_frames(&self) -> u64 {
        self.minutes as u64 * FRAMES_PER_MINUTE as u64
            + self.seconds as u64 * FRAMES_PER_SECOND as u64
            + self.frames as u64
    }

    /// Saturates at `u32::MAX` for values assembled by hand past the valid range.
    pub fn to_frames(&self) -> u32 {
        self.total_frames().min(MAX_FRAMES) as u32
    }

    pub fn to_seconds(&self) -> f64 {
        self.minutes as f64 * 60.0
            + self.seconds as f64
            + self.frames as f64 / FRAMES_PER_SECOND as f64
    }

    /// Truncates anything finer than one frame.
    pub fn from_seconds(seconds: f64) -> TimeResult<Self> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(TimeError::InvalidSeconds(seconds.to_string()));
        }

        let frames = (seconds * FRAMES_PER_SECOND as f64 + FRAME_EPSILON).floor();
        if frames > MAX_FRAMES as f64 {
            return Err(TimeError::InvalidSeconds(seconds.to_string()));
        }

        Ok(Self::from_frames(frames as u32))
    }

    /// Whole seconds as hours/minutes/seconds, dropping the frame remainder.
    pub fn to_hms(&self) -> Hms {
        Hms::from_seconds(self.to_frames() / FRAMES_PER_SECOND)
    }

    pub fn checked_add(self, other: Self) -> TimeResult<Self> {
        let total = self.total_frames() + other.total_frames();
        u32::try_from(total)
            .map(Self::from_frames)
            .map_err(|_| TimeError::Overflow {
                lhs: self.to_string(),
                rhs: other.to_string(),
            })
    }

    pub fn checked_sub(self, other: Self) -> TimeResult<Self> {
        let total = self
            .total_frames()
            .checked_sub(other.total_frames())
            .ok_or_else(|| TimeError::Underflow {
                lhs: self.to_string(),
                rhs: other.to_string(),
            })?;

        u32::try_from(total)
            .map(Self::from_frames)
            .map_err(|_| TimeError::TooLarge(self.to_string()))
    }

    pub fn format(&self, zero_pad: bool) -> String {
        format_triple([self.minutes, self.seconds, self.frames], zero_pad)
    }
}

impl FromStr for Msf {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [minutes, seconds, frames] = parse_triple(s)?;
        Self::validated(minutes, seconds, frames, || s.to_string())
    }
}

impl Display for Msf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(true))
    }
}

impl PartialEq for Msf {
    fn eq(&self, other: &Self) -> bool {
        self.total_frames() == other.total_frames()
    }
}

impl PartialOrd for Msf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Msf {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_frames().cmp(&other.total_frames())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msf(minutes: u32, seconds: u32, frames: u32) -> Msf {
        Msf::new(minutes, seconds, frames).unwrap()
    }

    #[test]
    fn parses_and_formats_canonically() {
        let time: Msf = "1:2:3".parse().unwrap();
        assert_eq!(time, msf(1, 2, 3));
        assert_eq!(time.to_string(), "01:02:03");
        assert_eq!(time.format(false), "1:2:3");
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            "00:60:00".parse::<Msf>(),
            Err(TimeError::SecondsOutOfRange("00:60:00".to_string()))
        );
        assert_eq!(
            "00:00:75".parse::<Msf>(),
            Err(TimeError::FramesOutOfRange("00:00:75".to_string()))
        );
        assert!(Msf::new(0, 0, 75).is_err());
        assert!("99:59:74".parse::<Msf>().is_ok());
    }

    #[test]
    fn minutes_may_exceed_an_hour() {
        let time: Msf = "120:00:00".parse().unwrap();
        assert_eq!(time.to_frames(), 120 * 60 * 75);
    }

    #[test]
    fn frame_conversion_round_trips() {
        let time = msf(3, 25, 61);
        assert_eq!(time.to_frames(), 3 * 4500 + 25 * 75 + 61);
        assert_eq!(Msf::from_frames(time.to_frames()), time);
        assert_eq!(Msf::from_frames(0), Msf::default());
    }

    #[test]
    fn seconds_conversion_round_trips() {
        for time in [msf(0, 2, 33), msf(1, 30, 45), msf(0, 0, 1), msf(74, 59, 74)] {
            assert_eq!(Msf::from_seconds(time.to_seconds()).unwrap(), time);
        }
        assert_eq!(msf(1, 30, 0).to_seconds(), 90.0);
    }

    #[test]
    fn from_seconds_truncates_sub_frame_values() {
        assert_eq!(Msf::from_seconds(1.0 / 150.0).unwrap(), msf(0, 0, 0));
        assert_eq!(Msf::from_seconds(61.5).unwrap(), msf(1, 1, 37));
        assert!(Msf::from_seconds(-1.0).is_err());
        assert!(Msf::from_seconds(f64::NAN).is_err());
    }

    #[test]
    fn arithmetic_works_on_frame_counts() {
        let sum = msf(0, 59, 74).checked_add(msf(0, 0, 1)).unwrap();
        assert_eq!(sum, msf(1, 0, 0));

        let diff = msf(1, 0, 0).checked_sub(msf(0, 0, 1)).unwrap();
        assert_eq!(diff, msf(0, 59, 74));
    }

    #[test]
    fn subtraction_below_zero_is_an_error() {
        let err = msf(0, 0, 1).checked_sub(msf(0, 0, 2)).unwrap_err();
        assert_eq!(
            err,
            TimeError::Underflow {
                lhs: "00:00:01".to_string(),
                rhs: "00:00:02".to_string(),
            }
        );
    }

    #[test]
    fn ordering_follows_frame_count() {
        assert!(msf(0, 59, 74) < msf(1, 0, 0));
        assert!(msf(2, 0, 0) > msf(1, 59, 74));
        assert_eq!(msf(1, 0, 0).cmp(&msf(1, 0, 0)), Ordering::Equal);
    }

    #[test]
    fn to_hms_drops_frames() {
        let hms = msf(75, 30, 74).to_hms();
        assert_eq!(hms, Hms::new(1, 15, 30).unwrap());
    }

    #[test]
    fn rejects_minutes_past_the_frame_range() {
        let largest = Msf::from_frames(u32::MAX);
        assert_eq!(largest.to_string().parse::<Msf>().unwrap(), largest);

        assert_eq!(
            "1000000:00:00".parse::<Msf>(),
            Err(TimeError::TooLarge("1000000:00:00".to_string()))
        );
        assert!(Msf::new(largest.minutes, 59, 74).is_err());
        assert!(Msf::new(u32::MAX, 0, 0).is_err());
    }

    #[test]
    fn addition_past_the_frame_range_is_an_error() {
        let largest = Msf::from_frames(u32::MAX);
        assert_eq!(largest.checked_add(Msf::default()).unwrap(), largest);
        assert_eq!(
            largest.checked_add(msf(0, 0, 1)),
            Err(TimeError::Overflow {
                lhs: largest.to_string(),
                rhs: "00:00:01".to_string(),
            })
        );
    }

    #[test]
    fn hand_built_values_compare_without_overflow() {
        let huge = Msf {
            minutes: u32::MAX,
            seconds: 0,
            frames: 0,
        };
        assert!(huge > Msf::from_frames(u32::MAX));
        assert_eq!(huge.to_frames(), u32::MAX);
        assert!(huge.checked_add(msf(0, 0, 1)).is_err());
    }

    #[test]
    fn deserialization_checks_ranges() {
        let time: Msf =
            serde_json::from_str(r#"{"minutes":1,"seconds":2,"frames":3}"#).unwrap();
        assert_eq!(time, msf(1, 2, 3));

        assert!(
            serde_json::from_str::<Msf>(r#"{"minutes":0,"seconds":99,"frames":200}"#).is_err()
        );
        assert!(
            serde_json::from_str::<Msf>(r#"{"minutes":4294967295,"seconds":0,"frames":0}"#)
                .is_err()
        );
    }
}
