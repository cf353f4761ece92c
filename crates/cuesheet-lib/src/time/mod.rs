//! Disc time values.
//!
//! CUE timing fields (INDEX, PREGAP, POSTGAP) are always [`Msf`]. [`Hms`] only
//! exists for views that want wall-clock style hours, and is reached through
//! an explicit conversion, never by reading an MSF triple as HMS.

use crate::time::error::{TimeError, TimeResult};

pub mod error;
mod hms;
mod msf;

pub use hms::Hms;
pub use msf::{FRAMES_PER_SECOND, Msf};

/// Splits `h:m:s` style input into three non-negative integers.
fn parse_triple(input: &str) -> TimeResult<[u32; 3]> {
    let parts: Vec<&str> = input.trim().split(':').collect();
    if parts.len() != 3 {
        return Err(TimeError::InvalidFormat(input.to_string()));
    }

    let mut fields = [0u32; 3];
    for (field, part) in fields.iter_mut().zip(parts) {
        if part.starts_with('-') {
            return Err(TimeError::Negative(input.to_string()));
        }
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::InvalidFormat(input.to_string()));
        }
        *field = part
            .parse()
            .map_err(|_| TimeError::InvalidFormat(input.to_string()))?;
    }

    Ok(fields)
}

fn format_triple(fields: [u32; 3], zero_pad: bool) -> String {
    let [a, b, c] = fields;
    if zero_pad {
        format!("{a:02}:{b:02}:{c:02}")
    } else {
        format!("{a}:{b}:{c}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_triple_accepts_three_numbers() {
        assert_eq!(parse_triple("01:02:03").unwrap(), [1, 2, 3]);
        assert_eq!(parse_triple(" 120:5:7 ").unwrap(), [120, 5, 7]);
    }

    #[test]
    fn parse_triple_rejects_wrong_field_count() {
        assert_eq!(
            parse_triple("01:02"),
            Err(TimeError::InvalidFormat("01:02".to_string()))
        );
        assert!(parse_triple("01:02:03:04").is_err());
        assert!(parse_triple("").is_err());
    }

    #[test]
    fn parse_triple_rejects_negative_and_garbage() {
        assert_eq!(
            parse_triple("00:-1:00"),
            Err(TimeError::Negative("00:-1:00".to_string()))
        );
        assert!(parse_triple("aa:00:00").is_err());
        assert!(parse_triple("+1:00:00").is_err());
        assert!(parse_triple("00::00").is_err());
    }

    #[test]
    fn format_triple_pads_only_when_asked() {
        assert_eq!(format_triple([1, 2, 3], true), "01:02:03");
        assert_eq!(format_triple([1, 2, 3], false), "1:2:3");
        assert_eq!(format_triple([100, 0, 0], true), "100:00:00");
    }
}
