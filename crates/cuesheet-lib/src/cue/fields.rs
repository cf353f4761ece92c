//! Argument handlers, one per command shape. Each takes the trimmed argument
//! string and either produces a value or fails for the whole line.

use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{CueFile, FileType, Index, TrackFlag, TrackType};
use crate::time::Msf;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CATALOG_RE: Regex = Regex::new(r"^\d{13}$").unwrap();
    static ref ISRC_RE: Regex = Regex::new(r"^[A-Z0-9]{12}$").unwrap();
}

/// Strips surrounding quotes and collapses `""` escapes. Unquoted input is
/// returned as is.
pub fn parse_text(args: &str) -> String {
    match args
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => args.to_string(),
    }
}

/// Inverse of [`parse_text`].
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn parse_catalog(args: &str) -> CueResult<String> {
    if !CATALOG_RE.is_match(args) {
        return Err(CueError::InvalidCatalog(args.to_string()));
    }

    Ok(args.to_string())
}

pub fn is_valid_isrc(isrc: &str) -> bool {
    ISRC_RE.is_match(isrc)
}

pub fn parse_track(args: &str) -> CueResult<(u8, TrackType)> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [number, mode] = parts[..] else {
        return Err(CueError::InvalidArguments("TRACK", "<number> <mode>"));
    };

    let number = match parse_number(number) {
        Some(n) if (1..=99).contains(&n) => n,
        _ => return Err(CueError::InvalidTrackNumber(number.to_string())),
    };

    Ok((number, mode.parse()?))
}

pub fn parse_index(args: &str) -> CueResult<Index> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [number, position] = parts[..] else {
        return Err(CueError::InvalidArguments("INDEX", "<number> <mm:ss:ff>"));
    };

    let number = match parse_number(number) {
        Some(n) if n <= 99 => n,
        _ => return Err(CueError::InvalidIndexNumber(number.to_string())),
    };

    Ok(Index {
        number,
        position: position.parse()?,
    })
}

/// Plain ASCII digits only, no sign.
fn parse_number(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    token.parse().ok()
}

pub fn parse_gap(command: &'static str, args: &str) -> CueResult<Msf> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [length] = parts[..] else {
        return Err(CueError::InvalidArguments(command, "<mm:ss:ff>"));
    };

    Ok(length.parse()?)
}

pub fn parse_flags(args: &str) -> CueResult<Vec<TrackFlag>> {
    let flags = args
        .split_whitespace()
        .map(str::parse)
        .collect::<CueResult<Vec<TrackFlag>>>()?;

    if flags.is_empty() {
        return Err(CueError::InvalidArguments("FLAGS", "one or more of PRE DCP 4CH SCMS"));
    }

    Ok(flags)
}

/// `FILE "name with spaces.wav" WAVE`, `FILE name.bin BINARY` or `FILE name.wav`.
pub fn parse_file(args: &str) -> CueResult<CueFile> {
    let (filename, rest) = if let Some(quoted) = args.strip_prefix('"') {
        let end = closing_quote(quoted)
            .ok_or_else(|| CueError::InvalidQuotedString(args.to_string()))?;
        (quoted[..end].replace("\"\"", "\""), quoted[end + 1..].trim())
    } else {
        match args.rsplit_once(char::is_whitespace) {
            Some((name, file_type)) => (name.trim_end().to_string(), file_type.trim()),
            None => (args.to_string(), ""),
        }
    };

    let filename = normalize_filename(&filename);
    if filename.is_empty() {
        return Err(CueError::InvalidArguments("FILE", "<filename> [type]"));
    }

    let file_type = match rest {
        "" => None,
        token => Some(token.parse::<FileType>()?),
    };

    Ok(CueFile {
        filename,
        file_type,
    })
}

/// Byte offset of the quote closing a string whose opening quote was already
/// consumed, skipping `""` escapes.
fn closing_quote(quoted: &str) -> Option<usize> {
    let bytes = quoted.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'"' {
            if bytes.get(i + 1) == Some(&b'"') {
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }

    None
}

/// Keeps only the last path segment, for both `/` and `\` separators.
pub fn normalize_filename(filename: &str) -> String {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim()
        .to_string()
}
