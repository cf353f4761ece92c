//! CUE sheet parsing and writing.
//!
//! [`parse`] turns CUE text into a [`CueSheet`] plus line-tagged diagnostics;
//! [`serialize`], [`format`] and [`minimal`] turn a sheet back into text.

pub mod cue;
pub mod time;
pub mod timeline;

pub use cue::diagnostic::{Diagnostic, ParseResult};
pub use cue::models::{
    CdText, CdTextField, CueFile, CueSheet, FileType, GlobalInfo, Index, Track, TrackFlag,
    TrackType,
};
pub use cue::parse;
pub use cue::writer::{FormatOptions, format, minimal, serialize};
pub use time::{FRAMES_PER_SECOND, Hms, Msf};
