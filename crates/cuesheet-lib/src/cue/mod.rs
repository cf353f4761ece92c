use crate::cue::command::{Command, CommandLine, tokenize};
use crate::cue::context::ParseContext;
use crate::cue::diagnostic::{Diagnostics, ParseResult};
use crate::cue::error::{CueError, CueResult};
use crate::cue::models::Track;
use log::{debug, trace};

pub mod command;
mod context;
pub mod diagnostic;
pub mod error;
pub mod fields;
pub mod models;
pub mod writer;

/// What a successfully applied line asks the caller to record.
#[derive(Debug, PartialEq, Eq)]
enum Applied {
    Done,
    Warning(String),
}

/// Parses CUE text into a sheet plus line-tagged diagnostics.
///
/// Every line is processed even after a failure; the sheet is only returned
/// when no line produced an error.
pub fn parse(text: &str) -> ParseResult {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut ctx = ParseContext::default();
    let mut diagnostics = Diagnostics::default();
    let mut line_count = 0;

    for (idx, raw_line) in text.lines().enumerate() {
        line_count = idx + 1;

        let Some(CommandLine { command, args }) = tokenize(raw_line) else {
            continue;
        };

        trace!("Line {line_count}: {command:?} {args:?}");

        match apply(&mut ctx, &command, args) {
            Ok(Applied::Done) => {}
            Ok(Applied::Warning(message)) => diagnostics.warning(line_count, message, raw_line),
            Err(err) => diagnostics.error(line_count, err.to_string(), raw_line),
        }
    }

    let sheet = ctx.finish();
    let result = diagnostics.into_result(sheet);

    debug!(
        "Parsed {line_count} lines: {} tracks, {} errors, {} warnings",
        result.sheet.as_ref().map_or(0, |s| s.tracks.len()),
        result.errors.len(),
        result.warnings.len()
    );

    result
}

fn apply(ctx: &mut ParseContext, command: &Command, args: &str) -> CueResult<Applied> {
    match command {
        Command::Rem => ctx.remarks_mut().push(args.to_string()),
        Command::Catalog => ctx.global_mut().catalog = Some(fields::parse_catalog(args)?),
        Command::CdTextFile => ctx.global_mut().cd_text_file = Some(fields::parse_text(args)),
        Command::CdText(field) => {
            *ctx.cd_text_mut().field_mut(*field) = Some(fields::parse_text(args));
        }
        Command::DiscId => ctx.global_mut().disc_id = Some(fields::parse_text(args)),
        Command::Genre => ctx.global_mut().genre = Some(fields::parse_text(args)),
        Command::UpcEan => ctx.global_mut().upc_ean = Some(fields::parse_text(args)),
        Command::File => {
            let file = fields::parse_file(args)?;
            match ctx.open_track_mut() {
                Some(track) => track.file = Some(file),
                None => {
                    return Ok(Applied::Warning(format!(
                        "FILE \"{}\" outside a TRACK is ignored, use a FILE command inside each TRACK",
                        file.filename
                    )));
                }
            }
        }
        Command::Track => {
            let (number, track_type) = fields::parse_track(args)?;
            if ctx.is_track_number_used(number) {
                return Err(CueError::DuplicateTrackNumber(number));
            }
            ctx.start_track(Track::new(number, track_type));
        }
        Command::Index => {
            let track = ctx.require_track("INDEX")?;
            let index = fields::parse_index(args)?;
            track.indices.push(index);
        }
        Command::Pregap => {
            let track = ctx.require_track("PREGAP")?;
            track.pregap = Some(fields::parse_gap("PREGAP", args)?);
        }
        Command::Postgap => {
            let track = ctx.require_track("POSTGAP")?;
            track.postgap = Some(fields::parse_gap("POSTGAP", args)?);
        }
        Command::Flags => {
            let track = ctx.require_track("FLAGS")?;
            track.flags = fields::parse_flags(args)?;
        }
        Command::Isrc => {
            let track = ctx.require_track("ISRC")?;
            track.isrc = Some(args.to_string());
            if !fields::is_valid_isrc(args) {
                return Ok(Applied::Warning(format!(
                    "ISRC should be 12 uppercase letters or digits: {args}"
                )));
            }
        }
        Command::Unknown(keyword) => {
            return Ok(Applied::Warning(format!("Unknown command: {keyword}")));
        }
    }

    Ok(Applied::Done)
}
