use crate::cue::fields::quote;
use crate::cue::models::{CueFile, CueSheet, GlobalInfo, Track};
use log::debug;

mod options;

pub use options::FormatOptions;

const TRACK_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

struct CueWriter<'a> {
    options: &'a FormatOptions,
    out: String,
}

impl<'a> CueWriter<'a> {
    fn new(options: &'a FormatOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    fn line(&mut self, depth: usize, line: &str) {
        for _ in 0..depth {
            self.out.push_str(&self.options.indent_unit);
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn global(&mut self, line: &str) {
        self.line(0, line);
    }

    fn track(&mut self, line: &str) {
        self.line(TRACK_DEPTH, line);
    }

    fn field(&mut self, line: &str) {
        self.line(FIELD_DEPTH, line);
    }

    fn track_separator(&mut self) {
        if self.options.track_spacing && !self.out.is_empty() {
            self.out.push('\n');
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Full CUE text with the default tab layout.
pub fn serialize(sheet: &CueSheet) -> String {
    format(sheet, &FormatOptions::default())
}

/// Full CUE text with caller-chosen indentation and track spacing.
pub fn format(sheet: &CueSheet, options: &FormatOptions) -> String {
    let mut writer = CueWriter::new(options);
    write_global(&mut writer, &sheet.global);

    // FILE is only repeated when it changes, so tracks cut from one file
    // share a single FILE line.
    sheet.tracks.iter().fold(None, |last_filename, track| {
        writer.track_separator();
        write_track(&mut writer, track, last_filename)
    });

    debug!("Serialized {} tracks", sheet.tracks.len());
    writer.finish()
}

/// Title, performer, and per track only TRACK, TITLE, FILE and INDEX 01.
pub fn minimal(sheet: &CueSheet) -> String {
    let options = FormatOptions::default();
    let mut writer = CueWriter::new(&options);

    if let Some(title) = &sheet.global.cd_text.title {
        writer.global(&format!("TITLE {}", quote(title)));
    }
    if let Some(performer) = &sheet.global.cd_text.performer {
        writer.global(&format!("PERFORMER {}", quote(performer)));
    }

    for track in &sheet.tracks {
        writer.track(&track_line(track));
        if let Some(title) = &track.cd_text.title {
            writer.field(&format!("TITLE {}", quote(title)));
        }
        if let Some(file) = &track.file {
            writer.field(&file_line(file));
        }
        if let Some(index) = track.index(1) {
            writer.field(&format!("INDEX 01 {}", index.position));
        }
    }

    debug!("Serialized {} tracks (minimal)", sheet.tracks.len());
    writer.finish()
}

fn write_global(writer: &mut CueWriter, global: &GlobalInfo) {
    for remark in &global.remarks {
        writer.global(&remark_line(remark));
    }
    if let Some(catalog) = &global.catalog {
        writer.global(&format!("CATALOG {catalog}"));
    }
    if let Some(cd_text_file) = &global.cd_text_file {
        writer.global(&format!("CDTEXTFILE {}", quote(cd_text_file)));
    }
    for (field, value) in global.cd_text.entries() {
        writer.global(&format!("{} {}", field.keyword(), quote(value)));
    }
    if let Some(disc_id) = &global.disc_id {
        writer.global(&format!("DISC_ID {}", quote(disc_id)));
    }
    if let Some(genre) = &global.genre {
        writer.global(&format!("GENRE {}", quote(genre)));
    }
    if let Some(upc_ean) = &global.upc_ean {
        writer.global(&format!("UPC_EAN {}", quote(upc_ean)));
    }
}

/// Returns the filename that is current after this track.
fn write_track<'s>(
    writer: &mut CueWriter,
    track: &'s Track,
    last_filename: Option<&'s str>,
) -> Option<&'s str> {
    writer.track(&track_line(track));

    for (field, value) in track.cd_text.entries() {
        writer.field(&format!("{} {}", field.keyword(), quote(value)));
    }
    if let Some(isrc) = &track.isrc {
        writer.field(&format!("ISRC {isrc}"));
    }

    let mut current_filename = last_filename;
    if let Some(file) = &track.file {
        if last_filename != Some(file.filename.as_str()) {
            writer.field(&file_line(file));
        }
        current_filename = Some(file.filename.as_str());
    }

    if !track.flags.is_empty() {
        let flags: Vec<&str> = track.flags.iter().map(|f| f.as_str()).collect();
        writer.field(&format!("FLAGS {}", flags.join(" ")));
    }
    if let Some(pregap) = &track.pregap {
        writer.field(&format!("PREGAP {pregap}"));
    }
    for index in track.sorted_indices() {
        writer.field(&format!("INDEX {:02} {}", index.number, index.position));
    }
    if let Some(postgap) = &track.postgap {
        writer.field(&format!("POSTGAP {postgap}"));
    }
    for remark in &track.remarks {
        writer.field(&remark_line(remark));
    }

    current_filename
}

fn track_line(track: &Track) -> String {
    format!("TRACK {:02} {}", track.number, track.track_type)
}

fn file_line(file: &CueFile) -> String {
    match file.file_type {
        Some(file_type) => format!("FILE {} {file_type}", quote(&file.filename)),
        None => format!("FILE {}", quote(&file.filename)),
    }
}

fn remark_line(remark: &str) -> String {
    if remark.is_empty() {
        "REM".to_string()
    } else {
        format!("REM {remark}")
    }
}
