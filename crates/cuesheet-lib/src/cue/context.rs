use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{CdText, CueSheet, GlobalInfo, Track};
use log::trace;

/// Mutable state of one parse: the album record, committed tracks, and the
/// track currently receiving track-scoped commands.
#[derive(Debug, Default)]
pub(crate) struct ParseContext {
    global: GlobalInfo,
    tracks: Vec<Track>,
    open_track: Option<Track>,
}

impl ParseContext {
    pub fn global_mut(&mut self) -> &mut GlobalInfo {
        &mut self.global
    }

    pub fn open_track_mut(&mut self) -> Option<&mut Track> {
        self.open_track.as_mut()
    }

    /// The open track, or an error naming the command that needed one.
    pub fn require_track(&mut self, command: &'static str) -> CueResult<&mut Track> {
        self.open_track
            .as_mut()
            .ok_or(CueError::OutsideTrack(command))
    }

    /// CD-TEXT target: the open track if any, otherwise the album.
    pub fn cd_text_mut(&mut self) -> &mut CdText {
        match self.open_track.as_mut() {
            Some(track) => &mut track.cd_text,
            None => &mut self.global.cd_text,
        }
    }

    pub fn remarks_mut(&mut self) -> &mut Vec<String> {
        match self.open_track.as_mut() {
            Some(track) => &mut track.remarks,
            None => &mut self.global.remarks,
        }
    }

    pub fn is_track_number_used(&self, number: u8) -> bool {
        self.tracks
            .iter()
            .chain(self.open_track.as_ref())
            .any(|t| t.number == number)
    }

    /// Commits the open track, if any, and makes `track` the open one.
    pub fn start_track(&mut self, track: Track) {
        self.commit_open_track();
        trace!("Opening track {:02} ({})", track.number, track.track_type);
        self.open_track = Some(track);
    }

    fn commit_open_track(&mut self) {
        if let Some(track) = self.open_track.take() {
            trace!("Committing track {:02}", track.number);
            self.tracks.push(track);
        }
    }

    pub fn finish(mut self) -> CueSheet {
        self.commit_open_track();
        CueSheet {
            global: self.global,
            tracks: self.tracks,
        }
    }
}
