//! Flat `HH:MM:SS performer - title` listing, the format used for DJ mix
//! track lists.

use crate::cue::models::{CueSheet, Track};
use crate::time::Hms;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub track_number: u8,
    pub start: Hms,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    pub title: String,
}

impl TimelineEntry {
    pub fn render(&self) -> String {
        match &self.performer {
            Some(performer) => format!("{} {} - {}", self.start, performer, self.title),
            None => format!("{} {}", self.start, self.title),
        }
    }
}

/// One entry per track that has an index. The start is INDEX 01 when
/// present, otherwise the track's first index.
pub fn entries(sheet: &CueSheet) -> Vec<TimelineEntry> {
    sheet
        .tracks
        .iter()
        .filter_map(|track| {
            let start = track.index(1).or_else(|| track.indices.first())?;
            Some(TimelineEntry {
                track_number: track.number,
                start: start.position.to_hms(),
                performer: track
                    .cd_text
                    .performer
                    .clone()
                    .or_else(|| sheet.global.cd_text.performer.clone()),
                title: title_of(track),
            })
        })
        .collect()
}

pub fn render(sheet: &CueSheet) -> String {
    entries(sheet)
        .iter()
        .map(|entry| entry.render() + "\n")
        .collect()
}

fn title_of(track: &Track) -> String {
    match &track.cd_text.title {
        Some(title) => title.clone(),
        None => format!("Track {:02}", track.number),
    }
}
