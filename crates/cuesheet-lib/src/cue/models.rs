use crate::cue::error::CueError;
use crate::time::Msf;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A parsed CUE sheet: album-level fields plus tracks in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueSheet {
    pub global: GlobalInfo,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cd_text_file: Option<String>,
    #[serde(flatten)]
    pub cd_text: CdText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc_ean: Option<String>,
}

/// CD-TEXT fields that may appear both globally and per track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songwriter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arranger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CdText {
    pub fn field_mut(&mut self, field: CdTextField) -> &mut Option<String> {
        match field {
            CdTextField::Title => &mut self.title,
            CdTextField::Performer => &mut self.performer,
            CdTextField::Songwriter => &mut self.songwriter,
            CdTextField::Composer => &mut self.composer,
            CdTextField::Arranger => &mut self.arranger,
            CdTextField::Message => &mut self.message,
        }
    }

    /// Present fields in serialization order.
    pub fn entries(&self) -> impl Iterator<Item = (CdTextField, &str)> {
        [
            (CdTextField::Title, &self.title),
            (CdTextField::Performer, &self.performer),
            (CdTextField::Songwriter, &self.songwriter),
            (CdTextField::Composer, &self.composer),
            (CdTextField::Arranger, &self.arranger),
            (CdTextField::Message, &self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdTextField {
    Title,
    Performer,
    Songwriter,
    Composer,
    Arranger,
    Message,
}

impl CdTextField {
    pub fn keyword(&self) -> &'static str {
        match self {
            CdTextField::Title => "TITLE",
            CdTextField::Performer => "PERFORMER",
            CdTextField::Songwriter => "SONGWRITER",
            CdTextField::Composer => "COMPOSER",
            CdTextField::Arranger => "ARRANGER",
            CdTextField::Message => "MESSAGE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueFile {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub number: u8,
    pub track_type: TrackType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<CueFile>,
    #[serde(flatten)]
    pub cd_text: CdText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<TrackFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pregap: Option<Msf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postgap: Option<Msf>,
    #[serde(default)]
    pub indices: Vec<Index>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remarks: Vec<String>,
}

impl Track {
    pub fn new(number: u8, track_type: TrackType) -> Self {
        Self {
            number,
            track_type,
            file: None,
            cd_text: CdText::default(),
            isrc: None,
            flags: Vec::new(),
            pregap: None,
            postgap: None,
            indices: Vec::new(),
            remarks: Vec::new(),
        }
    }

    pub fn index(&self, number: u8) -> Option<&Index> {
        self.indices.iter().find(|i| i.number == number)
    }

    /// Indices ordered by index number, the order they are written in.
    pub fn sorted_indices(&self) -> Vec<&Index> {
        let mut indices: Vec<&Index> = self.indices.iter().collect();
        indices.sort_by_key(|i| i.number);
        indices
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub number: u8,
    pub position: Msf,
}

/// Generates the keyword enums: case-insensitive `FromStr`, canonical `Display`.
macro_rules! keyword_enum {
    ($name:ident, $err:ident, { $($variant:ident => $keyword:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $keyword)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = CueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($keyword) {
                        return Ok($name::$variant);
                    }
                )+
                Err(CueError::$err(s.to_string()))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum!(TrackType, InvalidTrackType, {
    Audio => "AUDIO",
    CdG => "CDG",
    Mode1_2048 => "MODE1/2048",
    Mode1_2352 => "MODE1/2352",
    Mode2_2336 => "MODE2/2336",
    Mode2_2352 => "MODE2/2352",
    CdI2336 => "CDI/2336",
    CdI2352 => "CDI/2352",
});

keyword_enum!(FileType, InvalidFileType, {
    Binary => "BINARY",
    Motorola => "MOTOROLA",
    Aiff => "AIFF",
    Wave => "WAVE",
    Mp3 => "MP3",
});

keyword_enum!(TrackFlag, InvalidFlag, {
    Pre => "PRE",
    Dcp => "DCP",
    FourChannel => "4CH",
    Scms => "SCMS",
});
