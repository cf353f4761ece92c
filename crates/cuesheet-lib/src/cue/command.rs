use crate::cue::models::CdTextField;

/// Every command keyword the parser understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Rem,
    Catalog,
    CdTextFile,
    CdText(CdTextField),
    DiscId,
    Genre,
    UpcEan,
    File,
    Track,
    Index,
    Pregap,
    Postgap,
    Flags,
    Isrc,
    Unknown(String),
}

impl Command {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_uppercase().as_str() {
            "REM" => Command::Rem,
            "CATALOG" => Command::Catalog,
            "CDTEXTFILE" => Command::CdTextFile,
            "TITLE" => Command::CdText(CdTextField::Title),
            "PERFORMER" => Command::CdText(CdTextField::Performer),
            "SONGWRITER" => Command::CdText(CdTextField::Songwriter),
            "COMPOSER" => Command::CdText(CdTextField::Composer),
            "ARRANGER" => Command::CdText(CdTextField::Arranger),
            "MESSAGE" => Command::CdText(CdTextField::Message),
            "DISC_ID" => Command::DiscId,
            "GENRE" => Command::Genre,
            "UPC_EAN" => Command::UpcEan,
            "FILE" => Command::File,
            "TRACK" => Command::Track,
            "INDEX" => Command::Index,
            "PREGAP" => Command::Pregap,
            "POSTGAP" => Command::Postgap,
            "FLAGS" => Command::Flags,
            "ISRC" => Command::Isrc,
            _ => Command::Unknown(keyword.to_string()),
        }
    }
}

/// One non-blank source line split into its keyword and trimmed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub command: Command,
    pub args: &'a str,
}

/// Returns `None` for blank lines.
pub fn tokenize(line: &str) -> Option<CommandLine<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (keyword, args) = match line.split_once(char::is_whitespace) {
        Some((keyword, args)) => (keyword, args.trim()),
        None => (line, ""),
    };

    Some(CommandLine {
        command: Command::from_keyword(keyword),
        args,
    })
}
