use crate::commands::CueCommand;
use crate::error::{CliError, CliResult};
use cuesheet_lib::{CueSheet, FormatOptions, ParseResult, Track, format, minimal, parse, timeline};
use log::{debug, error, info, warn};
use std::path::Path;
use tokio::fs;

pub async fn load_cue(path: &Path) -> CliResult<ParseResult> {
    debug!("Parsing CUE file: {path:?}");
    let data = fs::read(path).await?;
    let text = String::from_utf8_lossy(&data);

    Ok(parse(&text))
}

fn report_diagnostics(result: &ParseResult) {
    for warning in &result.warnings {
        warn!("{warning} | {}", warning.raw_line.trim());
    }
    for err in &result.errors {
        error!("{err} | {}", err.raw_line.trim());
    }
}

/// Loads and reports, failing if the sheet has errors.
async fn load_valid_sheet(path: &Path) -> CliResult<CueSheet> {
    let result = load_cue(path).await?;
    report_diagnostics(&result);

    result.sheet.ok_or_else(|| CliError::InvalidCueSheet {
        path: path.to_path_buf(),
        errors: result.errors.len(),
    })
}

pub async fn print_info(path: &Path) -> CliResult<()> {
    let sheet = load_valid_sheet(path).await?;
    print!("{}", summary(&sheet));

    Ok(())
}

pub async fn print_json(path: &Path) -> CliResult<()> {
    let result = load_cue(path).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

pub async fn print_timeline(path: &Path) -> CliResult<()> {
    let sheet = load_valid_sheet(path).await?;
    print!("{}", timeline::render(&sheet));

    Ok(())
}

pub async fn write_cue(cmd: &CueCommand) -> CliResult<()> {
    let sheet = load_valid_sheet(&cmd.input).await?;
    let text = render_cue(&sheet, cmd);

    match &cmd.output {
        Some(output) => {
            if fs::try_exists(output).await? && !cmd.force {
                return Err(CliError::OutputAlreadyExists(output.clone()));
            }
            fs::write(output, text).await?;
            info!("Wrote {} tracks to {output:?}", sheet.tracks.len());
        }
        None => print!("{text}"),
    }

    Ok(())
}

pub async fn validate(path: &Path) -> CliResult<()> {
    let sheet = load_valid_sheet(path).await?;
    info!("{path:?} is valid, {} tracks", sheet.tracks.len());

    Ok(())
}

fn render_cue(sheet: &CueSheet, cmd: &CueCommand) -> String {
    if cmd.minimal {
        return minimal(sheet);
    }

    let mut options = FormatOptions {
        track_spacing: cmd.spacing,
        ..Default::default()
    };
    if let Some(indent) = &cmd.indent {
        options.indent_unit = indent.clone();
    }

    format(sheet, &options)
}

fn summary(sheet: &CueSheet) -> String {
    let global = &sheet.global;
    let fields = [
        ("Title", &global.cd_text.title),
        ("Performer", &global.cd_text.performer),
        ("Songwriter", &global.cd_text.songwriter),
        ("Catalog", &global.catalog),
        ("Genre", &global.genre),
        ("Disc ID", &global.disc_id),
    ];

    let mut lines: Vec<String> = fields
        .into_iter()
        .filter_map(|(label, value)| value.as_ref().map(|value| format!("{label:<11}{value}")))
        .collect();
    lines.extend(
        global
            .remarks
            .iter()
            .map(|remark| format!("{:<11}{remark}", "Remark")),
    );
    lines.push(format!("{:<11}{}", "Tracks", sheet.tracks.len()));
    lines.extend(
        sheet
            .tracks
            .iter()
            .map(|track| format!("  {}", track_summary(track))),
    );

    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn track_summary(track: &Track) -> String {
    let start = track
        .index(1)
        .or_else(|| track.indices.first())
        .map_or_else(|| "--:--:--".to_string(), |i| i.position.to_string());

    let mut parts = vec![format!(
        "{:02} {:<10} {start}",
        track.number,
        track.track_type.as_str()
    )];

    let name = match (&track.cd_text.performer, &track.cd_text.title) {
        (Some(performer), Some(title)) => Some(format!("{performer} - {title}")),
        (None, Some(title)) => Some(title.clone()),
        (Some(performer), None) => Some(performer.clone()),
        (None, None) => None,
    };
    parts.extend(name);

    if let Some(file) = &track.file {
        parts.push(format!("[{}]", file.filename));
    }

    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::{NamedTempFile, tempdir};

    const SHEET: &str = "TITLE \"Set\"\nPERFORMER \"DJ\"\nTRACK 01 AUDIO\nTITLE \"Intro\"\nFILE \"mix.wav\" WAVE\nPREGAP 00:02:00\nINDEX 00 00:00:00\nINDEX 01 00:02:00\n";

    fn cue_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn cue_command(input: PathBuf, output: Option<PathBuf>) -> CueCommand {
        CueCommand {
            input,
            output,
            minimal: false,
            indent: None,
            spacing: false,
            force: false,
        }
    }

    #[tokio::test]
    async fn load_cue_parses_file() {
        let file = cue_file(SHEET);
        let result = load_cue(file.path()).await.unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(result.sheet.unwrap().tracks.len(), 1);
    }

    #[tokio::test]
    async fn validate_fails_on_errors() {
        let file = cue_file("CATALOG 123\nINDEX 01 00:00:00\n");
        let err = validate(file.path()).await.unwrap_err();
        assert!(matches!(err, CliError::InvalidCueSheet { errors: 2, .. }));
    }

    #[tokio::test]
    async fn validate_accepts_warnings() {
        let file = cue_file("FILE \"mix.wav\" WAVE\nTRACK 01 AUDIO\n");
        assert!(validate(file.path()).await.is_ok());
    }

    #[tokio::test]
    async fn write_cue_writes_output_and_respects_force() {
        let file = cue_file(SHEET);
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.cue");

        let mut cmd = cue_command(file.path().to_path_buf(), Some(output.clone()));
        write_cue(&cmd).await.unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("TITLE \"Set\"\n"));
        assert!(written.contains("\t\t\tINDEX 01 00:02:00\n"));

        assert!(matches!(
            write_cue(&cmd).await,
            Err(CliError::OutputAlreadyExists(_))
        ));

        cmd.force = true;
        cmd.minimal = true;
        write_cue(&cmd).await.unwrap();
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(!written.contains("PREGAP"));
        assert!(!written.contains("INDEX 00"));
    }

    #[test]
    fn render_cue_applies_layout_flags() {
        let sheet = parse(SHEET).sheet.unwrap();
        let mut cmd = cue_command(PathBuf::from("in.cue"), None);
        cmd.indent = Some(" ".to_string());
        cmd.spacing = true;

        let text = render_cue(&sheet, &cmd);
        assert!(text.contains("PERFORMER \"DJ\"\n\n  TRACK 01 AUDIO\n   TITLE \"Intro\"\n"));
    }

    #[test]
    fn summary_lists_globals_and_tracks() {
        let sheet = parse(SHEET).sheet.unwrap();
        assert_eq!(
            summary(&sheet),
            concat!(
                "Title      Set\n",
                "Performer  DJ\n",
                "Tracks     1\n",
                "  01 AUDIO      00:02:00  Intro  [mix.wav]\n",
            )
        );
    }

    #[test]
    fn track_summary_joins_available_parts() {
        let sheet = parse(concat!(
            "TRACK 01 AUDIO\n",
            "PERFORMER \"DJ\"\n",
            "TITLE \"Intro\"\n",
            "TRACK 02 MODE1/2352\n",
        ))
        .sheet
        .unwrap();

        assert_eq!(track_summary(&sheet.tracks[0]), "01 AUDIO      --:--:--  DJ - Intro");
        assert_eq!(track_summary(&sheet.tracks[1]), "02 MODE1/2352 --:--:--");
    }
}
