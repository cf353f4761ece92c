use crate::cue::models::CueSheet;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A message tied to one source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// 1-based.
    pub line: usize,
    pub message: String,
    pub raw_line: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn error(&mut self, line: usize, message: impl Into<String>, raw_line: &str) {
        self.errors.push(Diagnostic {
            line,
            message: message.into(),
            raw_line: raw_line.to_string(),
        });
    }

    pub fn warning(&mut self, line: usize, message: impl Into<String>, raw_line: &str) {
        self.warnings.push(Diagnostic {
            line,
            message: message.into(),
            raw_line: raw_line.to_string(),
        });
    }

    /// The sheet is only handed out when no error was recorded.
    pub fn into_result(self, sheet: CueSheet) -> ParseResult {
        let sheet = if self.errors.is_empty() {
            Some(sheet)
        } else {
            None
        };

        ParseResult {
            sheet,
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<CueSheet>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.sheet.is_some()
    }
}
