/// Layout settings for [`format`](super::format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Repeated twice before TRACK lines and three times before track fields.
    pub indent_unit: String,
    /// Blank line before every track that follows other output.
    pub track_spacing: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_unit: "\t".to_string(),
            track_spacing: false,
        }
    }
}
