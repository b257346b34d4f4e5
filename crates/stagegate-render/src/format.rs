use crate::{render_html, render_json, render_markdown, render_text};
use stagegate_types::ReportDocument;
use std::fmt;
use std::str::FromStr;

/// Output format selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
    Markdown,
    Html,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Text, Format::Json, Format::Markdown, Format::Html];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::Markdown => "markdown",
            Format::Html => "html",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format: {0} (expected text|json|markdown|html)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "markdown" | "md" => Ok(Format::Markdown),
            "html" => Ok(Format::Html),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Render `report` in `format`. Only JSON serialization can fail.
pub fn render(format: Format, report: &ReportDocument) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(render_text(report)),
        Format::Json => render_json(report),
        Format::Markdown => Ok(render_markdown(report)),
        Format::Html => Ok(render_html(report)),
    }
}
