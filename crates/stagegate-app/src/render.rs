//! Render use cases: format selection and writing the result.

use anyhow::Context;
use camino::Utf8Path;
use stagegate_render::Format;
use stagegate_types::ReportDocument;

/// Parse a format name, falling back to text when none is given or the name is unknown.
pub fn parse_format(name: Option<&str>) -> Format {
    let Some(name) = name else {
        return Format::default();
    };
    name.parse().unwrap_or_else(|err| {
        log::warn!("{err}; falling back to text");
        Format::default()
    })
}

pub fn render_report(document: &ReportDocument, format: Format) -> anyhow::Result<String> {
    stagegate_render::render(format, document).with_context(|| format!("render {format} report"))
}

/// Write rendered output, creating parent directories as needed.
pub fn write_output(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write report: {path}"))?;
    Ok(())
}
