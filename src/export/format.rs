use std::fmt;
use std::str::FromStr;

use super::{error::ExportError, Export};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Csv,
    Markdown,
    #[default]
    Json,
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

pub fn render<T: Export + ?Sized>(items: &T, format: ExportFormat) -> Result<String, ExportError> {
    tracing::debug!(count = items.record_count(), %format, "rendering export");
    match format {
        ExportFormat::Csv => items.to_csv(),
        ExportFormat::Markdown => items.to_md(),
        ExportFormat::Json => items.to_json(),
    }
}
