use std::io::Write;

use serde_json::Value;

use super::{error::ExportError, md_cell, Export};
use crate::model::Book;

impl Export for [Book] {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for book in self {
            wtr.serialize(book)?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();

        writeln!(buffer, "| ID | Name | Num | Price |")?;
        writeln!(buffer, "|----|------|-----|-------|")?;

        for book in self {
            let id = book
                .id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            writeln!(
                buffer,
                "| {} | {} | {} | {} |",
                id,
                md_cell(book.name()),
                book.num(),
                book.price()
            )?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        let rows: Vec<Value> = self
            .iter()
            .map(|book| Value::Object(book.to_mapping()))
            .collect();
        serde_json::to_string(&rows).map_err(ExportError::JsonToString)
    }
}
