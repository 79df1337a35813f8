use std::io::Write;

use serde_json::Value;

use super::{error::ExportError, md_cell, Export};
use crate::model::BookDirectory;

impl Export for [BookDirectory] {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for dir in self {
            wtr.serialize(dir)?;
        }
        Ok(String::from_utf8(wtr.into_inner()?)?)
    }

    fn to_md(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();

        writeln!(buffer, "| ID | Name | Num |")?;
        writeln!(buffer, "|----|------|-----|")?;

        for dir in self {
            let id = dir
                .id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            writeln!(buffer, "| {} | {} | {} |", id, md_cell(dir.name()), dir.num())?;
        }
        Ok(String::from_utf8(buffer)?)
    }

    fn to_json(&self) -> Result<String, ExportError> {
        let rows: Vec<Value> = self
            .iter()
            .map(|dir| Value::Object(dir.to_mapping()))
            .collect();
        serde_json::to_string(&rows).map_err(ExportError::JsonToString)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_dirs() -> Vec<BookDirectory> {
        vec![
            BookDirectory::with_id("Programming", 120, Some(3)),
            BookDirectory::new("Poetry", 0),
        ]
    }

    #[test]
    fn test_dirs_to_csv() {
        let dirs = get_test_dirs();
        let expected = ["id,name,num", "3,Programming,120", ",Poetry,0", ""].join("\n");
        assert_eq!(dirs.to_csv().unwrap(), expected);
    }

    #[test]
    fn test_dirs_to_md() {
        let dirs = get_test_dirs();
        let expected = [
            "| ID | Name | Num |",
            "|----|------|-----|",
            "| 3 | Programming | 120 |",
            "| N/A | Poetry | 0 |",
            "",
        ]
        .join("\n");
        assert_eq!(dirs.to_md().unwrap(), expected);
    }

    #[test]
    fn test_dirs_to_md_escapes_pipes() {
        let dirs = vec![BookDirectory::with_id("Shell | Unix", 2, Some(9))];
        let md = dirs.to_md().unwrap();
        assert!(md.ends_with("| 9 | Shell \\| Unix | 2 |\n"));
        assert_eq!(dirs.record_count(), 1);
    }

    #[test]
    fn test_dirs_to_json() {
        let dirs = get_test_dirs();
        assert_eq!(
            dirs.to_json().unwrap(),
            r#"[{"id":3,"name":"Programming","num":120},{"id":null,"name":"Poetry","num":0}]"#
        );
    }
}
