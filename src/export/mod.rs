pub mod book;
pub mod book_dir;
pub mod error;
pub mod format;

pub use error::ExportError;
pub use format::{render, ExportFormat};

pub trait Export {
    fn record_count(&self) -> usize;
    fn to_csv(&self) -> Result<String, ExportError>;
    fn to_md(&self) -> Result<String, ExportError>;
    fn to_json(&self) -> Result<String, ExportError>;
}

/// Escapes a value for a Markdown table cell.
pub(crate) fn md_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::md_cell;

    #[test]
    fn test_md_cell() {
        assert_eq!(md_cell("plain"), "plain");
        assert_eq!(md_cell("A|B"), "A\\|B");
        assert_eq!(md_cell("two\nlines"), "two lines");
    }
}
