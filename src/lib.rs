//! Book and book directory records with exact-decimal prices, plus
//! CSV, Markdown and JSON export for slices of them.

pub mod export;
pub mod model;

pub use export::{render, Export, ExportError, ExportFormat};
pub use model::*;
