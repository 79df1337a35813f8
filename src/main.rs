use std::env;
use std::error::Error;

use book_catalog::{render, Book, BookDirectory, ExportFormat};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const FORMAT_ENV: &str = "BOOK_CATALOG_FORMAT";

fn sample_books() -> Vec<Book> {
    vec![
        Book::with_id("The Rust Programming Language", 12, Decimal::new(3995, 2), Some(1)),
        Book::with_id("Programming Rust", 4, Decimal::new(5999, 2), Some(2)),
        Book::new("Clean Code", 5, Decimal::new(3990, 2)),
    ]
}

fn sample_directories() -> Vec<BookDirectory> {
    vec![
        BookDirectory::with_id("Programming", 120, Some(3)),
        BookDirectory::new("Poetry", 0),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let format = match env::args().nth(1).or_else(|| env::var(FORMAT_ENV).ok()) {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => ExportFormat::default(),
    };
    tracing::info!(%format, "rendering sample catalog");

    let books = sample_books();
    let directories = sample_directories();

    println!("{}", render(books.as_slice(), format)?);
    println!("{}", render(directories.as_slice(), format)?);

    for book in &books {
        tracing::debug!(book = %book.debug_string(), "sample book");
    }
    Ok(())
}
