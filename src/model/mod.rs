pub mod book;
pub mod book_dir;
pub mod error;
mod repr;

pub use book::*;
pub use book_dir::*;
pub use error::*;
