//! File I/O and export file naming

mod fs;
mod slug;

pub use fs::{FsError, parse_portfolio_from_bytes, read_portfolio, write_atomic, write_document};
pub use slug::export_filename;
