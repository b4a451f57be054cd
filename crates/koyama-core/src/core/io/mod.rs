//! Wavevector grids and structure-factor tables.
//!
//! Grids are either generated ([`grid::KGrid::uniform`]) or read from a one-column CSV file;
//! results are written as `k,omega` CSV tables.

pub mod grid;
pub mod table;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid wavevector on line {line} of '{path}': {message}")]
    InvalidValue {
        path: String,
        line: u64,
        message: String,
    },
    #[error("Invalid grid specification: {0}")]
    InvalidSpec(String),
    #[error("Grid and structure factor lengths differ ({k} vs {omega})")]
    LengthMismatch { k: usize, omega: usize },
    #[error("Failed to write table: {0}")]
    Write(#[from] csv::Error),
}
