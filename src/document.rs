//! Document reading and writing.
//!
//! The pipeline treats documents as ordered sequences of paragraphs. This
//! module implements that capability over plain-text files: paragraphs are
//! blank-line-separated blocks on read, and one line each on write.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur when reading or writing a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read file: {0}")]
    Read(std::io::Error),

    #[error("Failed to write file: {0}")]
    Write(std::io::Error),
}

/// Reads the ordered paragraphs of a document.
///
/// Paragraphs are blocks separated by blank lines; surrounding whitespace
/// is trimmed and empty blocks are dropped.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, DocumentError> {
    let content = fs::read_to_string(path).map_err(DocumentError::Read)?;

    let paragraphs = content
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect();

    Ok(paragraphs)
}

/// Writes one paragraph per line, overwriting any existing file.
///
/// `fs::write` opens, writes, and closes the handle in one scoped
/// operation, so the file is closed on all exit paths.
pub fn write_paragraphs(path: &Path, paragraphs: &[String]) -> Result<(), DocumentError> {
    let mut content = paragraphs.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content).map_err(DocumentError::Write)
}
