use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Path does not exist or is not a file: {0}")]
    InvalidInput(PathBuf),

    #[error("Failed to open PDF: {0}")]
    DocumentUnreadable(String),

    #[error("Failed to read page {page}: {detail}")]
    PageUnreadable { page: u32, detail: String },
}
