//! Error types for PDF output

use sheet_layout::LayoutError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing a PDF
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error while serializing the document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sheet could not be laid out
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The finished document could not be written to disk
    #[error("Could not save sheet to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PdfError>;
