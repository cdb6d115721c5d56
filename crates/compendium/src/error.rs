//! Error types for catalog loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompendiumError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CompendiumError>;
