//! Error types for sheet layout

use thiserror::Error;

/// Errors that can occur while laying out a sheet
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested geometry or table shape cannot be satisfied
    #[error("Layout configuration error: {0}")]
    Config(String),

    /// A derived cell value does not have the expected shape
    #[error("Format error: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
