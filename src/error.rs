//! # Error Types
//!
//! This module defines error types used throughout the image2canvas library.

use thiserror::Error;

/// Main error type for image2canvas operations
#[derive(Debug, Error)]
pub enum Image2CanvasError {
    /// Wrong command-line invocation
    #[error("{0}")]
    Usage(String),

    /// The input file could not be opened or decoded
    #[error("{0}")]
    Decode(String),

    /// Decoded pixel data does not match the reported dimensions
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Image2CanvasError>;
