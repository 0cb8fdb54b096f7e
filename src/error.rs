//! Error types for settings loading and frame export
//!
//! Scene generation and drawing are total; only I/O touches these.

use thiserror::Error;

/// Errors returned by settings and export operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON could not be parsed or written.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Settings parsed but hold values the scene cannot use.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
