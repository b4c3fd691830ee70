//! Error types for asset generation
//!
//! Covers the two failure families of the generator (font resources and
//! file output) plus config parsing and output verification.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("No usable label font found (tried: {})", display_paths(.searched))]
    FontUnavailable { searched: Vec<PathBuf> },

    #[error("Invalid font '{}': {reason}", .path.display())]
    InvalidFont { path: PathBuf, reason: String },

    #[error("Could not create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("{file}: {detail}")]
    Mismatch { file: String, detail: String },
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no candidates".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
