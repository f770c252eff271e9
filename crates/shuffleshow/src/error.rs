//! Error types for the fallible slideshow operations

use std::path::PathBuf;

use thiserror::Error;

/// Failure to collect images from a folder.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("No folder selected")]
    NoDirectory,

    #[error("Folder not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read folder {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a folder: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No images found in {}", .0.display())]
    NoImages(PathBuf),
}

/// Interval text that cannot be used as a delay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval is empty")]
    Empty,

    #[error("Invalid interval {0:?}, expected milliseconds")]
    NotANumber(String),

    #[error("Interval must be positive, got {0}")]
    NotPositive(i64),
}

/// Failure to remove an image from disk.
#[derive(Error, Debug)]
#[error("Failed to delete {}: {source}", .path.display())]
pub struct DeleteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Failure to read or decode an image for display.
#[derive(Error, Debug)]
#[error("Cannot load {}: {source}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}
