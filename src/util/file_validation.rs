//! File validation utilities for opening documents
//!
//! Validates files before attempting to open them, checking for:
//! - File existence and permissions
//! - File size limits
//! - Binary file detection

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use thiserror::Error;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur when validating a file for opening
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FileOpenError {
    #[error("file not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("is a directory")]
    IsDirectory,
    /// File appears to be binary (contains null bytes)
    #[error("binary file")]
    BinaryFile,
    #[error("file is not valid UTF-8")]
    NotUtf8,
    #[error("file too large ({size_mb:.1} MB, max {} MB)", MAX_FILE_SIZE / (1024 * 1024))]
    TooLarge { size_mb: f64 },
    #[error("{0}")]
    IoError(String),
}

impl FileOpenError {
    fn from_io(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::InvalidData => Self::NotUtf8,
            _ => Self::IoError(e.to_string()),
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::NotFound => format!("File not found: {}", filename),
            Self::PermissionDenied => format!("Permission denied: {}", filename),
            Self::IsDirectory => format!("Cannot open directory: {}", filename),
            Self::BinaryFile => format!("Cannot open binary file: {}", filename),
            Self::NotUtf8 => format!("{} is not valid UTF-8 text", filename),
            Self::TooLarge { size_mb } => format!(
                "{} is too large ({:.1} MB, max {} MB)",
                filename,
                size_mb,
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            Self::IoError(msg) => format!("Error opening {}: {}", filename, msg),
        }
    }
}

/// Validate a file before attempting to open it
///
/// Does NOT check for binary content (use `is_likely_binary` separately after this passes)
pub fn validate_file_for_opening(path: &Path) -> Result<(), FileOpenError> {
    let metadata = fs::metadata(path).map_err(FileOpenError::from_io)?;

    if metadata.is_dir() {
        return Err(FileOpenError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(FileOpenError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Check if a file is likely binary by scanning the first 8KB for null bytes
///
/// Returns `false` on any read error (let the actual open fail with a better error).
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}

/// Validate and read a text document in one step
pub fn read_text_file(path: &Path) -> Result<String, FileOpenError> {
    validate_file_for_opening(path)?;
    if is_likely_binary(path) {
        return Err(FileOpenError::BinaryFile);
    }
    fs::read_to_string(path).map_err(FileOpenError::from_io)
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
