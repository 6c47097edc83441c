//! Audio I/O modules
//!
//! File discovery, Symphonia decoding, and WAV encoding. The detection core
//! never touches the file system; everything here feeds it sample buffers
//! and persists its output.

use std::path::{Path, PathBuf};

use crate::error::TrimError;

pub mod decoder;
pub mod encoder;

/// List the WAV files directly inside a directory
///
/// Non-recursive: subdirectories are not descended into. Results are sorted
/// by path so batch runs visit files in a stable order.
///
/// # Errors
///
/// Returns `TrimError::Io` if the directory cannot be read.
pub fn wav_files(dir: &Path) -> Result<Vec<PathBuf>, TrimError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| TrimError::Io(format!("cannot read {}: {}", dir.display(), e)))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("wav")
        })
        .collect();

    files.sort();
    Ok(files)
}
