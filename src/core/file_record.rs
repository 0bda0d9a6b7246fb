//! Per-file classification

use crate::config::Config;
use crate::error::{AdvisorError, Result};
use crate::filetype::{extension_of, sniff_binary};
use std::fs;
use std::path::{Path, PathBuf};

/// Why a file was (or was not) flagged for LFS tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Extension is in the text list; size and content were not examined
    TextExempt,
    /// Larger than the size threshold
    Large,
    /// Extension is a known binary format
    BinaryByExtension,
    /// A null byte was found in the content prefix
    BinaryByContent,
    /// Neither large nor binary
    NotFlagged,
}

impl Classification {
    pub fn is_flagged(self) -> bool {
        matches!(
            self,
            Classification::Large
                | Classification::BinaryByExtension
                | Classification::BinaryByContent
        )
    }
}

/// A classified file
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the scan root
    relative: PathBuf,
    /// Size in bytes (not looked up for text-exempt files)
    size: Option<u64>,
    /// Lowercased extension without the dot
    extension: Option<String>,
    classification: Classification,
}

impl FileRecord {
    /// Relative path with forward slashes on every platform
    pub fn posix_path(&self) -> String {
        to_posix(&self.relative)
    }

    /// One-line progress notice for a flagged file
    pub fn notice(&self) -> Option<String> {
        match self.classification {
            Classification::Large => {
                let size_in_mb = self.size.unwrap_or(0) as f64 / (1024.0 * 1024.0);
                Some(format!(
                    "Found large file: '{}' (Size: {:.2}MB)",
                    self.posix_path(),
                    size_in_mb
                ))
            }
            Classification::BinaryByExtension => Some(format!(
                "Found binary file: '{}' (Reason: Binary extension)",
                self.posix_path()
            )),
            Classification::BinaryByContent => Some(format!(
                "Found binary file: '{}' (Reason: Binary content)",
                self.posix_path()
            )),
            Classification::TextExempt | Classification::NotFlagged => None,
        }
    }

    /// Tracking pattern for a flagged file
    ///
    /// `*.ext` when the file has an extension, the literal relative path
    /// otherwise.
    pub fn pattern(&self) -> Option<String> {
        if !self.classification.is_flagged() {
            return None;
        }
        match &self.extension {
            Some(ext) => Some(format!("*.{}", ext)),
            None => Some(self.posix_path()),
        }
    }
}

#[cfg(test)]
impl FileRecord {
    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Classify one file
///
/// `path` is used for filesystem access, `relative` (the path below the scan
/// root) for notices and literal patterns. Fails only when the file's
/// metadata cannot be read; content sniffing never fails.
pub fn classify_file(path: &Path, relative: &Path, config: &Config) -> Result<FileRecord> {
    let extension = extension_of(path);
    let record = |size: Option<u64>, classification: Classification| FileRecord {
        relative: relative.to_path_buf(),
        size,
        extension: extension.clone(),
        classification,
    };

    if extension
        .as_deref()
        .is_some_and(|ext| config.is_text_extension(ext))
    {
        return Ok(record(None, Classification::TextExempt));
    }

    let metadata = fs::metadata(path).map_err(|e| AdvisorError::FileAccess {
        path: to_posix(relative),
        reason: e.to_string(),
    })?;
    let size = metadata.len();

    let classification = if size > config.size_limit_bytes() {
        Classification::Large
    } else if extension
        .as_deref()
        .is_some_and(|ext| config.is_binary_extension(ext))
    {
        Classification::BinaryByExtension
    } else if metadata.is_file() && sniff_binary(path, config.sniff_len) {
        // Pipes and devices are never opened
        Classification::BinaryByContent
    } else {
        Classification::NotFlagged
    };

    Ok(record(Some(size), classification))
}

/// Join path components with forward slashes
pub(crate) fn to_posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
