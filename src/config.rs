//! Configuration types for lfs-advisor

use std::collections::HashSet;

/// Extensions that are always treated as text, even if large or containing null bytes
const TEXT_EXTENSIONS: &[&str] = &[
    "c", "h", "cpp", "hpp", "cs", "java", "py", "js", "ts", "html", "css", "json", "xml", "md",
    "txt",
];

/// Extensions that are flagged as binary without looking at the content
const BINARY_EXTENSIONS: &[&str] = &[
    // Images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "svg", // Documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", // Archives
    "zip", "rar", "7z", "gz", "tar", // Compiled code and libraries
    "exe", "dll", "so", "a", "lib", // Media
    "mp3", "wav", "ogg", "mp4", "mov", "avi", // Databases
    "db", "sqlite", "sqlite3", // Other
    "jar", "bin", "dat",
];

/// Configuration options for a scan
///
/// Built once at startup and shared by reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files strictly larger than this many MiB are flagged as large (default: 25)
    pub size_limit_mb: u64,

    /// Number of leading bytes inspected when sniffing for binary content (default: 1024)
    pub sniff_len: u64,

    /// Lowercase extensions (without the dot) that are never flagged
    pub text_extensions: HashSet<String>,

    /// Lowercase extensions (without the dot) flagged as binary without sniffing
    pub binary_extensions: HashSet<String>,

    /// Version control metadata directory that is never descended (default: .git)
    pub metadata_dir: String,

    /// Submodule declaration file read from the scan root (default: .gitmodules)
    pub submodule_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size_limit_mb: 25,
            sniff_len: 1024,
            text_extensions: TEXT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            binary_extensions: BINARY_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            metadata_dir: String::from(".git"),
            submodule_file: String::from(".gitmodules"),
        }
    }
}

impl Config {
    /// Size threshold in bytes
    pub fn size_limit_bytes(&self) -> u64 {
        self.size_limit_mb * 1024 * 1024
    }

    /// Check whether a lowercase extension is text-exempt
    pub fn is_text_extension(&self, extension: &str) -> bool {
        self.text_extensions.contains(extension)
    }

    /// Check whether a lowercase extension is a known binary format
    pub fn is_binary_extension(&self, extension: &str) -> bool {
        self.binary_extensions.contains(extension)
    }
}
