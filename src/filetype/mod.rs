//! File type detection
//!
//! Two cheap signals decide whether a file is text or binary: the extension
//! of its name and a null-byte sniff over the first bytes of its content.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lowercased extension of a file name, without the dot
///
/// Leading dots of the base name do not start an extension, so `.bashrc`
/// has none, while `archive.tar.GZ` has `gz`. A trailing dot (`file.`)
/// yields no extension either.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    let dot = name[leading_dots..].rfind('.')? + leading_dots;
    let extension = &name[dot + 1..];

    if extension.is_empty() {
        None
    } else {
        Some(extension.to_lowercase())
    }
}

/// Check the first `len` bytes of a file for a null byte
///
/// Any failure to open or read the file counts as "not binary".
pub fn sniff_binary(path: &Path, len: u64) -> bool {
    let mut prefix = Vec::new();
    match File::open(path).and_then(|file| file.take(len).read_to_end(&mut prefix)) {
        Ok(_) => prefix.contains(&0),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extension_simple() {
        assert_eq!(extension_of(Path::new("data.bin")).as_deref(), Some("bin"));
        assert_eq!(extension_of(Path::new("dir/photo.png")).as_deref(), Some("png"));
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(extension_of(Path::new("IMAGE.PNG")).as_deref(), Some("png"));
        assert_eq!(extension_of(Path::new("Archive.Tar.Gz")).as_deref(), Some("gz"));
    }

    #[test]
    fn test_extension_missing() {
        assert_eq!(extension_of(Path::new("tools/blob")), None);
        assert_eq!(extension_of(Path::new("Makefile")), None);
        assert_eq!(extension_of(Path::new("file.")), None);
    }

    #[test]
    fn test_extension_dotfiles() {
        assert_eq!(extension_of(Path::new(".bashrc")), None);
        assert_eq!(extension_of(Path::new("..hidden")), None);
        assert_eq!(extension_of(Path::new(".cache.db")).as_deref(), Some("db"));
    }

    #[test]
    fn test_extension_dot_in_directory_only() {
        assert_eq!(extension_of(Path::new("v1.2/blob")), None);
    }

    #[test]
    fn test_sniff_text_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.log");
        fs::write(&path, "plain text\nwith lines\n").unwrap();

        assert!(!sniff_binary(&path, 1024));
    }

    #[test]
    fn test_sniff_null_byte_in_prefix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.xyz");
        fs::write(&path, b"abc\0def").unwrap();

        assert!(sniff_binary(&path, 1024));
    }

    #[test]
    fn test_sniff_null_byte_after_prefix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("late.xyz");
        let mut content = vec![b'a'; 1024];
        content.push(0);
        fs::write(&path, content).unwrap();

        assert!(!sniff_binary(&path, 1024));
        assert!(sniff_binary(&path, 1025));
    }

    #[test]
    fn test_sniff_missing_file_fails_open() {
        let temp = TempDir::new().unwrap();
        assert!(!sniff_binary(&temp.path().join("gone"), 1024));
    }

    #[test]
    fn test_sniff_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty");
        fs::write(&path, b"").unwrap();

        assert!(!sniff_binary(&path, 1024));
    }
}
