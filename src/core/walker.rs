//! Directory tree traversal
//!
//! Wraps `walkdir` in a pull-based iterator that prunes the version control
//! metadata directory and declared submodules before descending into them.

use crate::config::Config;
use crate::git::SubmoduleSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Something the walker found while descending the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A candidate file (anything that is not a directory)
    File {
        /// Path as reachable from the working directory
        path: PathBuf,
        /// Path relative to the scan root
        relative: PathBuf,
    },
    /// A submodule directory that was not descended
    SkippedSubmodule(PathBuf),
    /// A directory entry that could not be read
    Unreadable {
        /// Path relative to the scan root (empty for the root itself)
        relative: PathBuf,
        reason: String,
    },
}

/// One-pass iterator over the files below a root directory
///
/// Entries of each directory are visited in file-name order. Symbolic links
/// are never followed; links that point at directories are dropped.
pub struct TreeWalker<'a> {
    root: PathBuf,
    inner: walkdir::IntoIter,
    metadata_dir: &'a str,
    submodules: &'a SubmoduleSet,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: &Path, config: &'a Config, submodules: &'a SubmoduleSet) -> Self {
        let inner = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            root: root.to_path_buf(),
            inner,
            metadata_dir: &config.metadata_dir,
            submodules,
        }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(self.root.as_path());
                    let relative = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
                    let reason = e
                        .io_error()
                        .map(|io| io.to_string())
                        .unwrap_or_else(|| e.to_string());
                    return Some(WalkEvent::Unreadable { relative, reason });
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_path_buf();

            if entry.file_type().is_dir() {
                if entry.file_name() == OsStr::new(self.metadata_dir) {
                    self.inner.skip_current_dir();
                    continue;
                }
                if self.submodules.contains(&relative) {
                    self.inner.skip_current_dir();
                    return Some(WalkEvent::SkippedSubmodule(relative));
                }
                continue;
            }

            if entry.path_is_symlink() && entry.path().is_dir() {
                continue;
            }

            return Some(WalkEvent::File {
                path: entry.into_path(),
                relative,
            });
        }
    }
}
