//! Scan orchestration
//!
//! Ties the submodule locator, walker, classifier and reporter together.
//! Every per-file problem is turned into a warning line; only failures to
//! write to the output sinks end a scan early.

use crate::config::Config;
use crate::core::file_record::to_posix;
use crate::core::{classify_file, PatternSet, TreeWalker, WalkEvent};
use crate::error::Result;
use crate::export::ConsoleExporter;
use crate::git::{locate_submodules, SubmoduleSet};
use std::io::Write;
use std::path::Path;

const SEPARATOR: &str = "----------------------------------------";

/// Walk `root` and collect the tracking patterns of all flagged files
///
/// Notices for flagged files and skipped submodules go to `out`; warnings
/// for unreadable files and directories go to `err`.
pub fn scan_tree(
    root: &Path,
    config: &Config,
    submodules: &SubmoduleSet,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<PatternSet> {
    let mut patterns = PatternSet::default();

    for event in TreeWalker::new(root, config, submodules) {
        match event {
            WalkEvent::File { path, relative } => match classify_file(&path, &relative, config) {
                Ok(record) => {
                    if let Some(notice) = record.notice() {
                        writeln!(out, "{}", notice)?;
                    }
                    if let Some(pattern) = record.pattern() {
                        patterns.insert(pattern);
                    }
                }
                Err(e) => writeln!(err, "Warning: {}. Skipping.", e)?,
            },
            WalkEvent::SkippedSubmodule(relative) => {
                writeln!(out, "Ignoring submodule directory: '{}'", relative.display())?;
            }
            WalkEvent::Unreadable { relative, reason } => {
                let shown = if relative.as_os_str().is_empty() {
                    String::from(".")
                } else {
                    to_posix(&relative)
                };
                writeln!(
                    err,
                    "Warning: Could not read directory '{}': {}",
                    shown, reason
                )?;
            }
        }
    }

    Ok(patterns)
}

/// Run a complete scan of `root` and print the suggestions
pub fn run_scan(
    root: &Path,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<PatternSet> {
    writeln!(
        out,
        "Scanning for files larger than {}MB or binary files...",
        config.size_limit_mb
    )?;
    let submodules = locate_submodules(root, config, out, err)?;
    writeln!(out, "{}", SEPARATOR)?;

    let patterns = scan_tree(root, config, &submodules, out, err)?;

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Scan complete.")?;
    ConsoleExporter.export(&patterns, config, out)?;

    Ok(patterns)
}
