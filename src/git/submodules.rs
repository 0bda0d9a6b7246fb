//! Submodule discovery from `.gitmodules`
//!
//! Parses the INI-style declaration file git writes for submodules and
//! collects every declared `path` so the walker can prune those directories.

use crate::config::Config;
use crate::error::{AdvisorError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Normalized, root-relative directories of declared submodules
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmoduleSet {
    paths: BTreeSet<PathBuf>,
}

impl SubmoduleSet {
    /// Check whether a root-relative directory is a declared submodule
    pub fn contains(&self, relative: &Path) -> bool {
        self.paths.contains(relative)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the paths in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }
}

impl FromIterator<PathBuf> for SubmoduleSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

/// Normalize a declared path to the host separator convention
///
/// Drops `.` components, repeated separators and trailing separators, so
/// `./lib//vendor/` becomes `lib/vendor` (or `lib\vendor` on Windows).
pub fn normalize_path(raw: &str) -> PathBuf {
    Path::new(raw)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Read the submodule declaration file in `root`, if there is one
///
/// Progress goes to `out`, parse problems to `err`. A malformed file never
/// fails the call: paths declared before the first bad line are kept.
/// Only write failures on the two sinks are returned as errors.
pub fn locate_submodules(
    root: &Path,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<SubmoduleSet> {
    let file = root.join(&config.submodule_file);
    if !file.exists() {
        return Ok(SubmoduleSet::default());
    }

    writeln!(
        out,
        "Found {}, parsing for submodule paths...",
        config.submodule_file
    )?;

    let mut paths = BTreeSet::new();
    match fs::read_to_string(&file) {
        Ok(content) => {
            if let Err(e) = parse_submodule_paths(&content, &mut paths) {
                writeln!(
                    err,
                    "Warning: Could not parse {} file: {}",
                    config.submodule_file, e
                )?;
            }
        }
        Err(e) => {
            writeln!(
                err,
                "Warning: Could not read {} file: {}",
                config.submodule_file, e
            )?;
        }
    }

    let submodules = SubmoduleSet { paths };
    if !submodules.is_empty() {
        writeln!(out, "The following submodule paths will be ignored:")?;
        for path in submodules.iter() {
            writeln!(out, "  - {}", path.display())?;
        }
    }

    Ok(submodules)
}

/// Collect the `path` values of every section into `paths`
///
/// Stops at the first malformed line. Whatever was collected up to that
/// point stays in `paths`.
fn parse_submodule_paths(content: &str, paths: &mut BTreeSet<PathBuf>) -> Result<()> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut in_section = false;

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            if !header.contains(']') {
                return Err(AdvisorError::SubmoduleConfig {
                    line: line_number,
                    reason: format!("unterminated section header '{}'", line),
                });
            }
            in_section = true;
            continue;
        }

        let Some((key, value)) = split_option(line) else {
            return Err(AdvisorError::SubmoduleConfig {
                line: line_number,
                reason: format!("expected 'key = value', found '{}'", line),
            });
        };

        if !in_section {
            return Err(AdvisorError::SubmoduleConfig {
                line: line_number,
                reason: format!("option '{}' appears before any section header", key),
            });
        }

        if key.eq_ignore_ascii_case("path") {
            let path = normalize_path(value);
            if !path.as_os_str().is_empty() {
                paths.insert(path);
            }
        }
    }

    Ok(())
}

/// Split `key = value` (or `key : value`) on the first delimiter
fn split_option(line: &str) -> Option<(&str, &str)> {
    let delimiter = line.find(|c: char| c == '=' || c == ':')?;
    let key = line[..delimiter].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, line[delimiter + 1..].trim()))
}
