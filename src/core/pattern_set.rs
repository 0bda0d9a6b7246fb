//! Distinct tracking patterns collected during a scan

use std::collections::BTreeSet;

/// Deduplicated set of Git LFS tracking patterns
///
/// Patterns are `*.ext` globs or literal forward-slash relative paths.
/// Iteration is always in lexicographic order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: BTreeSet<String>,
}

impl PatternSet {
    /// Add a pattern; returns false if it was already present
    pub fn insert(&mut self, pattern: String) -> bool {
        self.patterns.insert(pattern)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over the patterns in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// All patterns joined with commas, as `git lfs migrate --include` expects
    pub fn include_arg(&self) -> String {
        self.iter().collect::<Vec<_>>().join(",")
    }
}

impl<S: Into<String>> FromIterator<S> for PatternSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().map(Into::into).collect(),
        }
    }
}
