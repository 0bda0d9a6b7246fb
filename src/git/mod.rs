//! Git integration module
//!
//! This module reads the submodule declarations of the scanned repository so
//! that nested repositories are left out of the scan.

mod submodules;

pub use submodules::{locate_submodules, normalize_path, SubmoduleSet};
