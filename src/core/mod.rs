//! Core scan pipeline: walk the tree, classify files, collect patterns

pub mod file_record;
pub mod pattern_set;
pub mod processor;
pub mod walker;

pub use file_record::classify_file;
pub use pattern_set::PatternSet;
pub use processor::run_scan;
pub use walker::{TreeWalker, WalkEvent};
