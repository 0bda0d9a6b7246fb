//! lfs-advisor - Git LFS tracking advisor
//!
//! Scans the working tree for large or binary files and prints the
//! `git lfs track` and `git lfs migrate` commands that would move them into
//! Git LFS. The repository itself is never modified.

mod cli;
mod config;
mod core;
mod error;
mod export;
mod filetype;
mod git;

use clap::Parser;
use cli::Cli;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();
    let config = cli.into_config();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    // Per-file problems are reported as warnings; only broken output streams fail the run
    if let Err(e) = crate::core::run_scan(Path::new("."), &config, &mut out, &mut err) {
        let _ = writeln!(err, "Error: {}", e);
        return ExitCode::from(2);
    }

    if let Err(e) = out.flush() {
        let _ = writeln!(err, "Error flushing output: {}", e);
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}
