//! Export of the scan results as suggested commands

mod console;

pub use console::ConsoleExporter;
