//! Console exporter printing `git lfs` command suggestions
//!
//! Commands are only printed, never run.

use crate::config::Config;
use crate::core::PatternSet;
use crate::error::Result;
use std::io::Write;

/// Human-readable suggestion exporter
pub struct ConsoleExporter;

impl ConsoleExporter {
    /// Write the track and migrate suggestions for `patterns`
    pub fn export(
        &self,
        patterns: &PatternSet,
        config: &Config,
        writer: &mut dyn Write,
    ) -> Result<()> {
        if patterns.is_empty() {
            writeln!(
                writer,
                "No files found exceeding {}MB or detected as binary.",
                config.size_limit_mb
            )?;
            return Ok(());
        }

        writeln!(
            writer,
            "\n--- Suggested git lfs track commands (for .gitattributes) ---"
        )?;
        writeln!(
            writer,
            "# Run these commands to update your .gitattributes file."
        )?;
        for pattern in patterns.iter() {
            writeln!(writer, "git lfs track \"{}\"", pattern)?;
        }

        let include_arg = patterns.include_arg();
        writeln!(
            writer,
            "\n--- Suggested git lfs migrate command (for rewriting history) ---"
        )?;
        writeln!(
            writer,
            "\n# WARNING: The following commands rewrite the history of your repository."
        )?;
        writeln!(
            writer,
            "# It is STRONGLY RECOMMENDED to run this on a fresh clone or to backup your repository first."
        )?;

        writeln!(
            writer,
            "\n# --- Option 1: Migrate ONLY the CURRENT branch (most common) ---"
        )?;
        writeln!(writer, "git lfs migrate import --include=\"{}\"", include_arg)?;

        writeln!(
            writer,
            "\n# --- Option 2: Migrate a SPECIFIC branch (e.g., 'main') ---"
        )?;
        writeln!(
            writer,
            "# git lfs migrate import --include=\"{}\" main",
            include_arg
        )?;

        writeln!(
            writer,
            "\n# --- Option 3: Migrate ALL local and remote branches ---"
        )?;
        writeln!(
            writer,
            "# git lfs migrate import --include=\"{}\" --everything",
            include_arg
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export(patterns: &PatternSet) -> String {
        let mut output = Vec::new();
        ConsoleExporter
            .export(patterns, &Config::default(), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_console_export_empty() {
        let output = export(&PatternSet::default());
        assert_eq!(output, "No files found exceeding 25MB or detected as binary.\n");
    }

    #[test]
    fn test_console_export_uses_configured_limit() {
        let config = Config {
            size_limit_mb: 100,
            ..Config::default()
        };
        let mut output = Vec::new();
        ConsoleExporter
            .export(&PatternSet::default(), &config, &mut output)
            .unwrap();

        assert!(String::from_utf8(output)
            .unwrap()
            .contains("exceeding 100MB"));
    }

    #[test]
    fn test_console_export_sorted_track_lines() {
        let patterns: PatternSet = ["*.png", "*.bin", "assets/x"].into_iter().collect();
        let output = export(&patterns);

        let track_lines: Vec<_> = output
            .lines()
            .filter(|l| l.starts_with("git lfs track"))
            .collect();
        assert_eq!(
            track_lines,
            vec![
                "git lfs track \"*.bin\"",
                "git lfs track \"*.png\"",
                "git lfs track \"assets/x\"",
            ]
        );
    }

    #[test]
    fn test_console_export_migrate_variants() {
        let patterns: PatternSet = ["*.png", "*.bin", "assets/x"].into_iter().collect();
        let output = export(&patterns);

        assert!(output.contains("\ngit lfs migrate import --include=\"*.bin,*.png,assets/x\"\n"));
        assert!(output.contains("\n# git lfs migrate import --include=\"*.bin,*.png,assets/x\" main\n"));
        assert!(output.contains(
            "\n# git lfs migrate import --include=\"*.bin,*.png,assets/x\" --everything\n"
        ));
        assert!(output.contains("# WARNING: The following commands rewrite the history"));
    }

    #[test]
    fn test_console_export_warning_precedes_commands() {
        let patterns: PatternSet = ["*.zip"].into_iter().collect();
        let output = export(&patterns);

        let warning = output.find("# WARNING").unwrap();
        let migrate = output.find("git lfs migrate import").unwrap();
        assert!(warning < migrate);
    }
}
