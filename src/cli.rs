//! CLI argument parsing using clap

use crate::config::Config;
use clap::Parser;

/// Find large or binary files and suggest Git LFS commands
#[derive(Parser, Debug)]
#[command(name = "lfs-advisor")]
#[command(version)]
#[command(
    about = "Find large or binary files and suggest Git LFS commands",
    long_about = "Scans the current directory (skipping .git and submodules) for files \
                  larger than 25MB or detected as binary, and prints suggested \
                  `git lfs track` and `git lfs migrate` commands. Nothing is executed."
)]
pub struct Cli {}

impl Cli {
    /// Build the scan configuration
    ///
    /// Thresholds and extension sets are fixed; the command line only
    /// provides --help and --version.
    pub fn into_config(self) -> Config {
        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["lfs-advisor"]);
        let config = cli.into_config();

        assert_eq!(config.size_limit_mb, 25);
        assert_eq!(config.sniff_len, 1024);
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        let result = Cli::try_parse_from(["lfs-advisor", "some/path"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        let result = Cli::try_parse_from(["lfs-advisor", "--size", "10"]);
        assert!(result.is_err());
    }
}
