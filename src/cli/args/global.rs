//! Global CLI options shared across all commands

use std::path::PathBuf;

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path
    pub config: Option<String>,

    /// Data directory override
    pub data_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            data_dir: cli.data_dir.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_copies_globals() {
        let cli = Cli::parse_from([
            "scorecache",
            "--config",
            "/etc/scorecache.yaml",
            "--data-dir",
            "/srv/data",
            "live",
        ]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.config_ref(), Some("/etc/scorecache.yaml"));
        assert_eq!(opts.data_dir, Some(PathBuf::from("/srv/data")));
    }

    #[test]
    fn test_defaults_are_none() {
        let opts = GlobalOptions::default();
        assert_eq!(opts.config_ref(), None);
        assert!(opts.data_dir.is_none());
    }
}
