//! Command execution context
//!
//! Loads configuration, applies CLI overrides and builds the data-source
//! client once for the refresh commands.

use std::path::PathBuf;

use crate::cli::GlobalOptions;
use crate::client::EspnClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and client.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Data-source client
    pub client: EspnClient,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = resolve_config(opts)?;
        let client = EspnClient::new(config.resolved_api_base())?;
        log::debug!("Using data source {}", client.base_url());

        Ok(Self { config, client })
    }

    pub fn scores_path(&self) -> PathBuf {
        self.config.scores_path()
    }
}

/// Load config and apply the CLI/env layer on top
pub fn resolve_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_at(opts.config_ref())?;

    if let Some(ref dir) = opts.data_dir {
        config.data_dir = dir.clone();
    }

    Ok(config)
}
