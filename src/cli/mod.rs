//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;
use std::path::PathBuf;

pub mod args;
pub mod completions;
pub mod context;
pub mod full;
pub mod live;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// scorecache - keeps a date-bucketed JSON cache of scoreboard results
#[derive(Parser, Debug)]
#[command(name = "scorecache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "SCORECACHE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the data directory (holds scores.json and teams/)
    #[arg(long, global = true, env = "SCORECACHE_DATA_DIR", hide_env = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SCORECACHE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Refresh every day in a window around today, then team schedules
    #[command(after_help = "EXAMPLES:\n  \
        scorecache full                       # Configured window (3 back, 3 forward)\n  \
        scorecache full --days-back 7         # Wider history\n  \
        scorecache full --no-teams            # Skip team schedule snapshots")]
    Full(FullArgs),

    /// Refresh only today's in-progress games
    Live,

    /// Show what the score store currently holds
    Status {
        /// Output format: table (default), json
        #[arg(long, short = 'o', default_value = "table")]
        format: OutputFormat,
    },

    /// Generate shell completions
    #[command(after_help = "\
  bash:   scorecache completion bash > /etc/bash_completion.d/scorecache
  zsh:    scorecache completion zsh > \"${fpath[1]}/_scorecache\"
  fish:   scorecache completion fish > ~/.config/fish/completions/scorecache.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Full refresh window options
#[derive(Debug, Clone, Args, Default)]
pub struct FullArgs {
    /// Days before today to refresh (default from config: 3)
    #[arg(long)]
    pub days_back: Option<u32>,

    /// Days after today to refresh (default from config: 3)
    #[arg(long)]
    pub days_forward: Option<u32>,

    /// Skip refreshing team schedule snapshots
    #[arg(long)]
    pub no_teams: bool,
}
