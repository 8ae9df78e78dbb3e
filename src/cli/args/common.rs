//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per stored day
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}
