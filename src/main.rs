//! scorecache - polls a public scoreboard API into JSON files for a static site

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Log to stdout; `RUST_LOG` overrides the default level
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Full(args) => cli::full::run(&opts, &args).await,
        Commands::Live => cli::live::run(&opts).await,
        Commands::Status { format } => cli::status::run(&opts, format),
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
