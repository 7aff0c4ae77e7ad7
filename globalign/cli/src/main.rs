use clap::Parser;
use eyre::Result;

use args::{Cli, Commands};

mod args;
mod commands;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Align(args) => commands::align(args),
        Commands::Pair(args) => commands::pair(args),
    }
}
