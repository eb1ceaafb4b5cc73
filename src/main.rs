//! ansiart CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ansiart::cli::{Cli, Commands, ConfigCommands};
use ansiart::Config;

/// Log filter variable, e.g. `ANSIART_LOG=ansiart::terminal=trace`.
const LOG_ENV: &str = "ANSIART_LOG";

#[cfg(not(tarpaulin_include))]
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Render(args) => commands::render::handle(&args, &config),
        Commands::Decode { file } => commands::inspect::handle_decode(&file, &config.art),
        Commands::Width { text } => {
            commands::inspect::handle_width(&text);
            Ok(())
        }
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&config),
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
