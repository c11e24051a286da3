use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pokeinfo::config::{Config, LookupSource};
use pokeinfo::logging::{init_tracing, LogTarget};
use pokeinfo::{lookup, show, ui};

#[derive(Debug, Parser)]
#[command(name = "pokeinfo", version, about = "Look up pokemon in the terminal")]
struct Cli {
    /// Config file (default: <config_dir>/pokeinfo/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the built-in roster instead of the GraphQL API
    #[arg(long, global = true)]
    offline: bool,

    /// Name to submit on start
    #[arg(long)]
    name: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up one pokemon and print it
    Show {
        /// Pokemon name
        name: String,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;
    if cli.offline {
        config.lookup.source = LookupSource::Offline;
    }
    Ok(config)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let target = match cli.command {
        Some(Command::Show { .. }) => LogTarget::Stderr,
        None => LogTarget::File,
    };
    init_tracing(&config.logging, target)?;

    let lookup = lookup::from_config(&config.lookup).context("Failed to set up lookup")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    match cli.command {
        Some(Command::Show { name }) => {
            let view = runtime.block_on(show::show(lookup, &name));
            println!("{}", view);
            if view.is_fallback() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            runtime.block_on(ui::run(&config, lookup, cli.name))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
