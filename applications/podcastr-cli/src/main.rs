//! Podcastr - terminal podcast player

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use podcastr_cli::{
    config::CliConfig,
    listing::render_catalog,
    session::{self, Session},
};
use podcastr_core::Catalog;
use std::{io, path::PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Podcastr Player in the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the episodes of a catalog
    List {
        /// Catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Start an interactive session reading commands from stdin
    Play {
        /// Catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Episode to start with
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Queue only the selected episode
        #[arg(long)]
        single: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Logs go to stderr so stdout stays the player display
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::List { catalog } => {
            let catalog = load_catalog(&config, catalog)?;
            print!("{}", render_catalog(&catalog));
        }
        Commands::Play {
            catalog,
            index,
            single,
        } => {
            let catalog = load_catalog(&config, catalog)?;
            play(&config, catalog, index, single)?;
        }
    }

    Ok(())
}

fn load_catalog(config: &CliConfig, cli_value: Option<PathBuf>) -> Result<Catalog> {
    let path = config.catalog_path(cli_value)?;
    Catalog::load(&path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

fn play(config: &CliConfig, catalog: Catalog, index: usize, single: bool) -> Result<()> {
    let mut session = Session::new(catalog.episodes(), &config.player);

    if single {
        let episode = catalog
            .get(index)
            .cloned()
            .with_context(|| format!("No episode at index {index} ({} in catalog)", catalog.len()))?;
        info!("Playing single episode {}", episode.title);
        session.start_single(episode);
    } else {
        info!("Playing {} episodes from index {}", catalog.len(), index);
        session.start_list(catalog.into_episodes(), index);
    }

    let stdin = io::stdin();
    session::run(&mut session, stdin.lock(), io::stdout().lock())
}
