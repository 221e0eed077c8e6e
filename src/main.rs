use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_seed, handle_serve,
};
use bookshelf::cli::{Cli, Commands, StorageArg};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let Cli {
        command,
        config,
        storage,
        store_path,
        verbose,
        log_file,
    } = Cli::parse();

    logging::init(verbose, log_file);

    match command {
        Commands::Init => handle_init(storage, store_path),
        Commands::Serve { port, seed } => {
            let ctx = load_context(config, storage, store_path)?;
            handle_serve(ctx, port, seed)
        }
        Commands::Query {
            document,
            variables,
        } => {
            let ctx = load_context(config, storage, store_path)?;
            handle_query(ctx, document, variables)
        }
        Commands::Mutate {
            document,
            variables,
        } => {
            let ctx = load_context(config, storage, store_path)?;
            handle_mutate(ctx, document, variables)
        }
        Commands::Seed => {
            let ctx = load_context(config, storage, store_path)?;
            handle_seed(ctx)
        }
    }
}

fn load_context(
    config_path: Option<String>,
    storage: Option<StorageArg>,
    store_path: Option<String>,
) -> Result<CommandContext> {
    let (mut config, root) = load_config(config_path)?;

    if let Some(s) = storage {
        config.catalog.storage = s.into();
    }
    if let Some(p) = store_path {
        config.catalog.path = p;
    }

    CommandContext::new(config, root)
}

fn load_config(config_path: Option<String>) -> Result<(BookshelfConfig, PathBuf)> {
    if let Some(path) = config_path {
        let path = Path::new(&path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: BookshelfConfig = toml::from_str(&content)?;
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or(std::env::current_dir()?);
        return Ok((config, root));
    }

    let cwd = std::env::current_dir()?;
    BookshelfConfig::load(&cwd).context("Failed to load bookshelf configuration")
}
