use anyhow::Result;
use colored::Colorize;

use crate::cli::StorageArg;
use crate::config::{BookshelfConfig, CONFIG_FILE, StorageKind};
use crate::error::BookshelfError;

pub fn handle_init(storage: Option<StorageArg>, path: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(BookshelfError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let mut config = BookshelfConfig::default();
    if let Some(s) = storage {
        config.catalog.storage = s.into();
    }
    if let Some(p) = path {
        config.catalog.path = p;
    }

    // The durable backend needs its data directory up front.
    if config.catalog.storage == StorageKind::Sled {
        std::fs::create_dir_all(config.data_path(&cwd))?;
    }

    config.save(&config_path)?;

    println!(
        "{} bookshelf project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    if config.catalog.storage == StorageKind::Sled {
        println!("  Data:   {}", config.data_path(&cwd).display());
    }

    Ok(())
}
