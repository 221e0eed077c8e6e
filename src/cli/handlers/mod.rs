mod init;
mod mutate;
mod query;
mod seed;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use seed::handle_seed;
pub use serve::handle_serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::config::{BookshelfConfig, StorageKind};
use crate::storage::{CatalogStore, MemoryStore, SledStore};

/// Common context passed to all command handlers.
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub root: PathBuf,
    pub store: Arc<dyn CatalogStore>,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig, root: PathBuf) -> Result<Self> {
        let store = build_store(&config, &root)?;
        Ok(Self {
            config,
            root,
            store,
        })
    }
}

/// Open the store backend the config selects. The schema layer only ever
/// sees the returned trait object.
pub fn build_store(config: &BookshelfConfig, root: &Path) -> Result<Arc<dyn CatalogStore>> {
    let id_mode = config.catalog.id_mode;
    let id_length = config.catalog.id_length;

    let store: Arc<dyn CatalogStore> = match config.catalog.storage {
        StorageKind::Memory => Arc::new(MemoryStore::new(id_mode, id_length)),
        StorageKind::Sled => Arc::new(SledStore::open(
            config.data_path(root),
            id_mode,
            id_length,
        )?),
    };
    Ok(store)
}
