use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::StorageKind;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "A GraphQL book catalog server with pluggable storage"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Store backend (overrides config)
    #[arg(long, global = true, value_enum, env = "BOOKSHELF_STORAGE")]
    pub storage: Option<StorageArg>,

    /// Data directory for the durable backend (overrides config)
    #[arg(long, global = true, env = "BOOKSHELF_PATH")]
    pub store_path: Option<String>,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new bookshelf project (honors --storage / --store-path)
    Init,

    /// Start the GraphQL server (GraphiQL IDE on GET /graphql)
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "BOOKSHELF_PORT")]
        port: Option<u16>,

        /// Preload the sample catalog before serving
        #[arg(long)]
        seed: bool,
    },

    /// Execute a GraphQL query document and print the JSON response
    #[command(visible_alias = "q")]
    Query {
        /// The query document (bare selections are wrapped in `query { }`)
        document: String,

        /// Named variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation and print the JSON response
    #[command(visible_alias = "m")]
    Mutate {
        /// The mutation selection (wrapped in `mutation { }`)
        document: String,

        /// Named variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Insert the sample catalog into the configured store
    Seed,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StorageArg {
    Memory,
    Sled,
}

impl From<StorageArg> for StorageKind {
    fn from(s: StorageArg) -> Self {
        match s {
            StorageArg::Memory => StorageKind::Memory,
            StorageArg::Sled => StorageKind::Sled,
        }
    }
}
