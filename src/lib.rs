//! # Bookshelf - a GraphQL book catalog server
//!
//! Bookshelf is a small catalog application: authors have many books, books
//! belong to one author, and a GraphQL API resolves that graph against a
//! pluggable record store. It exists as a teaching-sized server — linear
//! scans over tiny collections, one endpoint, no ceremony.
//!
//! ## Features
//!
//! - **GraphQL API**: query books and authors, create them via mutations
//! - **Pluggable storage**: in-memory arrays or a durable sled database
//!   behind one trait; the schema layer never knows which
//! - **Lazy relations**: a book's author and an author's books resolve on
//!   demand through back-reference lookups
//! - **CLI**: serve the API, or run query/mutation documents directly
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a project (writes .bookshelf.toml)
//! bookshelf init
//!
//! # Load the sample catalog
//! bookshelf seed
//!
//! # Start the server (GraphiQL IDE on GET /graphql)
//! bookshelf serve
//!
//! # Or query straight from the shell
//! bookshelf query '{ books { name author { name } } }'
//! bookshelf mutate 'addBook(name: "Elantris", genre: "Fantasy", authorId: "0003") { id }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (Book, Author)
//! - [`storage`]: The store trait and its memory/sled backends
//! - [`seed`]: Sample catalog loader

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and the axum server around them.
pub mod graphql;

/// Data models for the catalog.
///
/// Includes `Book`, `Author`, and their insert payloads.
pub mod model;

/// Record storage behind the `CatalogStore` trait.
///
/// In-memory and sled-backed variants, interchangeable at runtime.
pub mod storage;

/// Sample catalog loader for demos and tests.
pub mod seed;

pub mod logging;
