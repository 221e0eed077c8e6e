//! GraphQL schema and resolvers for the book catalog.
//!
//! Exposes the two entity types and their relation fields over a single
//! `/graphql` endpoint. Nested fields resolve lazily, one store lookup per
//! requested field — the N+1 shape of the original design is kept on purpose,
//! it is harmless at catalog scale.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL IDE on GET /graphql)
//! bookshelf serve --port 4000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ books { name genre author { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addAuthor(name: "Terry Pratchett", age: 66) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book(id)`, `author(id)`, `books`, `authors`
//! - **Mutations**: `addAuthor(name, age)`, `addBook(name, genre, authorId)`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{build_router, run_server};
pub use types::*;
