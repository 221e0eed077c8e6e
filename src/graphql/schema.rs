use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::model::{NewAuthor, NewBook};
use crate::storage::CatalogStore;

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around an injected store. The resolvers only ever see the
/// trait object, so tests hand in an isolated MemoryStore and the server
/// hands in whatever the config selected.
pub fn build_schema(store: Arc<dyn CatalogStore>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> &'a dyn CatalogStore {
    ctx.data_unchecked::<Arc<dyn CatalogStore>>().as_ref()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single book by id. Unknown ids resolve to null, not an error.
    async fn book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        let book = store(ctx).book(&id)?;
        Ok(book.map(Into::into))
    }

    /// Get a single author by id. Unknown ids resolve to null, not an error.
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        let author = store(ctx).author(&id)?;
        Ok(author.map(Into::into))
    }

    /// List all books, unfiltered, in store order.
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = store(ctx).books()?;
        Ok(books.into_iter().map(Into::into).collect())
    }

    /// List all authors, unfiltered, in store order.
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let authors = store(ctx).authors()?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create an author. Both arguments are required; a document missing
    /// either is rejected before this resolver runs, so no partial write can
    /// happen.
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
    ) -> async_graphql::Result<Author> {
        let author = store(ctx).insert_author(NewAuthor { name, age })?;
        Ok(author.into())
    }

    /// Create a book. `author_id` is not checked against existing authors —
    /// a dangling reference is stored as-is and resolves to a null `author`
    /// field at read time.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        author_id: ID,
    ) -> async_graphql::Result<Book> {
        let book = store(ctx).insert_book(NewBook {
            name,
            genre,
            author_id: author_id.to_string(),
        })?;
        Ok(book.into())
    }
}
