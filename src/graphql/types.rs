use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use crate::model;

use super::schema::store;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub name: String,
    pub genre: String,

    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Book {
    /// The author this book points at. Null when the back-reference does not
    /// resolve; a dangling reference never fails the request.
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author = store(ctx).author(&self.author_id)?;
        Ok(author.map(Into::into))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: ID(b.id),
            name: b.name,
            genre: b.genre,
            author_id: b.author_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub age: i32,
}

#[ComplexObject]
impl Author {
    /// Computed from book back-references on demand; no inverse list is
    /// stored. Store iteration order, no defined sort.
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = store(ctx).books_by_author(&self.id)?;
        Ok(books.into_iter().map(Into::into).collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
            age: a.age,
        }
    }
}
