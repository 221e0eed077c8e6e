use std::sync::RwLock;

use crate::config::IdMode;
use crate::error::{BookshelfError, Result};
use crate::model::{Author, Book, NewAuthor, NewBook};

use super::{CatalogStore, random_id, sequential_id};

#[derive(Default)]
struct Inner {
    authors: Vec<Author>,
    books: Vec<Book>,
    next_id: u64,
}

/// In-memory catalog backend. Lives for the process only; every restart
/// starts from an empty catalog.
///
/// Both collections sit behind one lock, so an insert completes fully before
/// the next begins and id generation can never hand out duplicates.
pub struct MemoryStore {
    inner: RwLock<Inner>,
    id_mode: IdMode,
    id_length: usize,
}

impl MemoryStore {
    pub fn new(id_mode: IdMode, id_length: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            id_mode,
            id_length,
        }
    }

    fn generate_id(&self, inner: &mut Inner) -> String {
        match self.id_mode {
            IdMode::Sequential => {
                inner.next_id += 1;
                sequential_id(inner.next_id, self.id_length)
            }
            IdMode::Random => random_id(self.id_length),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(IdMode::Sequential, 4)
    }
}

fn poisoned() -> BookshelfError {
    BookshelfError::Storage("memory store lock poisoned".to_string())
}

impl CatalogStore for MemoryStore {
    fn author(&self, id: &str) -> Result<Option<Author>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.authors.iter().find(|a| a.id == id).cloned())
    }

    fn authors(&self) -> Result<Vec<Author>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.authors.clone())
    }

    fn book(&self, id: &str) -> Result<Option<Book>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.books.iter().find(|b| b.id == id).cloned())
    }

    fn books(&self) -> Result<Vec<Book>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.books.clone())
    }

    fn books_by_author(&self, author_id: &str) -> Result<Vec<Book>> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect())
    }

    fn insert_author(&self, author: NewAuthor) -> Result<Author> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let id = self.generate_id(&mut inner);
        tracing::info!(id = %id, name = %author.name, "Inserting author");

        let author = Author::new(id, author.name, author.age);
        inner.authors.push(author.clone());
        Ok(author)
    }

    fn insert_book(&self, book: NewBook) -> Result<Book> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let id = self.generate_id(&mut inner);
        tracing::info!(id = %id, name = %book.name, author_id = %book.author_id, "Inserting book");

        let book = Book::new(id, book.name, book.genre, book.author_id);
        inner.books.push(book.clone());
        Ok(book)
    }
}
