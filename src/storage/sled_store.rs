use std::path::Path;

use crate::config::IdMode;
use crate::error::{BookshelfError, Result};
use crate::model::{Author, Book, NewAuthor, NewBook};

use super::{CatalogStore, random_id, sequential_id};

const AUTHORS_TREE: &str = "authors";
const BOOKS_TREE: &str = "books";
const META_TREE: &str = "meta";
const NEXT_ID_KEY: &str = "next_id";

/// Durable catalog backend on top of sled. Records are JSON-encoded and keyed
/// by id; the sequential id counter lives in a meta tree so it survives
/// restarts. The data path is opaque configuration handed in by the caller.
pub struct SledStore {
    db: sled::Db,
    authors: sled::Tree,
    books: sled::Tree,
    meta: sled::Tree,
    id_mode: IdMode,
    id_length: usize,
}

impl SledStore {
    pub fn open<P: AsRef<Path>>(path: P, id_mode: IdMode, id_length: usize) -> Result<Self> {
        let db = sled::open(path)?;
        let authors = db.open_tree(AUTHORS_TREE)?;
        let books = db.open_tree(BOOKS_TREE)?;
        let meta = db.open_tree(META_TREE)?;
        Ok(Self {
            db,
            authors,
            books,
            meta,
            id_mode,
            id_length,
        })
    }

    fn next_counter(&self) -> Result<u64> {
        let bytes = self
            .meta
            .update_and_fetch(NEXT_ID_KEY, |old| {
                let next = old
                    .and_then(|b| <[u8; 8]>::try_from(b).ok())
                    .map(u64::from_be_bytes)
                    .unwrap_or(0)
                    + 1;
                Some(next.to_be_bytes().to_vec())
            })?
            .ok_or_else(|| BookshelfError::Storage("id counter vanished".to_string()))?;

        let counter = <[u8; 8]>::try_from(bytes.as_ref())
            .map_err(|_| BookshelfError::Storage("malformed id counter".to_string()))?;
        Ok(u64::from_be_bytes(counter))
    }

    fn generate_id(&self) -> Result<String> {
        match self.id_mode {
            IdMode::Sequential => Ok(sequential_id(self.next_counter()?, self.id_length)),
            IdMode::Random => Ok(random_id(self.id_length)),
        }
    }

    fn get_record<T: serde::de::DeserializeOwned>(
        tree: &sled::Tree,
        id: &str,
    ) -> Result<Option<T>> {
        match tree.get(id.as_bytes())? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }

    fn list_records<T: serde::de::DeserializeOwned>(tree: &sled::Tree) -> Result<Vec<T>> {
        let mut records = Vec::new();
        for entry in tree.iter() {
            let (_, data) = entry?;
            records.push(serde_json::from_slice(&data)?);
        }
        Ok(records)
    }
}

impl CatalogStore for SledStore {
    fn author(&self, id: &str) -> Result<Option<Author>> {
        Self::get_record(&self.authors, id)
    }

    fn authors(&self) -> Result<Vec<Author>> {
        Self::list_records(&self.authors)
    }

    fn book(&self, id: &str) -> Result<Option<Book>> {
        Self::get_record(&self.books, id)
    }

    fn books(&self) -> Result<Vec<Book>> {
        Self::list_records(&self.books)
    }

    fn books_by_author(&self, author_id: &str) -> Result<Vec<Book>> {
        Ok(Self::list_records::<Book>(&self.books)?
            .into_iter()
            .filter(|b| b.author_id == author_id)
            .collect())
    }

    fn insert_author(&self, author: NewAuthor) -> Result<Author> {
        let id = self.generate_id()?;
        tracing::info!(id = %id, name = %author.name, "Inserting author");

        let author = Author::new(id, author.name, author.age);
        self.authors
            .insert(author.id.as_bytes(), serde_json::to_vec(&author)?)?;
        self.db.flush()?;
        Ok(author)
    }

    fn insert_book(&self, book: NewBook) -> Result<Book> {
        let id = self.generate_id()?;
        tracing::info!(id = %id, name = %book.name, author_id = %book.author_id, "Inserting book");

        let book = Book::new(id, book.name, book.genre, book.author_id);
        self.books
            .insert(book.id.as_bytes(), serde_json::to_vec(&book)?)?;
        self.db.flush()?;
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn new_author(name: &str, age: i32) -> NewAuthor {
        NewAuthor {
            name: name.to_string(),
            age,
        }
    }

    fn new_book(name: &str, genre: &str, author_id: &str) -> NewBook {
        NewBook {
            name: name.to_string(),
            genre: genre.to_string(),
            author_id: author_id.to_string(),
        }
    }

    #[test]
    fn test_insert_and_find() {
        let temp_dir = TempDir::new().unwrap();
        let store = SledStore::open(temp_dir.path(), IdMode::Sequential, 4).unwrap();

        let author = store.insert_author(new_author("Terry Pratchett", 66)).unwrap();
        let book = store
            .insert_book(new_book("The Colour of Magic", "Fantasy", &author.id))
            .unwrap();

        assert_eq!(store.author(&author.id).unwrap().unwrap(), author);
        assert_eq!(store.book(&book.id).unwrap().unwrap(), book);
        assert!(store.author("no-such-id").unwrap().is_none());
    }

    #[test]
    fn test_records_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();

        let author_id = {
            let store = SledStore::open(temp_dir.path(), IdMode::Sequential, 4).unwrap();
            let author = store.insert_author(new_author("Brandon Sanderson", 42)).unwrap();
            store
                .insert_book(new_book("The Final Empire", "Fantasy", &author.id))
                .unwrap();
            author.id
        };

        let store = SledStore::open(temp_dir.path(), IdMode::Sequential, 4).unwrap();
        let author = store.author(&author_id).unwrap().unwrap();
        assert_eq!(author.name, "Brandon Sanderson");

        let books = store.books_by_author(&author_id).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "The Final Empire");
    }

    #[test]
    fn test_sequential_counter_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = SledStore::open(temp_dir.path(), IdMode::Sequential, 4).unwrap();
            assert_eq!(store.insert_author(new_author("a", 1)).unwrap().id, "0001");
            assert_eq!(store.insert_author(new_author("b", 2)).unwrap().id, "0002");
        }

        let store = SledStore::open(temp_dir.path(), IdMode::Sequential, 4).unwrap();
        assert_eq!(store.insert_author(new_author("c", 3)).unwrap().id, "0003");
    }

    #[test]
    fn test_authors_and_books_use_one_counter() {
        let temp_dir = TempDir::new().unwrap();
        let store = SledStore::open(temp_dir.path(), IdMode::Sequential, 4).unwrap();

        let author = store.insert_author(new_author("a", 1)).unwrap();
        let book = store.insert_book(new_book("b", "g", &author.id)).unwrap();

        // Ids are unique across both collections, not per collection.
        assert_ne!(author.id, book.id);
    }
}
