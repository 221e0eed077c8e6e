//! Storage layer for the book catalog.
//!
//! The catalog lives behind the [`CatalogStore`] trait — the only component
//! allowed to read or write the two record collections. Two interchangeable
//! backends implement it:
//!
//! - [`MemoryStore`]: plain vectors, process lifetime only
//! - [`SledStore`]: durable sled trees, survives restart
//!
//! The GraphQL layer receives an `Arc<dyn CatalogStore>` at schema build time
//! and never learns which backend is in effect.

mod memory;
mod sled_store;

pub use memory::MemoryStore;
pub use sled_store::SledStore;

use crate::error::Result;
use crate::model::{Author, Book, NewAuthor, NewBook};

/// Record store contract shared by all backends.
///
/// Queries by id return `Ok(None)` for unknown ids — an absent record is a
/// valid outcome, not an error. `insert_*` assigns a fresh unique identifier,
/// appends the record, and returns it as stored. Identifiers are opaque
/// strings; callers compare them, never parse them.
pub trait CatalogStore: Send + Sync {
    fn author(&self, id: &str) -> Result<Option<Author>>;

    fn authors(&self) -> Result<Vec<Author>>;

    fn book(&self, id: &str) -> Result<Option<Book>>;

    fn books(&self) -> Result<Vec<Book>>;

    /// All books whose back-reference equals `author_id`, in store order.
    fn books_by_author(&self, author_id: &str) -> Result<Vec<Book>>;

    fn insert_author(&self, author: NewAuthor) -> Result<Author>;

    /// Inserts without checking that `author_id` resolves; dangling
    /// references are accepted and surface as a null author at read time.
    fn insert_book(&self, book: NewBook) -> Result<Book>;
}

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Random id of `length` chars over a lowercase base36 alphabet.
pub(crate) fn random_id(length: usize) -> String {
    nanoid::format(nanoid::rngs::default, &ID_ALPHABET, length)
}

/// Sequential id: counter value zero-padded to `length`.
pub(crate) fn sequential_id(counter: u64, length: usize) -> String {
    format!("{:0>width$}", counter, width = length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_id_length_and_alphabet() {
        let id = random_id(8);
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| ID_ALPHABET.contains(&c)));
    }

    #[test]
    fn test_sequential_id_padding() {
        assert_eq!(sequential_id(1, 4), "0001");
        assert_eq!(sequential_id(42, 4), "0042");
        // Counters past the padding width keep growing instead of wrapping.
        assert_eq!(sequential_id(123456, 4), "123456");
    }
}
