use serde::{Deserialize, Serialize};

/// A stored book record. Immutable once created.
///
/// `author_id` is a back-reference to an [`Author`](super::Author) id. It is
/// not checked at write time; a book may point at an author that does not
/// (yet) exist, and its `author` field resolves to null until it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub genre: String,

    #[serde(rename = "authorId")]
    pub author_id: String,
}

impl Book {
    pub fn new(id: String, name: String, genre: String, author_id: String) -> Self {
        Self {
            id,
            name,
            genre,
            author_id,
        }
    }
}

/// Fields for a book about to be inserted. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub name: String,
    pub genre: String,
    pub author_id: String,
}
