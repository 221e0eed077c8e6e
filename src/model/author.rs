use serde::{Deserialize, Serialize};

/// A stored author record. Immutable once created; there are no update or
/// delete operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub age: i32,
}

impl Author {
    pub fn new(id: String, name: String, age: i32) -> Self {
        Self { id, name, age }
    }
}

/// Fields for an author about to be inserted. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub age: i32,
}
