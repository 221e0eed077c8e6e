//! Sample catalog for demos and tests.
//!
//! Wires the classic tutorial data set — three fantasy/sci-fi authors and six
//! books — into a store through the normal insert path, so ids come out of
//! whatever id mode the store is configured with.

use crate::error::{BookshelfError, Result};
use crate::model::{NewAuthor, NewBook};
use crate::storage::CatalogStore;

struct SeedAuthor {
    name: &'static str,
    age: i32,
    books: &'static [(&'static str, &'static str)],
}

const SAMPLE_CATALOG: &[SeedAuthor] = &[
    SeedAuthor {
        name: "Patrick Rothfuss",
        age: 44,
        books: &[("Name of the Wind", "Fantasy")],
    },
    SeedAuthor {
        name: "Brandon Sanderson",
        age: 42,
        books: &[
            ("The Final Empire", "Fantasy"),
            ("The Hero of Ages", "Fantasy"),
        ],
    },
    SeedAuthor {
        name: "Terry Pratchett",
        age: 66,
        books: &[
            ("The Long Earth", "Sci-Fi"),
            ("The Colour of Magic", "Fantasy"),
            ("The Light Fantastic", "Fantasy"),
        ],
    },
];

/// Counts of what a seeding run inserted.
pub struct SeedSummary {
    pub authors: usize,
    pub books: usize,
}

/// Insert the sample catalog. Refuses when the store already holds authors,
/// so re-running `seed` cannot duplicate the data set.
pub fn seed_catalog(store: &dyn CatalogStore) -> Result<SeedSummary> {
    if !store.authors()?.is_empty() {
        return Err(BookshelfError::Storage(
            "store already contains authors; refusing to seed".to_string(),
        ));
    }

    let mut summary = SeedSummary {
        authors: 0,
        books: 0,
    };

    for entry in SAMPLE_CATALOG {
        let author = store.insert_author(NewAuthor {
            name: entry.name.to_string(),
            age: entry.age,
        })?;
        summary.authors += 1;

        for (name, genre) in entry.books {
            store.insert_book(NewBook {
                name: name.to_string(),
                genre: genre.to_string(),
                author_id: author.id.clone(),
            })?;
            summary.books += 1;
        }
    }

    tracing::info!(
        authors = summary.authors,
        books = summary.books,
        "Seeded sample catalog"
    );
    Ok(summary)
}
