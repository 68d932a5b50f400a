//! [`StoreEntity`] binding for [`Book`].

use crate::model::{Book, BookCreate, BookFilter, BookId, BookStats, BookSummary, BookUpdate};
use record_store::patch::assign;
use record_store::StoreEntity;

impl StoreEntity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Update = BookUpdate;
    type Filter = BookFilter;
    type Stats = BookStats;
    type Summary = BookSummary;

    fn id(&self) -> BookId {
        self.id
    }

    fn from_create_params(id: BookId, added_at: String, params: BookCreate) -> Self {
        Self {
            id,
            title: params.title,
            author: params.author,
            isbn: params.isbn,
            published_year: params.published_year,
            pages: params.pages,
            available: params.available,
            genre: params.genre,
            summary: params.summary,
            added_at,
        }
    }

    /// Overwrites every field the update carries. `id` and `added_at` are not updatable.
    fn merge(&self, update: BookUpdate) -> Self {
        let mut book = self.clone();
        assign(&mut book.title, update.title);
        assign(&mut book.author, update.author);
        assign(&mut book.isbn, update.isbn);
        assign(&mut book.published_year, update.published_year);
        assign(&mut book.pages, update.pages);
        assign(&mut book.available, update.available);
        assign(&mut book.genre, update.genre);
        assign(&mut book.summary, update.summary);
        book
    }
}
