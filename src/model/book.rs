//! Books held by the library catalog.
//!
//! # Record Store
//! [`Book`] implements the [`StoreEntity`](record_store::StoreEntity) trait,
//! allowing it to be managed by a [`StoreActor`](record_store::StoreActor).
//!
//! See `impl StoreEntity for Book` for details on:
//! - Creation parameters ([`BookCreate`])
//! - Update parameters ([`BookUpdate`])
//! - Filtering ([`BookFilter`]) and statistics ([`BookStats`])
use super::validation::{self, Validate, ValidationError, Validator};
use record_store::stats::{average, Accumulator, Tally};
use record_store::{flag_matches, text_matches, Bounds, Predicate, Query};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
    pub pages: u32,
    pub available: bool,
    pub genre: String,
    pub summary: Option<String>,
    pub added_at: String,
}

fn default_available() -> bool {
    true
}

/// Payload for creating a book. `available` defaults to `true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_year: i32,
    pub pages: u32,
    #[serde(default = "default_available")]
    pub available: bool,
    pub genre: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Validate for BookCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.length("title", &self.title, 1, 200)
            .length("author", &self.author, 1, 100)
            .length("isbn", &self.isbn, 13, 13)
            .range("published_year", self.published_year.into(), 1000, 2100)
            .positive("pages", self.pages.into());
        if let Some(summary) = &self.summary {
            v.max_length("summary", summary, 1000);
        }
        v.finish()
    }
}

/// Sparse update. Keys left out are untouched; `summary: null` clears the summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub pages: Option<u32>,
    pub available: Option<bool>,
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "record_store::patch::nullable")]
    pub summary: Option<Option<String>>,
}

impl Validate for BookUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        if let Some(title) = &self.title {
            v.length("title", title, 1, 200);
        }
        if let Some(author) = &self.author {
            v.length("author", author, 1, 100);
        }
        if let Some(isbn) = &self.isbn {
            v.length("isbn", isbn, 13, 13);
        }
        if let Some(year) = self.published_year {
            v.range("published_year", year.into(), 1000, 2100);
        }
        if let Some(pages) = self.pages {
            v.positive("pages", pages.into());
        }
        if let Some(Some(summary)) = &self.summary {
            v.max_length("summary", summary, 1000);
        }
        v.finish()
    }
}

/// Optional predicates over books, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub genre: Option<String>,
    pub author: Option<String>,
    pub available: Option<bool>,
    pub pages: Bounds<u32>,
}

impl Predicate<Book> for BookFilter {
    fn matches(&self, book: &Book) -> bool {
        text_matches(self.genre.as_deref(), &book.genre)
            && text_matches(self.author.as_deref(), &book.author)
            && flag_matches(self.available, book.available)
            && self.pages.contains(book.pages)
    }
}

/// Raw `GET /books` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookListParams {
    pub genre: Option<String>,
    pub author: Option<String>,
    pub available: Option<bool>,
    pub min_pages: Option<i64>,
    pub max_pages: Option<i64>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl BookListParams {
    /// Validates the parameters and turns them into a paginated query.
    pub fn into_query(self) -> Result<Query<BookFilter>, ValidationError> {
        let mut v = Validator::new();
        if let Some(min) = self.min_pages {
            v.range("min_pages", min, 0, i64::MAX);
        }
        if let Some(max) = self.max_pages {
            v.range("max_pages", max, 0, i64::MAX);
        }
        v.finish()?;
        let page = validation::page(self.skip, self.limit)?;

        let filter = BookFilter {
            genre: self.genre,
            author: self.author,
            available: self.available,
            pages: Bounds::new(
                self.min_pages.map(clamp_pages),
                self.max_pages.map(clamp_pages),
            ),
        };
        Ok(Query::paged(filter, page))
    }
}

fn clamp_pages(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Raw `GET /search/{author}/books` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorSearchParams {
    pub genre: Option<String>,
    pub available: Option<bool>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl AuthorSearchParams {
    /// Binds the path author and applies pagination only when it was asked for.
    pub fn into_query(self, author: &str) -> Result<Query<BookFilter>, ValidationError> {
        let filter = BookFilter {
            author: Some(author.to_owned()),
            genre: self.genre,
            available: self.available,
            ..Default::default()
        };
        Ok(Query {
            filter,
            page: validation::optional_page(self.skip, self.limit)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookStats {
    pub total_books: u64,
    pub available_books: u64,
    pub borrowed_books: u64,
    pub total_pages: u64,
    pub average_pages: f64,
    pub books_per_genre: Tally,
    pub books_per_author: Tally,
}

/// Single-pass fold behind [`BookStats`].
#[derive(Debug, Default)]
pub struct BookSummary {
    total: u64,
    available: u64,
    pages: u64,
    genres: Tally,
    authors: Tally,
}

impl Accumulator<Book> for BookSummary {
    type Output = BookStats;

    fn observe(&mut self, book: &Book) {
        self.total += 1;
        if book.available {
            self.available += 1;
        }
        self.pages += u64::from(book.pages);
        self.genres.record(&book.genre);
        self.authors.record(&book.author);
    }

    fn finish(self) -> BookStats {
        BookStats {
            total_books: self.total,
            available_books: self.available,
            borrowed_books: self.total - self.available,
            total_pages: self.pages,
            average_pages: average(self.pages as f64, self.total),
            books_per_genre: self.genres,
            books_per_author: self.authors,
        }
    }
}
