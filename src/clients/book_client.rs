//! # Book Client
//!
//! Provides a high-level API for interacting with the `Book` actor. It wraps a
//! `StoreClient<Book>`, validates input before anything is sent, and maps store errors
//! into [`BookError`].
use crate::book_actor::BookError;
use crate::model::{
    AuthorSearchParams, Book, BookCreate, BookId, BookListParams, BookUpdate, Validate,
};
use async_trait::async_trait;
use record_store::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Book actor.
#[derive(Clone)]
pub struct BookClient {
    inner: StoreClient<Book>,
}

impl BookClient {
    pub fn new(inner: StoreClient<Book>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &StoreClient<Book> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        BookError::from(e)
    }
}

impl BookClient {
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn create_book(&self, params: BookCreate) -> Result<Book, BookError> {
        params.validate()?;
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_book(&self, id: BookId, update: BookUpdate) -> Result<Book, BookError> {
        update.validate()?;
        debug!("Sending request");
        Ok(self.inner.update(id, update).await?)
    }

    /// Filtered, paginated listing.
    #[instrument(skip(self))]
    pub async fn list_books(&self, params: BookListParams) -> Result<Vec<Book>, BookError> {
        let query = params.into_query()?;
        self.list(query).await
    }

    /// Every book by `author` (case-insensitive), narrowed by the optional extras.
    #[instrument(skip(self))]
    pub async fn search_by_author(
        &self,
        author: &str,
        params: AuthorSearchParams,
    ) -> Result<Vec<Book>, BookError> {
        let query = params.into_query(author)?;
        self.list(query).await
    }
}
