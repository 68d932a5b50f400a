//! # RecordClient Trait
//!
//! Common interface for resource-specific clients. Wrappers provide `inner()` and an error
//! mapping and get `get`, `delete`, `list`, `stats` and `count` for free.
use crate::{Query, StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use record_store::stats::Accumulator;
/// use record_store::{RecordClient, StoreClient, StoreEntity, StoreError, Unconstrained};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u64, text: String }
///
/// #[derive(Default)]
/// struct NoteCount(usize);
///
/// impl Accumulator<Note> for NoteCount {
///     type Output = usize;
///     fn observe(&mut self, _: &Note) { self.0 += 1; }
///     fn finish(self) -> usize { self.0 }
/// }
///
/// impl StoreEntity for Note {
///     type Id = u64;
///     type Create = String;
///     type Update = Option<String>;
///     type Filter = Unconstrained;
///     type Stats = usize;
///     type Summary = NoteCount;
///
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn from_create_params(id: u64, _created_at: String, text: String) -> Self {
///         Self { id, text }
///     }
///     fn merge(&self, update: Option<String>) -> Self {
///         Self { id: self.id, text: update.unwrap_or_else(|| self.text.clone()) }
///     }
/// }
///
/// #[derive(Debug)]
/// struct NoteError(String);
///
/// struct NoteClient { inner: StoreClient<Note> }
///
/// #[async_trait]
/// impl RecordClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &StoreClient<Note> { &self.inner }
///
///     fn map_error(e: StoreError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get(), delete(), list(), stats() and count() are provided automatically.
///     let _ = client.get(1).await;
///     let _ = client.stats().await;
/// }
/// ```
#[async_trait]
pub trait RecordClient<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by ID, returning the removed record.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Filtered, optionally paginated listing.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: Query<T::Filter>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Aggregate statistics over the whole store.
    #[tracing::instrument(skip(self))]
    async fn stats(&self) -> Result<T::Stats, Self::Error> {
        self.inner().stats().await.map_err(Self::map_error)
    }

    /// Number of live records.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        self.inner().count().await.map_err(Self::map_error)
    }
}
