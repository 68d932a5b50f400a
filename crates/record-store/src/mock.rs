//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real [`StoreClient<T>`] whose requests are answered from a
//! queue of scripted responses instead of a [`StoreActor`](crate::StoreActor). Use it to test
//! logic that sits *around* a store client (typed client wrappers, HTTP handlers) fast and
//! deterministically, including failures a live store never produces.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | Scripted responses | Real records |
//! | **Error Injection** | Easy (`return_err`) | Only `NotFound` |
//! | **Use Case** | Client wrappers, handlers | The store itself, full system |
//!
//! ```rust
//! use record_store::mock::MockClient;
//! use record_store::stats::Accumulator;
//! use record_store::{StoreEntity, StoreError, Unconstrained};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Note { id: u64 }
//! #[derive(Default)]
//! struct NoteCount(usize);
//! impl Accumulator<Note> for NoteCount {
//!     type Output = usize;
//!     fn observe(&mut self, _: &Note) { self.0 += 1; }
//!     fn finish(self) -> usize { self.0 }
//! }
//! impl StoreEntity for Note {
//!     type Id = u64; type Create = (); type Update = (); type Filter = Unconstrained;
//!     type Stats = usize; type Summary = NoteCount;
//!     fn id(&self) -> u64 { self.id }
//!     fn from_create_params(id: u64, _: String, _: ()) -> Self { Self { id } }
//!     fn merge(&self, _: ()) -> Self { self.clone() }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_get(1).return_ok(Note { id: 1 });
//!     mock.expect_get(2).return_err(StoreError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await, Ok(Note { id: 1 }));
//!     assert_eq!(client.get(2).await, Err(StoreError::ActorClosed));
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the exact payload a wrapper sends, use [`create_mock_client`] and the
//! `expect_*` receiver helpers instead.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::query::Query;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: StoreEntity> {
    Create(Result<T, StoreError>),
    Get(Result<T, StoreError>),
    List(Result<Vec<T>, StoreError>),
    Update(Result<T, StoreError>),
    Delete(Result<T, StoreError>),
    Stats(Result<T::Stats, StoreError>),
    Count(Result<usize, StoreError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().expect("mock queue poisoned").pop_front();
                match (request, next) {
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::List { respond_to, .. }, Some(Expectation::List(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Update { respond_to, .. }, Some(Expectation::Update(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Delete { respond_to, .. }, Some(Expectation::Delete(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Stats { respond_to }, Some(Expectation::Stats(r))) => {
                        let _ = respond_to.send(r);
                    }
                    (StoreRequest::Count { respond_to }, Some(Expectation::Count(r))) => {
                        let _ = respond_to.send(r);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Create)
    }

    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Get)
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_update(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Update)
    }

    pub fn expect_delete(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Delete)
    }

    pub fn expect_stats(&mut self) -> ExpectationBuilder<T, T::Stats> {
        self.builder(Expectation::Stats)
    }

    pub fn expect_count(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(Expectation::Count)
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned").len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Queues the scripted response for one expected request.
pub struct ExpectationBuilder<T: StoreEntity, R> {
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: StoreEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(Query<T::Filter>, oneshot::Sender<Result<Vec<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Accumulator;
    use crate::Unconstrained;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u64,
        name: String,
    }

    #[derive(Default)]
    struct TagCount(usize);

    impl Accumulator<Tag> for TagCount {
        type Output = usize;

        fn observe(&mut self, _tag: &Tag) {
            self.0 += 1;
        }

        fn finish(self) -> usize {
            self.0
        }
    }

    impl StoreEntity for Tag {
        type Id = u64;
        type Create = String;
        type Update = String;
        type Filter = Unconstrained;
        type Stats = usize;
        type Summary = TagCount;

        fn id(&self) -> u64 {
            self.id
        }

        fn from_create_params(id: u64, _created_at: String, name: String) -> Self {
            Self { id, name }
        }

        fn merge(&self, name: String) -> Self {
            Self { id: self.id, name }
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers_expose_payload() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let create_task = tokio::spawn(async move { client.create("rust".to_string()).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params, "rust");
        responder
            .send(Ok(Tag {
                id: 1,
                name: params,
            }))
            .unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_create().return_ok(Tag {
            id: 7,
            name: "db".into(),
        });
        mock.expect_delete(7).return_err(StoreError::NotFound("7".into()));
        mock.expect_stats().return_ok(0);

        let client = mock.client();
        assert_eq!(client.create("db".into()).await.unwrap().id, 7);
        assert_eq!(
            client.delete(7).await,
            Err(StoreError::NotFound("7".into()))
        );
        assert_eq!(client.stats().await, Ok(0));

        mock.verify();
    }
}
