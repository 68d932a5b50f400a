//! # Generic Client
//!
//! This module defines the generic client for communicating with store actors.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use crate::query::Query;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// It forwards requests over a Tokio mpsc channel and awaits the reply on a oneshot
/// channel. It holds only a sender, so cloning is cheap and clones can be shared across
/// tasks.
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self, query: Query<T::Filter>) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { query, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn stats(&self) -> Result<T::Stats, StoreError> {
        self.request(|respond_to| StoreRequest::Stats { respond_to })
            .await
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        self.request(|respond_to| StoreRequest::Count { respond_to })
            .await
    }
}
