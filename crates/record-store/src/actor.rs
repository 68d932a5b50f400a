//! # Store Actor
//!
//! This module defines the `StoreActor`, the task that owns one [`Store`] and serves every
//! request against it. It is the "server" side of the actor pattern: messages are processed
//! one at a time, so mutations are mutually exclusive and reads never see a half-applied
//! change.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::message::StoreRequest;
use crate::store::Store;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages the records of one resource kind.
///
/// # Architecture Note
/// This struct owns the state (`store`) and the receiver end of the channel. Each
/// `StoreActor` runs in its own Tokio task and drains its mailbox sequentially, which is
/// what keeps the id counter monotonic and the ids unique without a `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` returns the actor (server) and a client (interface).
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client freely; dropping every clone stops the actor.
///
/// # Operations
///
/// * **Create**: assigns the next id, stamps the creation time, stores and returns the record.
/// * **Get**: returns a clone of the record, or `NotFound`.
/// * **List**: runs the query (filter, then paginate) over a snapshot of the records.
/// * **Update**: checks existence first, then merges the sparse update.
/// * **Delete**: removes and returns the record, or `NotFound`.
/// * **Stats**: reduces the full store, ignoring any filter.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: Store<T>,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Store::new(),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Book" instead of "catalog_api::model::book::Book")
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(entity_type, msg);
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn handle(&mut self, entity_type: &str, msg: StoreRequest<T>) {
        match msg {
            StoreRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let record = self.store.create(params);
                info!(entity_type, id = %record.id(), size = self.store.len(), "Created");
                let _ = respond_to.send(Ok(record));
            }
            StoreRequest::Get { id, respond_to } => {
                let result = self.store.get(&id);
                debug!(entity_type, %id, found = result.is_ok(), "Get");
                let _ = respond_to.send(result);
            }
            StoreRequest::List { query, respond_to } => {
                let records = self.store.query(&query);
                debug!(entity_type, ?query, matched = records.len(), "List");
                let _ = respond_to.send(Ok(records));
            }
            StoreRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let result = self.store.update(&id, update);
                match &result {
                    Ok(_) => info!(entity_type, %id, "Updated"),
                    Err(_) => warn!(entity_type, %id, "Not found"),
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let result = self.store.delete(&id);
                match &result {
                    Ok(_) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                    Err(_) => warn!(entity_type, %id, "Not found"),
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::Stats { respond_to } => {
                debug!(entity_type, size = self.store.len(), "Stats");
                let _ = respond_to.send(Ok(self.store.stats()));
            }
            StoreRequest::Count { respond_to } => {
                let _ = respond_to.send(Ok(self.store.len()));
            }
        }
    }
}
