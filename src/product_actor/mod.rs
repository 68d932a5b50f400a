//! # Product Actor
//!
//! The product inventory: one [`StoreActor`] holding every [`Product`].
//!
//! - [`entity`] - [`StoreEntity`](record_store::StoreEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`new()`] - Factory function that creates the actor and its typed client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use record_store::StoreActor;

/// Creates a new Product actor and its client.
pub fn new(mailbox_capacity: usize) -> (StoreActor<Product>, ProductClient) {
    let (actor, generic_client) = StoreActor::new(mailbox_capacity);
    (actor, ProductClient::new(generic_client))
}
