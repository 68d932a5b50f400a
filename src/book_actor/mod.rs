//! # Book Actor
//!
//! The library catalog: one [`StoreActor`] holding every [`Book`].
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](record_store::StoreEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and its typed client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_api::book_actor;
//! use catalog_api::model::BookCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = book_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let book = client
//!         .create_book(BookCreate {
//!             title: "Dune".into(),
//!             author: "Frank Herbert".into(),
//!             isbn: "9780441013593".into(),
//!             published_year: 1965,
//!             pages: 412,
//!             available: true,
//!             genre: "Sci-Fi".into(),
//!             summary: None,
//!         })
//!         .await?;
//!     assert_eq!(book.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookClient;
use crate::model::Book;
use record_store::StoreActor;

/// Creates a new Book actor and its client.
pub fn new(mailbox_capacity: usize) -> (StoreActor<Book>, BookClient) {
    let (actor, generic_client) = StoreActor::new(mailbox_capacity);
    (actor, BookClient::new(generic_client))
}
