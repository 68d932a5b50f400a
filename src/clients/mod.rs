//! Type-safe wrappers around [`StoreClient`](record_store::StoreClient).
//!
//! Both clients get `get`, `delete`, `list`, `stats` and `count` from
//! [`RecordClient`](record_store::RecordClient) and add their own validated create, update,
//! list and search methods.

pub mod book_client;
pub mod product_client;

pub use book_client::*;
pub use product_client::*;
