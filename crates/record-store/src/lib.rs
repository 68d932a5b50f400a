//! # Record Store
//!
//! Building blocks for in-memory, id-keyed record stores served by actors. One generic engine
//! handles every resource kind: it assigns ids, merges sparse updates, filters, paginates and
//! reduces records to statistics. A resource kind only describes *its* fields.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - the record type, its create/update payloads, its
//!    filter and its stats report
//! 2. **Engine Layer** ([`Store`], [`Query`], [`Page`], [`stats`]) - synchronous, pure logic
//! 3. **Runtime Layer** ([`StoreActor`]) - owns one `Store` and drains a mailbox sequentially
//! 4. **Interface Layer** ([`StoreClient`], [`RecordClient`]) - typed message passing
//!
//! ## Query Pipeline
//!
//! Listing is always *filter, then paginate*. Every filter field is optional and an absent
//! field matches everything; present fields combine with AND. Text fields compare
//! case-insensitively and treat an empty string as absent. Numeric bounds are inclusive.
//!
//! ```rust
//! use record_store::{text_matches, Bounds, Page, Predicate, Query};
//!
//! #[derive(Clone, Debug)]
//! struct Item { kind: String, weight: u32 }
//!
//! #[derive(Debug)]
//! struct ItemFilter { kind: Option<String>, weight: Bounds<u32> }
//!
//! impl Predicate<Item> for ItemFilter {
//!     fn matches(&self, item: &Item) -> bool {
//!         text_matches(self.kind.as_deref(), &item.kind) && self.weight.contains(item.weight)
//!     }
//! }
//!
//! let items = vec![
//!     Item { kind: "Bolt".into(), weight: 5 },
//!     Item { kind: "bolt".into(), weight: 50 },
//!     Item { kind: "Nut".into(), weight: 5 },
//! ];
//! let filter = ItemFilter { kind: Some("BOLT".into()), weight: Bounds::new(None, Some(50)) };
//! let query = Query::paged(filter, Page::new(1, 10).unwrap());
//!
//! let hits = query.run(&items);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].weight, 50);
//! ```
//!
//! ## Running a Store
//!
//! ```rust
//! use record_store::stats::Accumulator;
//! use record_store::{Query, StoreActor, StoreEntity, Unconstrained};
//!
//! #[derive(Clone, Debug)]
//! struct Tag { id: u64, name: String, created_at: String }
//!
//! #[derive(Default)]
//! struct TagCount(usize);
//! impl Accumulator<Tag> for TagCount {
//!     type Output = usize;
//!     fn observe(&mut self, _: &Tag) { self.0 += 1; }
//!     fn finish(self) -> usize { self.0 }
//! }
//!
//! impl StoreEntity for Tag {
//!     type Id = u64;
//!     type Create = String;
//!     type Update = String;
//!     type Filter = Unconstrained;
//!     type Stats = usize;
//!     type Summary = TagCount;
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn from_create_params(id: u64, created_at: String, name: String) -> Self {
//!         Self { id, name, created_at }
//!     }
//!     fn merge(&self, name: String) -> Self {
//!         Self { name, ..self.clone() }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Tag>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let tag = client.create("rust".into()).await.unwrap();
//!     assert_eq!(tag.id, 1);
//!
//!     let renamed = client.update(tag.id, "tokio".into()).await.unwrap();
//!     assert_eq!(renamed.created_at, tag.created_at);
//!
//!     assert_eq!(client.list(Query::new(Unconstrained)).await.unwrap().len(), 1);
//!     assert_eq!(client.stats().await.unwrap(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Requests are handled **sequentially** within a store, so no locks are needed
//! - Different stores run in parallel and share nothing
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `StoreClient` from scripted responses, which makes it
//! easy to test typed wrappers and handlers, including failures a live store never produces.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod page;
pub mod patch;
pub mod query;
pub mod stats;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::RecordClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use page::{Page, PageError};
pub use query::{flag_matches, text_matches, Bounds, Predicate, Query, Unconstrained};
pub use store::Store;
