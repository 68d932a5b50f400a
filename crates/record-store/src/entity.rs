//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every resource kind (Book, Product, …) implements to
//! be held by a generic [`StoreActor`](crate::StoreActor). It names the associated types for
//! identifiers, create/update DTOs, the filter and the stats report, and supplies the two
//! pieces of per-kind logic the engine cannot know: how to build a record and how to merge a
//! sparse update into one.
//!
//! # Architecture Note
//! The store, the filter pipeline, the slicer and the reducer are written once against this
//! trait. Associated types keep kinds apart at compile time: a `Book` store only accepts a
//! `BookCreate`, a `BookFilter` and a `BookUpdate`.

use crate::query::Predicate;
use crate::stats::Accumulator;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a `StoreActor`.
pub trait StoreEntity: Clone + Send + Sync + Debug + 'static {
    /// The record identifier.
    /// Built from the store's monotonic `u64` counter; ordering follows creation order.
    type Id: Copy + Ord + Hash + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Sparse update payload. Must not carry the identifier or the creation timestamp.
    type Update: Send + Sync + Debug;

    /// Optional predicates used by list and search.
    type Filter: Predicate<Self> + Send + Sync + Debug;

    /// Aggregate report produced by the stats request.
    type Stats: Send + Sync + Debug;

    /// One-pass accumulator that produces [`Self::Stats`].
    type Summary: Accumulator<Self, Output = Self::Stats>;

    /// The identifier this record was stored under.
    fn id(&self) -> Self::Id;

    /// Construct the full record from its assigned id, creation timestamp and payload.
    fn from_create_params(id: Self::Id, created_at: String, params: Self::Create) -> Self;

    /// Returns a copy of `self` with every field present in `update` overwritten.
    fn merge(&self, update: Self::Update) -> Self;
}
