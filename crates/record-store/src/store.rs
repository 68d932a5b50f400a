//! # Record Store
//!
//! The id-keyed collection behind one resource kind. It is plain synchronous state; the
//! [`StoreActor`](crate::StoreActor) owns one and gives it exclusive, sequential access.
//!
//! Ids come from a counter that only moves forward, so an id is never handed out twice even
//! after its record is deleted. Records live in a `BTreeMap` keyed by id, which makes
//! ascending-id iteration the same as insertion order.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::query::Query;
use crate::stats::reduce;
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;

pub struct Store<T: StoreEntity> {
    records: BTreeMap<T::Id, T>,
    last_id: u64,
}

impl<T: StoreEntity> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> Store<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            last_id: 0,
        }
    }

    /// Assigns the next id, stamps the creation time and stores the record.
    pub fn create(&mut self, params: T::Create) -> T {
        self.last_id += 1;
        let id = T::Id::from(self.last_id);
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let record = T::from_create_params(id, created_at, params);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: &T::Id) -> Result<T, StoreError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Merges `update` into the stored record. Fails before touching anything when `id` is absent.
    pub fn update(&mut self, id: &T::Id, update: T::Update) -> Result<T, StoreError> {
        let slot = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        *slot = slot.merge(update);
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: &T::Id) -> Result<T, StoreError> {
        self.records
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Snapshot of every record in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    pub fn query(&self, query: &Query<T::Filter>) -> Vec<T> {
        query.run(self.records.values())
    }

    pub fn stats(&self) -> T::Stats {
        reduce::<T, T::Summary>(self.records.values())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
