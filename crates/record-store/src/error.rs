//! # Store Errors
//!
//! `NotFound` is the only domain error a store raises. The other variants describe the
//! message plumbing between a client and its actor.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
}
