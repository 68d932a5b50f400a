//! Pure data structures (DTOs) for the two catalogs, plus the input validation that guards them.
//!
//! The [`StoreEntity`](record_store::StoreEntity) bindings live next to each actor
//! ([`book_actor`](crate::book_actor), [`product_actor`](crate::product_actor)).

pub mod book;
pub mod product;
pub mod validation;

pub use book::*;
pub use product::*;
pub use validation::{Validate, ValidationError};
