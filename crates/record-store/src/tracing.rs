//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber used by every store actor
//! and by the HTTP layer on top of it.
//!
//! ## Configuration
//!
//! `RUST_LOG` wins when it is set. Otherwise the caller's default directive applies, so a
//! binary can ship with `info` and still be turned up without a rebuild:
//!
//! ```bash
//! # Lifecycle events only (actor start, created/updated/deleted, shutdown)
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload, filter and match count
//! RUST_LOG=debug cargo run
//!
//! # Only the store engine
//! RUST_LOG=record_store=debug cargo run
//! ```
//!
//! The output is compact and hides module paths (`with_target(false)`); the `entity_type`
//! field says which store a line came from.
//!
//! ```text
//! INFO Actor started entity_type="Book"
//! DEBUG Create entity_type="Book" params=BookCreate { title: "Dune", .. }
//! INFO Created entity_type="Book" size=1
//! DEBUG List entity_type="Book" query=Query { filter: BookFilter { genre: Some("Fiction"), .. }, page: .. } matched=1
//! WARN Not found entity_type="Book" id=999
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
