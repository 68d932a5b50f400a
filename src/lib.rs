//! # Catalog API
//!
//! Two in-memory catalogs, books and products, served over HTTP. Each catalog is a
//! [`record_store::StoreActor`] that owns its records and answers requests one at a time; the
//! shared filter, pagination, merge and statistics engine lives in the `record-store` crate.
//!
//! ## Module Tour
//!
//! ### 1. The Records ([`model`])
//! Books and products, their create/update payloads, filters, statistics and the validation
//! rules that guard them.
//!
//! ### 2. The Actors ([`book_actor`], [`product_actor`])
//! [`StoreEntity`](record_store::StoreEntity) bindings, per-resource errors and the factory
//! functions that pair each actor with its typed client.
//!
//! ### 3. The Interface ([`clients`])
//! [`BookClient`](clients::BookClient) and [`ProductClient`](clients::ProductClient) validate
//! input and hide the message passing.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`CatalogSystem`](lifecycle::CatalogSystem) starts and stops the actors;
//! [`Config`](lifecycle::Config) carries the runtime settings.
//!
//! ### 5. The Surface ([`http`])
//! The axum router, handlers and the `{"detail": ...}` error mapping.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on 127.0.0.1:8000 with info logs
//! cargo run
//!
//! # Another port, with every store request logged
//! RUST_LOG=debug cargo run -- --port 9000
//! ```

pub mod book_actor;
pub mod clients;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
