//! # System Lifecycle & Configuration
//!
//! - [`CatalogSystem`] creates the book and product actors, spawns them and shuts them down.
//! - [`Config`] holds the runtime settings parsed with `clap` (flags or `CATALOG_*`
//!   environment variables).
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop accepting requests** - the HTTP server finishes in-flight requests and drops
//!    its client clones
//! 2. **Drop the remaining clients** - closes the sender side of each mailbox
//! 3. **Actors drain** - `receiver.recv()` returns `None` once queued requests are served,
//!    and each actor logs its final size
//! 4. **Await completion** - [`CatalogSystem::shutdown`] joins both actor tasks
//!
//! Logging is set up once per process with
//! [`record_store::tracing::setup_tracing`], using [`Config::log_filter`] as the fallback
//! when `RUST_LOG` is unset.

pub mod catalog_system;
pub mod config;

pub use catalog_system::*;
pub use config::*;
