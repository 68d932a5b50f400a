use super::config::{Config, DEFAULT_MAILBOX_CAPACITY};
use crate::clients::{BookClient, ProductClient};
use crate::http::AppState;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the catalog.
///
/// `CatalogSystem` starts one store actor per resource kind and hands out their clients.
/// The two stores share nothing, so there is no wiring between them.
///
/// # Example
///
/// ```rust
/// use catalog_api::lifecycle::CatalogSystem;
/// use record_store::RecordClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = CatalogSystem::new();
///     assert_eq!(system.book_client.count().await?, 0);
///
///     // Gracefully shut down when done
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Book actor
    pub book_client: BookClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSystem {
    /// Starts both actors with the default mailbox capacity. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAILBOX_CAPACITY)
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_capacity(config.mailbox_capacity)
    }

    fn with_capacity(mailbox_capacity: usize) -> Self {
        let (book_actor, book_client) = crate::book_actor::new(mailbox_capacity);
        let (product_actor, product_client) = crate::product_actor::new(mailbox_capacity);

        let book_handle = tokio::spawn(book_actor.run());
        let product_handle = tokio::spawn(product_actor.run());
        info!(mailbox_capacity, "Catalog started");

        Self {
            book_client,
            product_client,
            handles: vec![book_handle, product_handle],
        }
    }

    /// Clones of both clients for the HTTP layer.
    pub fn app_state(&self) -> AppState {
        AppState {
            books: self.book_client.clone(),
            products: self.product_client.clone(),
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's clients and waits for both actors to drain their mailboxes. An
    /// actor only stops once *every* clone of its client is gone, so the HTTP server must
    /// have finished first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.book_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
