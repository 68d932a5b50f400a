//! # Store Messages
//!
//! The request enum a [`StoreClient`](crate::StoreClient) sends to its
//! [`StoreActor`](crate::StoreActor), one variant per store operation.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::query::Query;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the record lifecycle (**Create**, **Get**, **Update**, **Delete**)
/// plus the read-side operations shared by every kind: **List** (filter + paginate, also
/// used by path-keyed search), **Stats** and **Count**.
///
/// The enum is generic over `T: StoreEntity` and uses its associated types for every payload,
/// so a `Product` update can never be delivered to the `Book` store.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    List {
        query: Query<T::Filter>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Stats {
        respond_to: Response<T::Stats>,
    },
    Count {
        respond_to: Response<usize>,
    },
}
