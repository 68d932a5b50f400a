//! Router assembly and the root endpoint.

use super::books::book_routes;
use super::error::ApiResult;
use super::products::product_routes;
use crate::clients::{BookClient, ProductClient};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use record_store::RecordClient;
use serde::Serialize;
use tower_http::trace::TraceLayer;

/// Clients shared by every handler. Cloning is cheap: each client is a channel sender.
#[derive(Clone)]
pub struct AppState {
    pub books: BookClient,
    pub products: ProductClient,
}

/// Builds the full API with request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(book_routes())
        .merge(product_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub total_books: usize,
    pub total_products: usize,
}

async fn root(State(state): State<AppState>) -> ApiResult<Json<Welcome>> {
    Ok(Json(Welcome {
        message: "Welcome to the Catalog API",
        total_books: state.books.count().await?,
        total_products: state.products.count().await?,
    }))
}
