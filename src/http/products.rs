//! Product endpoints.

use super::error::ApiResult;
use super::routes::AppState;
use crate::model::validation::record_id;
use crate::model::{
    CategorySearchParams, Product, ProductCreate, ProductId, ProductListParams, ProductStats,
    ProductUpdate,
};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use record_store::RecordClient;
use serde::Serialize;

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/categories/:category/products", get(search_by_category))
        .route("/stats/products", get(product_stats))
}

#[derive(Debug, Serialize)]
pub struct DeletedProduct {
    pub message: &'static str,
    pub deleted_product: Product,
}

fn product_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<ProductId> {
    let Path(raw) = path?;
    Ok(ProductId(record_id(raw)?))
}

async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ProductListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Query(params) = params?;
    Ok(Json(state.products.list_products(params).await?))
}

async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(params) = payload?;
    let product = state.products.create_product(params).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let id = product_id(path)?;
    Ok(Json(state.products.get(id).await?))
}

async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductUpdate>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = product_id(path)?;
    let Json(update) = payload?;
    Ok(Json(state.products.update_product(id, update).await?))
}

async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeletedProduct>> {
    let id = product_id(path)?;
    let deleted_product = state.products.delete(id).await?;
    Ok(Json(DeletedProduct {
        message: "Product deleted successfully",
        deleted_product,
    }))
}

async fn search_by_category(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    params: Result<Query<CategorySearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Product>>> {
    let Path(category) = path?;
    let Query(params) = params?;
    Ok(Json(
        state.products.search_by_category(&category, params).await?,
    ))
}

async fn product_stats(State(state): State<AppState>) -> ApiResult<Json<ProductStats>> {
    Ok(Json(state.products.stats().await?))
}
