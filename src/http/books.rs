//! Book endpoints.

use super::error::ApiResult;
use super::routes::AppState;
use crate::model::validation::record_id;
use crate::model::{AuthorSearchParams, Book, BookCreate, BookId, BookListParams, BookStats, BookUpdate};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use record_store::RecordClient;
use serde::Serialize;

pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/search/:author/books", get(search_by_author))
        .route("/stats/books", get(book_stats))
}

#[derive(Debug, Serialize)]
pub struct DeletedBook {
    pub message: &'static str,
    #[serde(rename = "deleted_books")]
    pub deleted_book: Book,
}

fn book_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<BookId> {
    let Path(raw) = path?;
    Ok(BookId(record_id(raw)?))
}

async fn list_books(
    State(state): State<AppState>,
    params: Result<Query<BookListParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(params) = params?;
    Ok(Json(state.books.list_books(params).await?))
}

async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookCreate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let Json(params) = payload?;
    let book = state.books.create_book(params).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn get_book(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(path)?;
    Ok(Json(state.books.get(id).await?))
}

async fn update_book(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookUpdate>, JsonRejection>,
) -> ApiResult<Json<Book>> {
    let id = book_id(path)?;
    let Json(update) = payload?;
    Ok(Json(state.books.update_book(id, update).await?))
}

async fn delete_book(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeletedBook>> {
    let id = book_id(path)?;
    let deleted_book = state.books.delete(id).await?;
    Ok(Json(DeletedBook {
        message: "Book deleted successfully",
        deleted_book,
    }))
}

async fn search_by_author(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    params: Result<Query<AuthorSearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Path(author) = path?;
    let Query(params) = params?;
    Ok(Json(state.books.search_by_author(&author, params).await?))
}

async fn book_stats(State(state): State<AppState>) -> ApiResult<Json<BookStats>> {
    Ok(Json(state.books.stats().await?))
}
