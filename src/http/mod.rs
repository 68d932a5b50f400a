//! # HTTP Surface
//!
//! An axum [`Router`](axum::Router) over the two catalogs. Handlers only parse, delegate to
//! the typed clients and shape the response; validation and storage happen behind them.
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/` | welcome message with record counts |
//! | GET, POST | `/books` | filtered page of books / 201 + created book |
//! | GET, PUT, DELETE | `/books/:id` | book / merged book / `{message, deleted_books}` |
//! | GET | `/search/:author/books` | books by author |
//! | GET | `/stats/books` | library statistics |
//! | GET, POST | `/products` | filtered page of products / 201 + created product |
//! | GET, PUT, DELETE | `/products/:id` | product / merged product / `{message, deleted_product}` |
//! | GET | `/categories/:category/products` | products in a category |
//! | GET | `/stats/products` | inventory statistics |
//!
//! Errors are `{"detail": "..."}`: 404 for unknown ids, 422 for invalid input and 503 when
//! a store actor is unavailable.

pub mod books;
pub mod error;
pub mod products;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{router, AppState};
