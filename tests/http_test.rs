use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use catalog_api::http::router;
use catalog_api::lifecycle::CatalogSystem;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn gatsby() -> Value {
    json!({
        "title": "The Great Gatsby",
        "author": "F. Scott Fitzgerald",
        "isbn": "9780743273565",
        "published_year": 1925,
        "pages": 180,
        "genre": "Fiction",
        "summary": "A classic American novel set in the 1920s"
    })
}

#[tokio::test]
async fn test_book_crud_over_http() {
    let system = CatalogSystem::new();
    let app = router(system.app_state());

    let (status, created) = send(&app, Method::POST, "/books", Some(gatsby())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["available"], true);
    assert!(created["added_at"].is_string());

    let (status, fetched) = send(&app, Method::GET, "/books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/books/1",
        Some(json!({"available": false, "id": 77, "added_at": "never"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["available"], false);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["added_at"], created["added_at"]);
    assert_eq!(updated["title"], "The Great Gatsby");

    let (status, deleted) = send(&app, Method::DELETE, "/books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Book deleted successfully");
    assert_eq!(deleted["deleted_books"]["id"], 1);
    assert!(deleted.get("deleted_book").is_none());

    let (status, body) = send(&app, Method::GET, "/books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Book with ID 1 not found");
}

#[tokio::test]
async fn test_invalid_input_is_unprocessable() {
    let system = CatalogSystem::new();
    let app = router(system.app_state());

    let mut short_isbn = gatsby();
    short_isbn["isbn"] = json!("123");
    let (status, body) = send(&app, Method::POST, "/books", Some(short_isbn)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("isbn"));

    let (status, body) = send(&app, Method::POST, "/products", Some(json!({"name": "Laptop"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = send(&app, Method::GET, "/books/0", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/books/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/products?limit=101", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/books?min_pages=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::PUT, "/products/999", Some(json!({"price": 5.0}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_listing_search_and_stats() {
    let system = CatalogSystem::new();
    let app = router(system.app_state());

    for (name, price, category, in_stock) in [
        ("Laptop", 999.99, "Electronics", true),
        ("Phone", 599.0, "electronics", true),
        ("Cable", 9.5, "Electronics", false),
        ("Novel", 12.0, "Books", true),
    ] {
        let body = json!({"name": name, "price": price, "category": category, "in_stock": in_stock});
        let (status, _) = send(&app, Method::POST, "/products", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, listed) = send(&app, Method::GET, "/products?category=ELECTRONICS&min_price=500", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let (_, page) = send(&app, Method::GET, "/products?skip=1&limit=2", None).await;
    let names: Vec<_> = page
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Phone", "Cable"]);

    let (_, beyond) = send(&app, Method::GET, "/products?skip=5&limit=10", None).await;
    assert_eq!(beyond, json!([]));

    let (_, searched) = send(&app, Method::GET, "/categories/electronics/products", None).await;
    assert_eq!(searched.as_array().unwrap().len(), 2);

    let (_, out_of_stock) = send(
        &app,
        Method::GET,
        "/categories/Electronics/products?in_stock=false",
        None,
    )
    .await;
    assert_eq!(out_of_stock[0]["name"], "Cable");

    let (status, stats) = send(&app, Method::GET, "/stats/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_products"], 4);
    assert_eq!(stats["in_stock"], 3);
    assert_eq!(stats["out_of_stock"], 1);
    assert_eq!(stats["min_price"], 9.5);
    assert_eq!(stats["max_price"], 999.99);
    assert_eq!(stats["categories"], json!({"Books": 1, "Electronics": 2, "electronics": 1}));

    let (_, deleted) = send(&app, Method::DELETE, "/products/4", None).await;
    assert_eq!(deleted["message"], "Product deleted successfully");
    assert_eq!(deleted["deleted_product"]["name"], "Novel");
}

#[tokio::test]
async fn test_root_search_and_book_stats() {
    let system = CatalogSystem::new();
    let app = router(system.app_state());

    let (_, empty) = send(&app, Method::GET, "/stats/books", None).await;
    assert_eq!(
        empty,
        json!({
            "total_books": 0,
            "available_books": 0,
            "borrowed_books": 0,
            "total_pages": 0,
            "average_pages": 0.0,
            "books_per_genre": {},
            "books_per_author": {}
        })
    );

    send(&app, Method::POST, "/books", Some(gatsby())).await;
    let mut dune = gatsby();
    dune["title"] = json!("Dune");
    dune["author"] = json!("Frank Herbert");
    dune["genre"] = json!("Sci-Fi");
    dune["pages"] = json!(412);
    dune["available"] = json!(false);
    send(&app, Method::POST, "/books", Some(dune)).await;

    let (status, root) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(root["total_books"], 2);
    assert_eq!(root["total_products"], 0);

    let (_, by_author) = send(&app, Method::GET, "/search/frank%20herbert/books", None).await;
    assert_eq!(by_author[0]["title"], "Dune");

    let (_, stats) = send(&app, Method::GET, "/stats/books", None).await;
    assert_eq!(stats["total_books"], 2);
    assert_eq!(stats["borrowed_books"], 1);
    assert_eq!(stats["total_pages"], 592);
    assert_eq!(stats["average_pages"], 296.0);
    assert_eq!(stats["books_per_author"]["Frank Herbert"], 1);
}
