//! HTTP API tests against an in-process actix-web service backed by a fresh
//! SQLite file per test.

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use diesel::RunQueryDsl;
use serde_json::{json, Value};
use tempfile::TempDir;
use storefront::domain::product::Product;
use storefront::{create_pool, init_store, routes};

/// A database file inside a directory removed when the guard drops.
struct TempDb {
    _dir: TempDir,
    path: String,
}

fn temp_db() -> TempDb {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("store.db").to_string_lossy().into_owned();
    TempDb { _dir: dir, path }
}

macro_rules! app {
    ($db:expr) => {{
        let service = init_store($db).expect("Failed to initialise store");
        test::init_service(App::new().app_data(web::Data::new(service)).configure(routes)).await
    }};
}

#[actix_web::test]
async fn fresh_startup_lists_seeded_products() {
    let db = temp_db();
    let app = app!(&db.path);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let products: Vec<Product> = test::read_body_json(resp).await;
    let listed: Vec<(&str, f64)> = products.iter().map(|p| (p.name.as_str(), p.price)).collect();
    assert_eq!(
        listed,
        [
            ("T-shirt", 19.99),
            ("Jeans", 39.99),
            ("Sneakers", 59.99),
            ("Jacket", 79.99),
            ("Hat", 14.99),
            ("Socks", 4.99),
        ]
    );
}

#[actix_web::test]
async fn restart_does_not_duplicate_seed() {
    let db = temp_db();
    init_store(&db.path).expect("first startup");
    let app = app!(&db.path);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
    let products: Vec<Product> = test::read_body_json(resp).await;
    assert_eq!(products.len(), 6);
}

#[actix_web::test]
async fn place_order_returns_increasing_ids() {
    let db = temp_db();
    let app = app!(&db.path);
    let body = json!({
        "items": [{"id": 1, "name": "T-shirt", "price": 19.99, "image": "https://via.placeholder.com/150"}],
        "total": 19.99
    });

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: Value = test::read_body_json(resp).await;
        ids.push(json["orderId"].as_i64().expect("integer orderId"));
    }

    assert!(ids[0] > 0);
    assert!(ids[1] > ids[0]);
}

#[actix_web::test]
async fn empty_order_is_accepted() {
    let db = temp_db();
    let app = app!(&db.path);

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({"items": [], "total": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn order_without_items_is_rejected() {
    let db = temp_db();
    let app = app!(&db.path);

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .set_json(json!({"total": 12.5}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn datastore_failure_returns_500_with_error() {
    let db = temp_db();
    let app = app!(&db.path);
    {
        let pool = create_pool(&db.path).expect("pool");
        let mut conn = pool.get().expect("connection");
        diesel::sql_query("DROP TABLE products")
            .execute(&mut conn)
            .expect("drop failed");
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/products").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = test::read_body_json(resp).await;
    assert!(!json["error"].as_str().expect("error string").is_empty());
}

#[actix_web::test]
async fn cross_origin_get_is_allowed() {
    let db = temp_db();
    let app = app!(&db.path);

    let req = test::TestRequest::get()
        .uri("/api/products")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[actix_web::test]
async fn order_preflight_is_answered() {
    let db = temp_db();
    let app = app!(&db.path);

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/orders")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
