//! In-process HTTP tests over the real router.
//!
//! Each test builds the full middleware + route stack and drives it with
//! `tower::ServiceExt::oneshot`, so auth, status codes, and body shapes are
//! exercised exactly as a network client would see them.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use std::sync::Arc;
use tower::ServiceExt;

const API_KEY: &str = "test-api-key";

fn test_router(seed: bool) -> Router {
    let mut config = ServerConfig::default();
    config.api_keys.insert(API_KEY.to_string());
    config.seed_demo_data = seed;
    build_router(Arc::new(ServerState::new(config)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .expect("request")
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-key", API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_and_root_bypass_auth() {
    let app = test_router(true);

    for uri in ["/health", "/ready", "/"] {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn readiness_reports_catalog_record_count() {
    let app = test_router(true);
    let request = Request::builder()
        .uri("/ready")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let body = json_body(response).await;
    assert_eq!(body["components"]["catalog"]["records"], json!(12));
}

#[tokio::test]
async fn missing_api_key_is_rejected() {
    let app = test_router(true);
    let request = Request::builder()
        .uri("/api/v1/products")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], json!("AUTH_FAILED"));
}

#[tokio::test]
async fn invalid_api_key_is_rejected() {
    let app = test_router(true);
    let request = Request::builder()
        .uri("/api/v1/products")
        .header("x-api-key", "wrong-key")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_token_is_accepted() {
    let app = test_router(true);
    let request = Request::builder()
        .uri("/api/v1/products")
        .header(header::AUTHORIZATION, format!("Bearer {API_KEY}"))
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn default_listing_returns_first_ten_of_twelve() {
    let app = test_router(true);
    let response = app.oneshot(get("/api/v1/products")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["pageNumber"], json!(1));
    assert_eq!(body["pageSize"], json!(10));
    assert_eq!(body["totalRecords"], json!(12));
    assert_eq!(body["totalPages"], json!(2));
    assert_eq!(body["data"].as_array().expect("data").len(), 10);
}

#[tokio::test]
async fn page_two_of_five_covers_ids_six_through_ten() {
    let app = test_router(true);
    let response = app
        .oneshot(get("/api/v1/products?pageNumber=2&pageSize=5"))
        .await
        .expect("response");

    let body = json_body(response).await;
    let ids: Vec<u64> = body["data"]
        .as_array()
        .expect("data")
        .iter()
        .map(|p| p["id"].as_u64().expect("id"))
        .collect();
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);
    assert_eq!(body["totalPages"], json!(3));
}

#[tokio::test]
async fn unknown_category_filter_returns_everything() {
    let app = test_router(true);
    let response = app
        .oneshot(get("/api/v1/products?category=widgets"))
        .await
        .expect("response");

    let body = json_body(response).await;
    assert_eq!(body["totalRecords"], json!(12));
}

#[tokio::test]
async fn filters_and_sort_compose_over_http() {
    let app = test_router(true);
    let response = app
        .oneshot(get(
            "/api/v1/products?category=Electronics&sortBy=price_desc",
        ))
        .await
        .expect("response");

    let body = json_body(response).await;
    assert_eq!(body["totalRecords"], json!(3));
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("data")
        .iter()
        .map(|p| p["name"].as_str().expect("name"))
        .collect();
    assert_eq!(
        names,
        vec!["Laptop Dell XPS 15", "Bluetooth Speaker", "Wireless Mouse"]
    );
}

#[tokio::test]
async fn search_matches_descriptions_too() {
    let app = test_router(true);
    let response = app
        .oneshot(get("/api/v1/products?search=waterproof"))
        .await
        .expect("response");

    let body = json_body(response).await;
    assert_eq!(body["totalRecords"], json!(1));
    assert_eq!(body["data"][0]["name"], json!("Bluetooth Speaker"));
}

#[tokio::test]
async fn get_by_id_and_not_found() {
    let app = test_router(true);

    let response = app
        .clone()
        .oneshot(get("/api/v1/products/1"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], json!("Laptop Dell XPS 15"));
    assert_eq!(body["category"], json!("Electronics"));

    let response = app
        .oneshot(get("/api/v1/products/999"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], json!("PRODUCT_NOT_FOUND"));
}

#[tokio::test]
async fn create_returns_201_with_location_and_fetches_back() {
    let app = test_router(true);
    let payload = json!({
        "name": "Standing Desk",
        "price": "349.00",
        "description": "Motorized sit-stand desk",
        "category": "Home"
    });

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/v1/products", payload))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/api/v1/products/13")
    );
    let body = json_body(response).await;
    assert_eq!(body["id"], json!(13));
    assert_eq!(body["price"], json!("349.00"));

    let response = app
        .oneshot(get("/api/v1/products/13"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn invalid_create_returns_the_full_error_list() {
    let app = test_router(true);
    let payload = json!({
        "name": "ab",
        "price": "0",
        "category": "Nowhere"
    });

    let response = app
        .oneshot(with_json("POST", "/api/v1/products", payload))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], json!("VALIDATION_FAILED"));
    let details: Vec<&str> = body["error"]["details"]
        .as_array()
        .expect("details")
        .iter()
        .map(|d| d.as_str().expect("detail"))
        .collect();
    assert_eq!(
        details,
        vec![
            "Name must be between 3 and 100 characters.",
            "Price must be greater than 0.",
            "Invalid category value.",
        ]
    );
}

#[tokio::test]
async fn put_replaces_all_mutable_fields() {
    let app = test_router(true);
    let payload = json!({
        "name": "Renamed Laptop",
        "price": "999.99",
        "description": "Discounted",
        "category": "electronics"
    });

    let response = app
        .clone()
        .oneshot(with_json("PUT", "/api/v1/products/1", payload.clone()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("Renamed Laptop"));
    assert_eq!(body["price"], json!("999.99"));
    assert_eq!(body["category"], json!("Electronics"));

    let response = app
        .oneshot(with_json("PUT", "/api/v1/products/999", payload))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_changes_only_the_named_fields() {
    let app = test_router(true);

    let response = app
        .clone()
        .oneshot(with_json(
            "PATCH",
            "/api/v1/products/2",
            json!({"price": "39.99"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["name"], json!("Wireless Mouse"));
    assert_eq!(body["price"], json!("39.99"));

    let response = app
        .oneshot(with_json(
            "PATCH",
            "/api/v1/products/2",
            json!({"price": "-1"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_patch_still_bumps_updated_at() {
    let app = test_router(true);

    let response = app
        .clone()
        .oneshot(get("/api/v1/products/3"))
        .await
        .expect("response");
    let before = json_body(response).await;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let response = app
        .oneshot(with_json("PATCH", "/api/v1/products/3", json!({})))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let after = json_body(response).await;

    assert_eq!(after["name"], before["name"]);
    assert_eq!(after["price"], before["price"]);
    assert_eq!(after["created_at"], before["created_at"]);
    assert_ne!(after["updated_at"], before["updated_at"]);
}

#[tokio::test]
async fn delete_is_204_then_404() {
    let app = test_router(true);

    let delete = |uri: &str| {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("x-api-key", API_KEY)
            .body(Body::empty())
            .expect("request")
    };

    let response = app
        .clone()
        .oneshot(delete("/api/v1/products/5"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(delete("/api/v1/products/5"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Ids are never reused: a fresh create continues the sequence.
    let payload = json!({
        "name": "Replacement Item",
        "price": "10.00",
        "category": "Other"
    });
    let response = app
        .oneshot(with_json("POST", "/api/v1/products", payload))
        .await
        .expect("response");
    let body = json_body(response).await;
    assert_eq!(body["id"], json!(13));
}

#[tokio::test]
async fn head_probes_existence_without_a_body() {
    let app = test_router(true);

    let head = |uri: &str| {
        Request::builder()
            .method("HEAD")
            .uri(uri)
            .header("x-api-key", API_KEY)
            .body(Body::empty())
            .expect("request")
    };

    let response = app
        .clone()
        .oneshot(head("/api/v1/products/1"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(head("/api/v1/products/999"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn options_lists_supported_methods() {
    let app = test_router(true);
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/products")
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ALLOW)
            .and_then(|v| v.to_str().ok()),
        Some("GET, POST, PUT, PATCH, DELETE, HEAD, OPTIONS")
    );
}

#[tokio::test]
async fn unseeded_server_starts_with_an_empty_catalog() {
    let app = test_router(false);
    let response = app.oneshot(get("/api/v1/products")).await.expect("response");
    let body = json_body(response).await;
    assert_eq!(body["totalRecords"], json!(0));
    assert_eq!(body["totalPages"], json!(0));
    assert!(body["data"].as_array().expect("data").is_empty());
}

#[tokio::test]
async fn unknown_routes_fall_back_to_404() {
    let app = test_router(true);
    let response = app
        .oneshot(get("/api/v1/warehouses"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_router(true);

    let response = app
        .clone()
        .oneshot(get("/api/v1/products"))
        .await
        .expect("response");
    assert!(response.headers().contains_key("x-request-id"));

    // A caller-supplied id is passed through unchanged.
    let request = Request::builder()
        .uri("/api/v1/products")
        .header("x-api-key", API_KEY)
        .header("x-request-id", "trace-me-123")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-me-123")
    );
}
