use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use furnflip_server::{
    api::app_router,
    build_state,
    config::{Config, StoreKind},
};
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

async fn build_test_router(config: Config) -> Router {
    let state = build_state(&config).await.unwrap();
    app_router(state, &config).unwrap()
}

fn memory_config() -> Config {
    Config {
        store: StoreKind::Memory,
        ..Config::default()
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
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

fn approx(value: &Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-9
}

#[tokio::test]
async fn health_reports_ok() {
    let app = build_test_router(memory_config()).await;
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn request_id_is_propagated() {
    let app = build_test_router(memory_config()).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn interpret_detects_category_and_patches_state() {
    let app = build_test_router(memory_config()).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/agent/interpret",
        Some(json!({ "message": "I want to sell my old Sofa", "state": { "step": 1 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patch"], json!({ "step": 1, "category": "sofa" }));
    assert!(body["reply"].as_str().unwrap().contains("**sofa**"));

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/agent/interpret",
        Some(json!({ "message": "nothing interesting" })),
    )
    .await;
    assert_eq!(body["patch"], json!({}));
    assert!(body["reply"].as_str().unwrap().contains("chair / table"));
}

#[tokio::test]
async fn form_adds_seats_only_for_seated_categories() {
    let app = build_test_router(memory_config()).await;

    let bed = json!({ "category": "bed" });
    let (status, body) = send(&app, Method::POST, "/api/v1/form", Some(bed)).await;
    assert_eq!(status, StatusCode::OK);
    let fields = body["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 8);
    assert_eq!(fields.last().unwrap()["key"], "seats");

    let table = json!({ "category": "table" });
    let (_, body) = send(&app, Method::POST, "/api/v1/form", Some(table)).await;
    assert_eq!(body["fields"].as_array().unwrap().len(), 7);

    let (_, body) = send(&app, Method::POST, "/api/v1/form", Some(json!({}))).await;
    assert_eq!(body["fields"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn item_lifecycle_with_demo_comps() {
    let app = build_test_router(memory_config()).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/items",
        Some(json!({
            "category": "chair",
            "name": "Eames",
            "buy_price": 20,
            "repair_cost": "5",
            "fees_pct": 10,
            "color": "black",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["condition"], "good");
    assert_eq!(created["color"], "black");

    let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/items/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, comps) = send(&app, Method::GET, &format!("/api/v1/items/{}/comps", id), None).await;
    assert_eq!(comps, json!({ "items": [] }));

    let (_, recommendation) = send(
        &app,
        Method::GET,
        &format!("/api/v1/items/{}/recommendation", id),
        None,
    )
    .await;
    assert!(approx(&recommendation["suggested_list_price"], 0.0));
    assert!(approx(&recommendation["estimated_profit"], -25.0));

    let (status, refreshed) = send(
        &app,
        Method::POST,
        &format!("/api/v1/items/{}/comps", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let listings = refreshed["items"].as_array().unwrap();
    assert_eq!(listings.len(), 4);
    assert_eq!(listings[0]["title"], "Eames chair - listing A");

    let (_, recommendation) = send(
        &app,
        Method::GET,
        &format!("/api/v1/items/{}/recommendation", id),
        None,
    )
    .await;
    assert!(approx(&recommendation["market_median_price"], 67.5));
    assert!(approx(&recommendation["estimated_fees"], 6.75));
    assert!(approx(&recommendation["estimated_profit"], 35.75));

    let (_, listed) = send(&app, Method::GET, "/api/v1/items", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn non_object_item_body_is_treated_as_empty() {
    let app = build_test_router(memory_config()).await;
    let (status, created) = send(&app, Method::POST, "/api/v1/items", Some(json!([1, 2, 3]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["category"], "chair");
    assert!(approx(&created["buy_price"], 0.0));
}

#[tokio::test]
async fn missing_item_returns_not_found_body() {
    let app = build_test_router(memory_config()).await;
    for uri in [
        "/api/v1/items/99",
        "/api/v1/items/99/comps",
        "/api/v1/items/99/recommendation",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["code"], 404);
    }
    let (status, _) = send(&app, Method::POST, "/api/v1/items/99/comps", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ad_hoc_comps_and_recommendation() {
    let app = build_test_router(memory_config()).await;

    let (status, comps) = send(
        &app,
        Method::POST,
        "/api/v1/comps",
        Some(json!({ "category": "Desk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comps["items"][0]["title"], "desk - listing A");

    let (status, recommendation) = send(
        &app,
        Method::POST,
        "/api/v1/recommendations",
        Some(json!({
            "item": { "buy_price": 20, "repair_cost": 5, "fees_pct": 10 },
            "comps": comps["items"],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(approx(&recommendation["suggested_list_price"], 67.5));
    assert_eq!(recommendation["comps_used"], 4);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/recommendations",
        Some(json!({ "item": "chair", "comps": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn sqlite_store_persists_items_and_comps() {
    let tmp = tempdir().unwrap();
    let config = Config {
        store: StoreKind::Sqlite,
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        ..Config::default()
    };
    let app = build_test_router(config).await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/v1/items",
        Some(json!({ "category": "dresser", "name": "Tall" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, refreshed) = send(
        &app,
        Method::POST,
        &format!("/api/v1/items/{}/comps", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, stored) = send(&app, Method::GET, &format!("/api/v1/items/{}/comps", id), None).await;
    assert_eq!(stored, refreshed);

    let (_, listed) = send(&app, Method::GET, "/api/v1/items", None).await;
    assert_eq!(listed, json!([created]));
}

async fn send_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn malformed_bodies_get_json_error_bodies() {
    let app = build_test_router(memory_config()).await;

    let json_type = Some("application/json");
    let (status, body) = send_raw(&app, "/api/v1/items", json_type, "not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(!body["message"].as_str().unwrap().is_empty());

    let (status, body) = send_raw(
        &app,
        "/api/v1/agent/interpret",
        json_type,
        r#"{"message": 42}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 422);

    let (status, body) = send_raw(&app, "/api/v1/form", None, r#"{"category": "bed"}"#).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], 415);
}

#[tokio::test]
async fn comp_price_text_is_parsed_or_ignored() {
    let app = build_test_router(memory_config()).await;
    let (status, recommendation) = send(
        &app,
        Method::POST,
        "/api/v1/recommendations",
        Some(json!({
            "item": { "buy_price": 10 },
            "comps": [
                { "title": "a", "price": "$45", "source": "google", "link": "" },
                { "title": "b", "price": 55, "source": "google", "link": "" },
                { "title": "c", "price": "n/a", "source": "google", "link": "" },
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recommendation["comps_used"], 2);
    assert!(approx(&recommendation["suggested_list_price"], 50.0));
    assert!(approx(&recommendation["estimated_profit"], 40.0));
}
