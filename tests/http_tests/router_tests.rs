//! HTTP Router Tests
//!
//! Tests verify:
//! - The root descriptor
//! - Query-string parsing (`año`, `anio`, `causa`, `entidad`)
//! - 400 for a non-integer year, 404 for unknown paths
//! - Static docs hosting

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use incendios::http::{build_router, AppState};
use incendios::record::Record;
use incendios::store::DatasetStore;
use incendios::QueryService;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn records(value: Value) -> Vec<Record> {
    serde_json::from_value(value).unwrap()
}

fn router_with_docs(docs_dir: &Path) -> Router {
    let store = DatasetStore::from_records(
        records(json!([
            { "año": 2022, "causa": "Intencional" },
            { "año": 2023, "causa": "Agrícola" },
            { "año": 0, "causa": "Desconocida" },
        ])),
        records(json!([
            { "entidad": "Puebla", "año": 2023 },
            { "entidad": "Teziutlán", "año": 2021 },
        ])),
    );
    let state = AppState::new(QueryService::new(Arc::new(store)));
    build_router(state, docs_dir)
}

fn router() -> Router {
    router_with_docs(Path::new("./no-such-docs-dir"))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// =============================================================================
// Root Tests
// =============================================================================

#[tokio::test]
async fn test_root_descriptor() {
    let (status, body) = get_json(router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["proyecto"], "API Nacional de Incendios Forestales");
    assert_eq!(body["version"], incendios::VERSION);
    assert_eq!(body["endpoints"]["Datos Teziutlán"], "/data/teziutlan");
    assert_eq!(body["endpoints"]["Datos Nacional"], "/data/nacional");
    assert_eq!(body["endpoints"]["Documentación Visual"], "/docs");
}

// =============================================================================
// Regional Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_regional_without_params_returns_all() {
    let (status, body) = get_json(router(), "/data/teziutlan").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_regional_year_percent_encoded() {
    let (status, body) = get_json(router(), "/data/teziutlan?a%C3%B1o=2023").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "año": 2023, "causa": "Agrícola" }]));
}

#[tokio::test]
async fn test_regional_year_ascii_alias() {
    let (_, body) = get_json(router(), "/data/teziutlan?anio=2022").await;

    assert_eq!(body, json!([{ "año": 2022, "causa": "Intencional" }]));
}

#[tokio::test]
async fn test_regional_year_zero_filters() {
    let (_, body) = get_json(router(), "/data/teziutlan?anio=0").await;

    assert_eq!(body, json!([{ "año": 0, "causa": "Desconocida" }]));
}

#[tokio::test]
async fn test_regional_cause_case_insensitive() {
    let (_, body) = get_json(router(), "/data/teziutlan?causa=intencional").await;

    assert_eq!(body, json!([{ "año": 2022, "causa": "Intencional" }]));
}

#[tokio::test]
async fn test_empty_values_are_not_filters() {
    let (status, body) = get_json(router(), "/data/teziutlan?anio=&causa=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_params_are_ignored() {
    let (status, body) = get_json(router(), "/data/teziutlan?limite=5&orden=desc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_repeated_param_keeps_last_value() {
    let (status, body) = get_json(router(), "/data/teziutlan?causa=agr&causa=intenc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "año": 2022, "causa": "Intencional" }]));
}

#[tokio::test]
async fn test_repeated_year_only_last_is_parsed() {
    let (status, body) = get_json(router(), "/data/teziutlan?anio=dosmil&a%C3%B1o=2023").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "año": 2023, "causa": "Agrícola" }]));
}

#[tokio::test]
async fn test_padded_year_is_trimmed() {
    for uri in ["/data/teziutlan?anio=%202023", "/data/teziutlan?anio=+2023"] {
        let (status, body) = get_json(router(), uri).await;

        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([{ "año": 2023, "causa": "Agrícola" }]), "{}", uri);
    }
}

#[tokio::test]
async fn test_non_integer_year_is_bad_request() {
    let (status, body) = get_json(router(), "/data/teziutlan?anio=dosmil").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("integer"));
}

// =============================================================================
// National Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_national_entity_filter() {
    let (status, body) = get_json(router(), "/data/nacional?entidad=tezi").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "entidad": "Teziutlán", "año": 2021 }]));
}

#[tokio::test]
async fn test_national_entity_and_year() {
    let (_, body) = get_json(router(), "/data/nacional?entidad=pue&anio=2021").await;

    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_national_repeated_entity_keeps_last_value() {
    let (status, body) = get_json(router(), "/data/nacional?entidad=tezi&entidad=pue").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "entidad": "Puebla", "año": 2023 }]));
}

#[tokio::test]
async fn test_national_bad_year() {
    let (status, _) = get_json(router(), "/data/nacional?a%C3%B1o=2023.5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Fallback / Docs Tests
// =============================================================================

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, body) = get_json(router(), "/data/estatal").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "not found" }));
}

#[tokio::test]
async fn test_docs_served_from_directory() {
    let docs = TempDir::new().unwrap();
    fs::write(docs.path().join("index.html"), "<h1>Incendios</h1>").unwrap();

    let (status, body) = get(router_with_docs(docs.path()), "/docs/index.html").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Incendios</h1>");
}

#[tokio::test]
async fn test_missing_docs_asset_is_not_found() {
    let docs = TempDir::new().unwrap();

    let (status, _) = get(router_with_docs(docs.path()), "/docs/missing.css").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
