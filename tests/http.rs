//! End-to-end tests driving the router in-process.
//!
//! Each test builds its own environment map, so nothing depends on the
//! variables of the process running the tests.

use std::collections::HashMap;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use status_service::routes::create_router;
use status_service::state::AppState;
use status_service::templates::init_templates;

const STATUS_FIELDS: [&str; 9] = [
    "project_name",
    "description",
    "cluster",
    "service",
    "task_definition",
    "region",
    "repository",
    "status",
    "message",
];

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn app(pairs: &[(&str, &str)]) -> Router {
    let state = AppState::new(env(pairs), init_templates().unwrap(), false);
    create_router(state, None)
}

async fn get(app: Router, request: Request<Body>) -> (StatusCode, http::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

fn request(uri: &str) -> http::request::Builder {
    Request::builder().uri(uri)
}

async fn get_json(app: Router, request: Request<Body>) -> Value {
    let (status, headers, body) = get(app, request).await;
    assert_eq!(status, StatusCode::OK);
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(
        content_type.starts_with("application/json"),
        "expected JSON, got {content_type}"
    );
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_json_has_all_fields_non_empty() {
    let overrides: [&[(&str, &str)]; 3] = [
        &[],
        &[("PROJECT_NAME", "Billing"), ("AWS_REGION", "us-east-1")],
        &[("APP_STATUS", ""), ("CLUSTER_NAME", "")],
    ];
    for pairs in overrides {
        let json = get_json(
            app(pairs),
            request("/?format=json").body(Body::empty()).unwrap(),
        )
        .await;
        for field in STATUS_FIELDS {
            let value = json[field].as_str().unwrap_or_else(|| panic!("{field} missing"));
            assert!(!value.is_empty(), "{field} is empty");
        }
        assert!(json["contributors"].is_array());
    }
}

#[tokio::test]
async fn test_json_defaults() {
    let json = get_json(app(&[]), request("/?format=json").body(Body::empty()).unwrap()).await;
    assert_eq!(json["project_name"], "MTech Flask CI/CD Pipeline01");
    assert_eq!(
        json["description"],
        "Fully automated AWS ECS CI/CD deployment for a Flask API using CodeBuild, CodePipeline, and Docker."
    );
    assert_eq!(json["cluster"], "mtech-cicd-cluster");
    assert_eq!(json["service"], "flask-api-service");
    assert_eq!(json["task_definition"], "flask-api-task");
    assert_eq!(json["region"], "ap-south-1");
    assert_eq!(json["repository"], "GitHub → ECR → ECS");
    assert_eq!(json["status"], "Deployment successful and running");
    assert_eq!(json["message"], "Hello World from Flask CI/CD v2!");

    let first = &json["contributors"][0];
    assert!(first["name"].is_string());
    assert!(first["role"].is_string());
    assert!(first["contribution"].is_string());
}

#[tokio::test]
async fn test_json_overrides() {
    let json = get_json(
        app(&[("SERVICE_NAME", "orders-svc"), ("REPOSITORY", "CodeCommit")]),
        request("/?format=json").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(json["service"], "orders-svc");
    assert_eq!(json["repository"], "CodeCommit");
}

#[tokio::test]
async fn test_format_param_beats_accept() {
    let json = get_json(
        app(&[]),
        request("/?format=json")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert!(json["project_name"].is_string());
}

#[tokio::test]
async fn test_accept_json() {
    let json = get_json(
        app(&[]),
        request("/")
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert!(json["cluster"].is_string());
}

#[tokio::test]
async fn test_xhr_header() {
    let json = get_json(
        app(&[]),
        request("/")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert!(json["region"].is_string());
}

#[tokio::test]
async fn test_html_dashboard() {
    let (status, headers, body) = get(
        app(&[("PROJECT_NAME", "Payments Platform")]),
        request("/")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<title>Payments Platform</title>"));
}

#[tokio::test]
async fn test_html_default_title_is_project_name() {
    let (_, _, body) = get(app(&[]), request("/").body(Body::empty()).unwrap()).await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<title>MTech Flask CI/CD Pipeline01</title>"));
}

#[tokio::test]
async fn test_repeated_format_param_first_wins() {
    let (_, headers, _) = get(
        app(&[]),
        request("/?format=json&format=html")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("application/json"), "got {content_type}");

    let (_, headers, _) = get(
        app(&[]),
        request("/?format=html&format=json")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
}

// Known ambiguity: a wildcard Accept is not read as a JSON preference.
#[tokio::test]
async fn test_wildcard_accept_is_html() {
    let (_, headers, _) = get(
        app(&[]),
        request("/")
            .header(header::ACCEPT, "*/*")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_logo_from_env() {
    let (_, _, body) = get(
        app(&[("LOGO_URL", "https://cdn.example.com/logo.svg")]),
        request("/").body(Body::empty()).unwrap(),
    )
    .await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<img src=\"https://cdn.example.com/logo.svg\""));
}

#[tokio::test]
async fn test_logo_placeholder_without_static() {
    let (_, _, body) = get(app(&[]), request("/").body(Body::empty()).unwrap()).await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<div class=\"logo-placeholder\">LOGO</div>"));
}

#[tokio::test]
async fn test_static_logo_served_and_linked() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.png"), b"\x89PNG").unwrap();

    let state = AppState::new(env(&[]), init_templates().unwrap(), true);
    let router = create_router(state, Some(dir.path()));

    let (_, _, body) = get(router.clone(), request("/").body(Body::empty()).unwrap()).await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<img src=\"/static/logo.png\""));

    let (status, headers, body) = get(
        router,
        request("/static/logo.png").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"\x89PNG");
    assert_eq!(
        headers.get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=86400"
    );
}

#[tokio::test]
async fn test_health() {
    for pairs in [&[][..], &[("APP_STATUS", "degraded")][..]] {
        let (status, headers, body) =
            get(app(pairs), request("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, br#"{"status":"healthy"}"#);
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
    }
}

#[tokio::test]
async fn test_version_defaults() {
    let json = get_json(app(&[]), request("/version").body(Body::empty()).unwrap()).await;
    assert_eq!(json, serde_json::json!({"version": "v2.0", "build": "manual"}));
}

#[tokio::test]
async fn test_version_overrides() {
    let json = get_json(
        app(&[("APP_VERSION", "v2.4"), ("CODEBUILD_BUILD_NUMBER", "58")]),
        request("/version").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(json["version"], "v2.4");
    assert_eq!(json["build"], "58");
}

#[tokio::test]
async fn test_json_is_byte_identical_across_calls() {
    let router = app(&[("CLUSTER_NAME", "stable")]);
    let (_, _, first) = get(
        router.clone(),
        request("/?format=json").body(Body::empty()).unwrap(),
    )
    .await;
    let (_, _, second) = get(router, request("/?format=json").body(Body::empty()).unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_dashboard_cache_headers() {
    let (_, headers, _) = get(app(&[]), request("/").body(Body::empty()).unwrap()).await;
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-cache");
    assert_eq!(
        headers.get(header::VARY).unwrap(),
        "Accept, X-Requested-With"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _, body) = get(app(&[]), request("/nonexistent").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(String::from_utf8(body).unwrap().contains("Error 404"));
}
