//! End-to-end tests of the reqwest client and the portal against a stub
//! activities backend bound to an ephemeral port.

use activity_signup::view::NoticeKind;
use activity_signup::{
    ActivityApi, ClientError, Diagnostic, HttpActivityClient, PageOrigin, Portal, SignupOutcome,
    SignupRequest,
};
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;

// Key order differs from alphabetical on purpose.
const CATALOG: &str = r#"{
    "Programming Class": {
        "description": "Learn programming fundamentals and build software projects",
        "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        "max_participants": 20,
        "participants": ["emma@mergington.edu", "sophia@mergington.edu"]
    },
    "Chess Club": {
        "description": "Learn strategies and compete in chess tournaments",
        "schedule": "Fridays, 3:30 PM - 5:00 PM",
        "max_participants": 12,
        "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
    },
    "Art Studio": {
        "description": "Explore painting and drawing",
        "schedule": "Mondays, 4:00 PM - 5:30 PM",
        "max_participants": 1,
        "participants": ["amelia.rose@mergington.edu", "liam@mergington.edu"]
    },
    "Debate Team": {
        "description": "Argue both sides",
        "schedule": "Wednesdays, 3:30 PM - 5:00 PM",
        "max_participants": 10,
        "participants": []
    }
}"#;

async fn list_activities() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], CATALOG)
}

async fn signup(
    Path(activity): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let email = params.get("email").cloned().unwrap_or_default();
    match activity.as_str() {
        "Art Studio" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Activity full"})),
        )
            .into_response(),
        "Broken Club" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response(),
        "Garbled Club" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => Json(json!({"message": format!("Signed up {} for {}", email, activity)}))
            .into_response(),
    }
}

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn stub_backend() -> String {
    spawn_backend(
        Router::new()
            .route("/activities", get(list_activities))
            .route("/activities/:activity/signup", post(signup)),
    )
    .await
}

/// URL of a port nothing listens on
async fn dead_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_catalog_keeps_server_order() {
    let client = HttpActivityClient::new(stub_backend().await);

    let catalog = client.fetch_catalog().await.unwrap();

    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(
        names,
        vec!["Programming Class", "Chess Club", "Art Studio", "Debate Team"]
    );
    assert_eq!(catalog.get("Art Studio").unwrap().spots_left(), -1);
}

#[tokio::test]
async fn test_fetch_catalog_non_ok_status() {
    let base = spawn_backend(Router::new().route(
        "/activities",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    ))
    .await;
    let client = HttpActivityClient::new(base);

    let err = client.fetch_catalog().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Status {
            status: 503,
            path: "/activities".to_string()
        }
    );
}

#[tokio::test]
async fn test_fetch_catalog_malformed_body() {
    let base = spawn_backend(Router::new().route("/activities", get(|| async { "not json" }))).await;
    let client = HttpActivityClient::new(base);

    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_catalog_unreachable() {
    let client = HttpActivityClient::new(dead_backend().await);

    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_sign_up_percent_encodes_activity_and_email() {
    let client = HttpActivityClient::new(stub_backend().await);

    let reply = client
        .sign_up(&SignupRequest::new("Chess Club", "jane+chess@mergington.edu"))
        .await
        .unwrap();

    assert!(reply.success);
    assert_eq!(
        reply.body.message.as_deref(),
        Some("Signed up jane+chess@mergington.edu for Chess Club")
    );
}

#[tokio::test]
async fn test_sign_up_decodes_error_body() {
    let client = HttpActivityClient::new(stub_backend().await);

    let reply = client
        .sign_up(&SignupRequest::new("Art Studio", "jane@mergington.edu"))
        .await
        .unwrap();

    assert!(!reply.success);
    assert_eq!(reply.body.detail.as_deref(), Some("Activity full"));
}

#[tokio::test]
async fn test_sign_up_non_json_body_is_decode_error() {
    let client = HttpActivityClient::new(stub_backend().await);

    let err = client
        .sign_up(&SignupRequest::new("Garbled Club", "jane@mergington.edu"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_portal_renders_catalog() {
    let portal = Portal::new(HttpActivityClient::new(stub_backend().await));

    assert!(portal.start(PageOrigin::Network).await);

    let page = portal.snapshot().await;
    assert_eq!(page.cards().len(), 4);
    assert_eq!(page.activity_options.len(), 4);
    assert_eq!(page.cards()[0].name, "Programming Class");
    assert_eq!(page.cards()[2].roster.count(), 2);
    assert_eq!(page.cards()[3].roster.count(), 0);

    // Second load replaces rather than appends.
    portal.load_activities().await;
    let page = portal.snapshot().await;
    assert_eq!(page.cards().len(), 4);
    assert_eq!(page.activity_options.len(), 4);
}

#[tokio::test]
async fn test_portal_unreachable_backend_shows_diagnostic() {
    let base = dead_backend().await;
    let portal = Portal::new(HttpActivityClient::new(base.clone()));

    portal.start(PageOrigin::Network).await;

    let page = portal.snapshot().await;
    assert_eq!(
        page.diagnostic(),
        Some(&Diagnostic::CatalogUnavailable {
            probe_url: format!("{}/activities", base)
        })
    );
}

#[tokio::test]
async fn test_portal_signup_flow() {
    let portal = Portal::new(HttpActivityClient::new(stub_backend().await));
    portal.start(PageOrigin::Network).await;

    portal.fill_form("jane@mergington.edu", "Debate Team").await;
    let outcome = portal.submit_signup().await;
    assert_eq!(
        outcome,
        SignupOutcome::Accepted("Signed up jane@mergington.edu for Debate Team".to_string())
    );
    let page = portal.snapshot().await;
    assert!(page.form.email.is_empty());
    assert!(page.form.activity.is_empty());
    assert_eq!(page.notice.visible().unwrap().kind, NoticeKind::Success);

    portal.fill_form("jane@mergington.edu", "Art Studio").await;
    portal.submit_signup().await;
    let page = portal.snapshot().await;
    let notice = page.notice.visible().unwrap();
    assert_eq!(notice.text, "Activity full");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(page.form.activity, "Art Studio");

    portal.fill_form("jane@mergington.edu", "Broken Club").await;
    portal.submit_signup().await;
    let page = portal.snapshot().await;
    assert_eq!(page.notice.visible().unwrap().text, "An error occurred");
}

#[tokio::test]
async fn test_portal_signup_unreachable_backend() {
    let portal = Portal::new(HttpActivityClient::new(dead_backend().await));

    portal.fill_form("jane@mergington.edu", "Chess Club").await;
    let outcome = portal.submit_signup().await;

    assert_eq!(outcome, SignupOutcome::Failed);
    let page = portal.snapshot().await;
    assert_eq!(
        page.notice.visible().unwrap().text,
        "Failed to sign up. Please try again."
    );
}
